//! Zone sources: where public zones and their records come from.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::file_source;
use crate::error::{fetch_scope, Error, Result};
use crate::record::{Record, Zone};

/// Supplies zones with their records.
///
/// Implementations return `Error::FetchZones` when zones could not be
/// obtained and `Error::NoZones` when the fetch worked but matched nothing.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Fetch all zones, or only the zone named `domain` when given.
    async fn zones(&self, domain: Option<&str>) -> Result<Vec<Zone>>;
}

/// Keep the zones selected by `domain`, failing with `Error::NoZones` when none are left.
fn select_zones(zones: Vec<Zone>, domain: Option<&str>) -> Result<Vec<Zone>> {
    let zones: Vec<Zone> = match domain {
        Some(domain) => zones
            .into_iter()
            .filter(|zone| zone.matches_domain(domain))
            .collect(),
        None => zones,
    };

    if zones.is_empty() {
        return Err(Error::NoZones);
    }
    Ok(zones)
}

/// In-memory zones.
#[derive(Debug, Clone, Default)]
pub struct StaticZoneSource {
    zones: Vec<Zone>,
}

impl StaticZoneSource {
    /// Serve the given zones.
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }
}

#[async_trait]
impl ZoneSource for StaticZoneSource {
    async fn zones(&self, domain: Option<&str>) -> Result<Vec<Zone>> {
        select_zones(self.zones.clone(), domain)
    }
}

/// Zone snapshot file layout.
#[derive(Debug, Deserialize)]
struct ZoneFile {
    #[serde(default)]
    zones: Vec<ZoneEntry>,
}

#[derive(Debug, Deserialize)]
struct ZoneEntry {
    name: String,
    #[serde(default)]
    records: Vec<RecordEntry>,
}

#[derive(Debug, Deserialize)]
struct RecordEntry {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    ttl: u32,
    #[serde(default)]
    values: Vec<String>,
}

impl ZoneEntry {
    fn into_zone(self) -> Result<Zone> {
        let records = self
            .records
            .into_iter()
            .map(|entry| {
                Record::from_mnemonic(
                    entry.name,
                    &entry.record_type,
                    entry.ttl,
                    entry.values,
                    self.name.as_str(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Zone::new(self.name, records))
    }
}

/// Reads zones from a local snapshot of the provider's zone data.
///
/// ```yaml
/// zones:
///   - name: example.com.
///     records:
///       - { name: a.example.com., type: A, ttl: 300, values: ["1.2.3.4"] }
///       - { name: c.example.com., type: CNAME, ttl: 300, values: ["a.example.com"] }
/// ```
#[derive(Debug, Clone)]
pub struct FileZoneSource {
    path: PathBuf,
}

impl FileZoneSource {
    /// Read zones from `path`. Format follows the extension, YAML by default.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<Vec<Zone>> {
        let file: ZoneFile = config::Config::builder()
            .add_source(file_source(path)?)
            .build()?
            .try_deserialize()?;

        file.zones.into_iter().map(ZoneEntry::into_zone).collect()
    }
}

#[async_trait]
impl ZoneSource for FileZoneSource {
    async fn zones(&self, domain: Option<&str>) -> Result<Vec<Zone>> {
        info!(path = %self.path.display(), "Fetching {}", fetch_scope(domain));

        let path = self.path.clone();
        let zones = tokio::task::spawn_blocking(move || FileZoneSource::load(&path))
            .await
            .map_err(|e| Error::fetch_zones(domain, e))?
            .map_err(|e| Error::fetch_zones(domain, e))?;

        debug!(zones = zones.len(), "loaded zone snapshot");
        select_zones(zones, domain)
    }
}
