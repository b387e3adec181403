//! Shared test infrastructure for export integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use internal_zone_gen::{AddressMap, DaemonType, Exporter, FileZoneSource, Record, RecordWriter};

// --- Constants ---

pub const ZONE: &str = "example.com.";

pub const ADDRESS_MAP_YAML: &str = r#"
"203.0.113.10": "10.0.0.10"
"203.0.113.20": "10.0.0.20"
"#;

pub const ZONES_YAML: &str = r#"
zones:
  - name: example.com.
    records:
      - name: example.com.
        type: NS
        ttl: 172800
        values: ["ns-1.example.net.", "ns-2.example.net."]
      - name: web.example.com.
        type: A
        ttl: 300
        values: ["203.0.113.10"]
      - name: mail.example.com.
        type: A
        ttl: 300
        values: ["198.51.100.5"]
      - name: www.example.com.
        type: CNAME
        ttl: 3600
        values: ["web.example.com"]
      - name: webmail.example.com.
        type: CNAME
        ttl: 3600
        values: ["mail.example.com"]
      - name: api.example.com.
        type: A
        ttl: 60
        values: ["203.0.113.20"]
  - name: example.org.
    records:
      - name: shop.example.org.
        type: A
        ttl: 120
        values: ["203.0.113.20"]
"#;

// --- Fixture directory ---

/// Temporary directory holding config, address map and zone snapshot files.
pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("failed to write fixture file");
        path
    }

    /// Fixture with the default address map and zone snapshot.
    pub fn with_defaults() -> Self {
        let fixture = Self::new();
        fixture.write("address_map.yaml", ADDRESS_MAP_YAML);
        fixture.write("zones.yaml", ZONES_YAML);
        fixture
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

// --- Export helpers ---

/// Run an export from the snapshot at `zones` and return the rendered output.
pub async fn export_to_string(
    daemon: DaemonType,
    address_map: &Path,
    zones: &Path,
    domain: Option<&str>,
) -> internal_zone_gen::Result<String> {
    let address_map = AddressMap::load(address_map)?;
    let source = FileZoneSource::new(zones);
    let mut writer = RecordWriter::new(daemon, Vec::new())?;

    Exporter::new(address_map)
        .run(&source, domain, &mut writer)
        .await?;

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes).expect("writer produced invalid UTF-8"))
}

// --- Record helpers ---

pub fn a(name: &str, ttl: u32, address: &str) -> Record {
    Record::a(name, ttl, address, ZONE)
}

pub fn cname(name: &str, ttl: u32, target: &str) -> Record {
    Record::cname(name, ttl, target, ZONE)
}

pub fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::name).collect()
}
