//! Configuration types for internal-zone-gen.

use config::{FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Prefix for environment variable overrides, e.g. `INTERNAL_ZONE_GEN__DOMAIN`.
pub const ENV_PREFIX: &str = "INTERNAL_ZONE_GEN";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Only export the zone for this domain. All zones when unset.
    #[serde(default)]
    pub domain: Option<String>,

    /// Zone snapshot file to read zones and records from.
    pub zones_path: PathBuf,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "debug", "internal_zone_gen=debug,warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `path`, with environment overrides applied on top.
    ///
    /// A relative `zones_path` is resolved against the directory of `path`.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`Config::load`], reading overrides from `env` instead of the process environment.
    fn load_with_env(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let mut config: Config = config::Config::builder()
            .add_source(file_source(path)?)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        if config.zones_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.zones_path = dir.join(&config.zones_path);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(domain) = &self.domain {
            if domain.trim_end_matches('.').is_empty() {
                return Err(Error::InvalidConfig("domain must not be empty".into()));
            }
        }
        if self.zones_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("zones_path must not be empty".into()));
        }
        Ok(())
    }
}

/// Pick a file format from the extension. YAML unless `.json` or `.toml`.
pub fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => FileFormat::Json,
        Some("toml") => FileFormat::Toml,
        _ => FileFormat::Yaml,
    }
}

/// Build a required file source for the config builder.
pub fn file_source(path: &Path) -> Result<config::File<FileSourceFile, FileFormat>> {
    ensure_file(path)?;
    Ok(config::File::new(&path.to_string_lossy(), format_for(path)).required(true))
}

/// Read a configuration file verbatim. Returns its URI, contents and format.
pub fn read_config_file(path: &Path) -> Result<(String, String, FileFormat)> {
    ensure_file(path)?;
    let text = std::fs::read_to_string(path)?;
    Ok((path.display().to_string(), text, format_for(path)))
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingFile(path.to_path_buf()))
    }
}
