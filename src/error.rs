//! Error types for internal-zone-gen.

use std::path::PathBuf;

use hickory_proto::rr::RecordType;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while generating internal records.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error (output file, stdout, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration was read but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required input file is missing
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    /// The zone source could not deliver zones
    #[error("failed to fetch {scope}: {reason}")]
    FetchZones {
        /// What was being fetched, e.g. "all zones".
        scope: String,
        /// Underlying cause.
        reason: String,
    },

    /// The zone source answered, but with no zones
    #[error("no zone found")]
    NoZones,

    /// A zone has no records to transform
    #[error("no records found in zone {zone}")]
    EmptyRecordSet {
        /// Name of the offending zone.
        zone: String,
    },

    /// An A or CNAME record was constructed without values
    #[error("{record_type} record {name} has no values")]
    EmptyValues {
        /// Record owner name.
        name: String,
        /// Record type.
        record_type: RecordType,
    },
}

impl Error {
    /// Build a [`Error::FetchZones`] for the given domain filter.
    pub fn fetch_zones(domain: Option<&str>, reason: impl ToString) -> Self {
        Self::FetchZones {
            scope: fetch_scope(domain),
            reason: reason.to_string(),
        }
    }
}

/// Human-readable description of what a zone fetch covers.
pub fn fetch_scope(domain: Option<&str>) -> String {
    match domain {
        Some(domain) => format!("zone for domain {domain}"),
        None => "all zones".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_scope_messages() {
        let err = Error::fetch_zones(Some("example.com"), "boom");
        assert_eq!(
            err.to_string(),
            "failed to fetch zone for domain example.com: boom"
        );

        let err = Error::fetch_zones(None, "boom");
        assert_eq!(err.to_string(), "failed to fetch all zones: boom");
    }

    #[test]
    fn test_missing_file_message() {
        let err = Error::MissingFile(PathBuf::from("config.yaml"));
        assert_eq!(err.to_string(), "config.yaml does not exist");
    }
}
