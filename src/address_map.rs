//! Static external-to-internal address mapping.

use std::collections::HashMap;
use std::path::Path;

use config::Format;
use tracing::debug;

use crate::config::read_config_file;
use crate::error::{Error, Result};

/// Maps addresses published in the public zone to the addresses that should
/// be served internally.
///
/// Keys are compared as literal strings: no normalization, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressMap {
    entries: HashMap<String, String>,
}

impl AddressMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a flat `external: internal` mapping file.
    ///
    /// The format follows the file extension (`.json`, `.toml`), YAML otherwise.
    /// Keys are taken verbatim: dotted addresses are never split into paths.
    pub fn load(path: &Path) -> Result<Self> {
        let (uri, text, format) = read_config_file(path)?;
        let table = format
            .parse(Some(&uri), &text)
            .map_err(|e| Error::InvalidConfig(format!("{uri}: {e}")))?;

        let entries = table
            .into_iter()
            .map(|(external, internal)| -> Result<(String, String)> {
                Ok((external, internal.into_string()?))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        debug!(path = %path.display(), entries = entries.len(), "loaded address map");
        Ok(Self { entries })
    }

    /// Internal address for `external`, if mapped.
    pub fn lookup(&self, external: &str) -> Option<&str> {
        self.entries.get(external).map(String::as_str)
    }

    /// Whether `external` has an internal counterpart.
    pub fn contains(&self, external: &str) -> bool {
        self.entries.contains_key(external)
    }

    /// Number of mapped addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AddressMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
