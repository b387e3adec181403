//! Zone and record data types.

use hickory_proto::rr::RecordType;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An immutable DNS resource record as published in a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    record_type: RecordType,
    type_name: String,
    ttl: u32,
    values: Vec<String>,
    zone: String,
}

impl Record {
    /// Create a new record.
    ///
    /// A and CNAME records must carry at least one value.
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        values: Vec<String>,
        zone: impl Into<String>,
    ) -> Result<Self> {
        Self::build(
            name.into(),
            record_type,
            record_type.to_string(),
            ttl,
            values,
            zone.into(),
        )
    }

    /// Create a record from its type mnemonic as published by the provider.
    ///
    /// Mnemonics hickory-proto does not know (e.g. "SPF") are kept verbatim in
    /// [`Record::type_name`] and typed as [`RecordType::Unknown`].
    pub fn from_mnemonic(
        name: impl Into<String>,
        mnemonic: &str,
        ttl: u32,
        values: Vec<String>,
        zone: impl Into<String>,
    ) -> Result<Self> {
        let type_name = mnemonic.to_ascii_uppercase();
        Self::build(
            name.into(),
            parse_record_type(&type_name),
            type_name,
            ttl,
            values,
            zone.into(),
        )
    }

    fn build(
        name: String,
        record_type: RecordType,
        type_name: String,
        ttl: u32,
        values: Vec<String>,
        zone: String,
    ) -> Result<Self> {
        if values.is_empty() && matches!(record_type, RecordType::A | RecordType::CNAME) {
            return Err(Error::EmptyValues { name, record_type });
        }

        Ok(Self {
            name,
            record_type,
            type_name,
            ttl,
            values,
            zone,
        })
    }

    /// Shorthand for an A record with a single address.
    pub fn a(name: &str, ttl: u32, address: &str, zone: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::A,
            type_name: RecordType::A.to_string(),
            ttl,
            values: vec![address.to_string()],
            zone: zone.to_string(),
        }
    }

    /// Shorthand for a CNAME record. `target` is written without trailing dot.
    pub fn cname(name: &str, ttl: u32, target: &str, zone: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::CNAME,
            type_name: RecordType::CNAME.to_string(),
            ttl,
            values: vec![target.to_string()],
            zone: zone.to_string(),
        }
    }

    /// Return a copy of this record carrying `values` instead of its own.
    pub fn with_values(&self, values: Vec<String>) -> Result<Self> {
        Self::build(
            self.name.clone(),
            self.record_type,
            self.type_name.clone(),
            self.ttl,
            values,
            self.zone.clone(),
        )
    }

    /// Fully-qualified owner name, trailing dot included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record type. `RecordType::Unknown` for mnemonics hickory-proto does not know.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Type mnemonic, e.g. "A" or "SPF".
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// TTL in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// All values in published order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value: the address of an A record, the target of a CNAME.
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Name of the zone this record belongs to.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

/// A DNS zone and its records, in the order they were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Zone name (e.g. "example.com.").
    pub name: String,
    /// Records in fetch order.
    pub records: Vec<Record>,
}

impl Zone {
    /// Create a zone from its name and records.
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Whether this zone is the one named by `domain`.
    ///
    /// Comparison ignores ASCII case and a trailing dot on either side.
    pub fn matches_domain(&self, domain: &str) -> bool {
        self.name
            .trim_end_matches('.')
            .eq_ignore_ascii_case(domain.trim_end_matches('.'))
    }
}

/// Parse a record type mnemonic such as "A" or "cname".
///
/// Unrecognized mnemonics map to `RecordType::Unknown(0)`; they are never A
/// or CNAME, so the generator passes over them.
pub fn parse_record_type(s: &str) -> RecordType {
    RecordType::from_str(&s.to_ascii_uppercase()).unwrap_or(RecordType::Unknown(0))
}
