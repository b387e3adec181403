//! internal-zone-gen - Split-horizon records for local DNS daemons.
//!
//! This crate derives the internal view of public DNS zones. A records whose
//! public address appears in an address map are rewritten to the mapped
//! internal address, and CNAMEs pointing at those rewritten names become A
//! records of their own. The result is rendered as dnsmasq or unbound
//! configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                         internal-zone-gen                          │
//! │                                                                    │
//! │  ┌──────────────┐   zones   ┌──────────────┐  records ┌─────────┐  │
//! │  │  ZoneSource  │──────────▶│  generator   │─────────▶│ Record  │──┼──▶ dnsmasq /
//! │  │ (snapshot)   │           │              │          │ Writer  │  │    unbound
//! │  └──────────────┘           └──────▲───────┘          └─────────┘  │
//! │                                    │                               │
//! │                             ┌──────┴───────┐                       │
//! │                             │  AddressMap  │                       │
//! │                             └──────────────┘                       │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Derivation
//!
//! ```text
//! address map:  1.2.3.4 → 10.0.0.1
//!
//! a.example.com.  A      1.2.3.4        → a.example.com.  A  10.0.0.1
//! b.example.com.  A      9.9.9.9        → (dropped, not mapped)
//! c.example.com.  CNAME  a.example.com  → c.example.com.  A  10.0.0.1
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use internal_zone_gen::{AddressMap, DaemonType, Exporter, FileZoneSource, RecordWriter};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let address_map = AddressMap::load(Path::new("address_map.yaml"))?;
//!     let source = FileZoneSource::new("zones.yaml");
//!     let mut writer = RecordWriter::new(DaemonType::Unbound, std::io::stdout())?;
//!
//!     Exporter::new(address_map)
//!         .run(&source, Some("example.com"), &mut writer)
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod address_map;
pub mod config;
pub mod error;
pub mod exporter;
pub mod generator;
pub mod metrics;
pub mod record;
pub mod source;
pub mod telemetry;
pub mod writer;

// Re-export main types
pub use address_map::AddressMap;
pub use crate::config::{Config, TelemetryConfig};
pub use error::{Error, Result};
pub use exporter::{ExportSummary, Exporter};
pub use generator::generate;
pub use record::{Record, Zone};
pub use source::{FileZoneSource, StaticZoneSource, ZoneSource};
pub use writer::{DaemonType, RecordWriter};
