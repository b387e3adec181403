//! Export run: fetch zones, generate internal records, write them out.

use std::io::Write;
use tracing::{debug, info};

use crate::address_map::AddressMap;
use crate::error::Result;
use crate::generator;
use crate::source::ZoneSource;
use crate::writer::RecordWriter;

/// Counts from a completed export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Zones processed.
    pub zones: usize,
    /// Internal records written.
    pub records: usize,
}

/// Drives one export from a zone source into a record writer.
pub struct Exporter {
    address_map: AddressMap,
}

impl Exporter {
    /// Create an exporter for the given address map.
    pub fn new(address_map: AddressMap) -> Self {
        Self { address_map }
    }

    /// Export every zone selected by `domain`, in source order.
    ///
    /// Stops at the first zone that fails; records of earlier zones have
    /// already been written by then.
    pub async fn run<S, W>(
        &self,
        source: &S,
        domain: Option<&str>,
        writer: &mut RecordWriter<W>,
    ) -> Result<ExportSummary>
    where
        S: ZoneSource + ?Sized,
        W: Write,
    {
        info!(
            domain = domain.unwrap_or("*"),
            daemon = %writer.daemon(),
            mapped_addresses = self.address_map.len(),
            "Starting export"
        );

        let zones = source.zones(domain).await?;
        let mut summary = ExportSummary::default();

        for zone in &zones {
            debug!(zone = %zone.name, records = zone.records.len(), "Fetched records of zone");

            let internal_records = generator::generate(zone, &self.address_map)?;
            writer.write(&internal_records)?;

            info!(
                zone = %zone.name,
                records = internal_records.len(),
                "Wrote internal records"
            );
            summary.zones += 1;
            summary.records += internal_records.len();
        }

        info!(
            zones = summary.zones,
            records = summary.records,
            "Export complete"
        );
        Ok(summary)
    }
}
