//! Derivation of a zone's internal records from its public records.
//!
//! A records are rewritten first so that CNAMEs are only ever resolved against
//! internal addresses, never against addresses that exist only publicly.

use hickory_proto::rr::RecordType;
use tracing::{debug, trace};

use crate::address_map::AddressMap;
use crate::error::{Error, Result};
use crate::metrics::{self, Timer, ZoneResult};
use crate::record::{Record, Zone};

/// Generate the internal view of `zone`.
///
/// Output is the rewritten A records followed by the A records synthesized
/// from CNAMEs, each group in input order. Records with no internal
/// counterpart are left out.
pub fn generate(zone: &Zone, address_map: &AddressMap) -> Result<Vec<Record>> {
    let timer = Timer::start();

    if zone.records.is_empty() {
        metrics::record_zone(ZoneResult::EmptyRecordSet, timer.elapsed());
        return Err(Error::EmptyRecordSet {
            zone: zone.name.clone(),
        });
    }

    let internal_a_records = rewrite_a_records(zone, address_map)?;
    let converted_records = convert_cname_records(zone, &internal_a_records)?;

    debug!(
        zone = %zone.name,
        records = zone.records.len(),
        rewritten = internal_a_records.len(),
        converted = converted_records.len(),
        "generated internal records"
    );
    metrics::record_zone(ZoneResult::Generated, timer.elapsed());

    let mut output = internal_a_records;
    output.extend(converted_records);
    Ok(output)
}

/// Rewrite A records whose address is in `address_map`; drop the rest.
pub fn rewrite_a_records(zone: &Zone, address_map: &AddressMap) -> Result<Vec<Record>> {
    let mut internal = Vec::new();
    let mut dropped = 0;

    for record in records_of_type(&zone.records, RecordType::A) {
        let mapped = record
            .first_value()
            .and_then(|external| address_map.lookup(external));

        match mapped {
            Some(address) => {
                trace!(name = %record.name(), internal = address, "rewriting A record");
                internal.push(record.with_values(vec![address.to_string()])?);
            }
            None => {
                trace!(name = %record.name(), "A record has no internal address");
                dropped += 1;
            }
        }
    }

    metrics::record_a_rewrite(&zone.name, internal.len(), dropped);
    Ok(internal)
}

/// Turn CNAMEs that point at an internal A record into A records.
///
/// Only one hop is followed, and only `internal_a_records` are searched. When
/// several internal records share the target name the first one wins.
pub fn convert_cname_records(zone: &Zone, internal_a_records: &[Record]) -> Result<Vec<Record>> {
    let mut converted = Vec::new();
    let mut unresolved = 0;

    for cname in records_of_type(&zone.records, RecordType::CNAME) {
        let Some(target) = cname.first_value().map(|value| format!("{value}.")) else {
            unresolved += 1;
            continue;
        };

        match internal_a_records.iter().find(|a| a.name() == target) {
            Some(a_record) => {
                trace!(name = %cname.name(), target = %target, "converting CNAME to A record");
                converted.push(Record::new(
                    cname.name(),
                    RecordType::A,
                    cname.ttl(),
                    a_record.values().to_vec(),
                    zone.name.as_str(),
                )?);
            }
            None => {
                trace!(name = %cname.name(), target = %target, "CNAME target has no internal A record");
                unresolved += 1;
            }
        }
    }

    metrics::record_cname_conversion(&zone.name, converted.len(), unresolved);
    Ok(converted)
}

fn records_of_type(records: &[Record], record_type: RecordType) -> impl Iterator<Item = &Record> {
    records
        .iter()
        .filter(move |record| record.record_type() == record_type)
}
