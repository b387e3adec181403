//! Metrics instrumentation for internal-zone-gen.
//!
//! All metrics are prefixed with `internal_zone_gen.`

use metrics::{counter, histogram};
use std::time::Instant;

/// Record the outcome of rewriting one zone's A records.
pub fn record_a_rewrite(zone: &str, rewritten: usize, dropped: usize) {
    counter!("internal_zone_gen.a_records.count", "zone" => zone.to_string(), "result" => "rewritten")
        .increment(rewritten as u64);
    counter!("internal_zone_gen.a_records.count", "zone" => zone.to_string(), "result" => "dropped")
        .increment(dropped as u64);
}

/// Record the outcome of converting one zone's CNAME records.
pub fn record_cname_conversion(zone: &str, converted: usize, unresolved: usize) {
    counter!("internal_zone_gen.cname_records.count", "zone" => zone.to_string(), "result" => "converted")
        .increment(converted as u64);
    counter!("internal_zone_gen.cname_records.count", "zone" => zone.to_string(), "result" => "unresolved")
        .increment(unresolved as u64);
}

/// Record a zone processed by the generator.
pub fn record_zone(result: ZoneResult, duration: std::time::Duration) {
    let result_str = match result {
        ZoneResult::Generated => "generated",
        ZoneResult::EmptyRecordSet => "empty_record_set",
    };

    counter!("internal_zone_gen.zone.count", "result" => result_str).increment(1);
    histogram!("internal_zone_gen.zone.duration.seconds").record(duration.as_secs_f64());
}

/// Zone outcome for metrics.
#[derive(Debug, Clone, Copy)]
pub enum ZoneResult {
    /// Internal records were generated.
    Generated,
    /// The zone had no records.
    EmptyRecordSet,
}

/// Record lines written for a daemon format.
pub fn record_lines_written(daemon: &str, lines: usize) {
    counter!("internal_zone_gen.writer.lines.count", "daemon" => daemon.to_string())
        .increment(lines as u64);
}

/// Helper for timing operations.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration since timer start.
    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}
