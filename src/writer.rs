//! Serialization of internal records into local DNS daemon configuration.

use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::metrics;
use crate::record::Record;

const UNBOUND_HEADER: &str = "# add below line to server section of your main unbound.conf\n\
                              # include \"/path/to/this/file\"\n\
                              \n";

/// Supported local DNS daemons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DaemonType {
    /// `address=/<host>/<ip>` lines for dnsmasq.
    Dnsmasq,
    /// `local-data:` lines for unbound's server section.
    Unbound,
}

impl DaemonType {
    /// All supported daemons.
    pub const ALL: [DaemonType; 2] = [DaemonType::Dnsmasq, DaemonType::Unbound];

    /// Lowercase daemon name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DaemonType::Dnsmasq => "dnsmasq",
            DaemonType::Unbound => "unbound",
        }
    }

    /// Fixed text written once before any record.
    pub fn header(&self) -> &'static str {
        match self {
            DaemonType::Dnsmasq => "",
            DaemonType::Unbound => UNBOUND_HEADER,
        }
    }

    /// Render one record as a single line, without the newline.
    pub fn format_record(&self, record: &Record) -> String {
        let value = record.first_value().unwrap_or_default();
        match self {
            DaemonType::Dnsmasq => {
                let host = record.name().strip_suffix('.').unwrap_or(record.name());
                format!("address=/{host}/{value}")
            }
            DaemonType::Unbound => format!(
                "local-data: \"{} {} IN {} {}\"",
                record.name(),
                record.ttl(),
                record.type_name(),
                value
            ),
        }
    }
}

impl fmt::Display for DaemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DaemonType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DaemonType::ALL
            .into_iter()
            .find(|daemon| daemon.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let supported: Vec<&str> = DaemonType::ALL.iter().map(|d| d.as_str()).collect();
                Error::InvalidConfig(format!(
                    "unknown DNS daemon type {s:?}, expected one of: {}",
                    supported.join(", ")
                ))
            })
    }
}

/// Writes records for one daemon to an output sink.
///
/// The daemon header is written on construction, so it appears exactly once
/// no matter how many zones are written afterwards.
pub struct RecordWriter<W: Write> {
    daemon: DaemonType,
    out: W,
    lines: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Create a writer and emit the daemon header.
    pub fn new(daemon: DaemonType, mut out: W) -> Result<Self> {
        out.write_all(daemon.header().as_bytes())?;
        Ok(Self {
            daemon,
            out,
            lines: 0,
        })
    }

    /// Daemon this writer renders for.
    pub fn daemon(&self) -> DaemonType {
        self.daemon
    }

    /// Number of record lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Write one line per record, in the order given.
    pub fn write(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            writeln!(self.out, "{}", self.daemon.format_record(record))?;
        }
        self.lines += records.len();

        debug!(daemon = %self.daemon, records = records.len(), "wrote records");
        metrics::record_lines_written(self.daemon.as_str(), records.len());
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
