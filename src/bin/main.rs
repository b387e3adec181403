//! internal-zone-gen binary entry point.

use clap::Parser;
use internal_zone_gen::{
    telemetry, AddressMap, Config, DaemonType, Exporter, FileZoneSource, RecordWriter,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Generate internal DNS records for a local DNS daemon from public zone data.
#[derive(Parser, Debug)]
#[command(name = "internal-zone-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Type of DNS daemon to generate internal records for.
    #[arg(short = 't', long = "type", value_enum)]
    daemon_type: DaemonType,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Path to address map file.
    #[arg(short = 'm', long = "map", default_value = "address_map.yaml")]
    address_map: PathBuf,

    /// Destination path to write records to. Defaults to stdout.
    #[arg(short, long = "out")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize telemetry
    telemetry::init(&config.telemetry).map_err(|e| e as Box<dyn std::error::Error>)?;

    let address_map = AddressMap::load(&args.address_map)?;
    let source = FileZoneSource::new(&config.zones_path);

    info!(
        config_file = %args.config.display(),
        address_map = %args.address_map.display(),
        zones_path = %source.path().display(),
        daemon = %args.daemon_type,
        "Starting internal-zone-gen"
    );

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = RecordWriter::new(args.daemon_type, out)?;

    let summary = Exporter::new(address_map)
        .run(&source, config.domain.as_deref(), &mut writer)
        .await?;
    writer.into_inner()?;

    info!(
        zones = summary.zones,
        records = summary.records,
        "internal-zone-gen complete"
    );
    Ok(())
}
