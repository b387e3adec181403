//! Binary tests: argument handling, exit status and error reporting.

mod common;

use common::*;
use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_internal-zone-gen"));
    command
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("INTERNAL_ZONE_GEN__DOMAIN")
        .env_remove("INTERNAL_ZONE_GEN__ZONES_PATH");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Fixture with a config that points at the default zone snapshot.
fn configured() -> Fixture {
    let fixture = Fixture::with_defaults();
    fixture.write("config.yaml", "zones_path: zones.yaml\n");
    fixture
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn missing_config_file_exits_with_error() {
    let fixture = configured();
    let config = fixture.path("missing.yaml");
    let map = fixture.path("address_map.yaml");

    let output = run(
        &["-t", "dnsmasq", "-c", path_str(&config), "-m", path_str(&map)],
        &[],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("Error: {} does not exist", config.display())),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn missing_address_map_exits_with_error() {
    let fixture = configured();
    let config = fixture.path("config.yaml");
    let map = fixture.path("missing_map.yaml");

    let output = run(
        &["-t", "unbound", "-c", path_str(&config), "-m", path_str(&map)],
        &[],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("Error: {} does not exist", map.display())),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn unknown_daemon_type_is_rejected() {
    let output = run(&["-t", "bind"], &[]);
    assert!(!output.status.success());
}

// =========================================================================
// Output
// =========================================================================

#[test]
fn writes_records_to_stdout() {
    let fixture = configured();
    let config = fixture.path("config.yaml");
    let map = fixture.path("address_map.yaml");

    let output = run(
        &["-t", "dnsmasq", "-c", path_str(&config), "-m", path_str(&map)],
        &[],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "address=/web.example.com/10.0.0.10\n\
         address=/api.example.com/10.0.0.20\n\
         address=/www.example.com/10.0.0.10\n\
         address=/shop.example.org/10.0.0.20\n"
    );
}

#[test]
fn writes_records_to_out_file() {
    let fixture = configured();
    let config = fixture.path("config.yaml");
    let map = fixture.path("address_map.yaml");
    let out = fixture.path("internal.conf");

    let output = run(
        &[
            "--type",
            "unbound",
            "--config",
            path_str(&config),
            "--map",
            path_str(&map),
            "--out",
            path_str(&out),
        ],
        &[],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# add below line to server section of your main unbound.conf\n"));
    assert!(written.ends_with("local-data: \"shop.example.org. 120 IN A 10.0.0.20\"\n"));
}

#[test]
fn domain_env_override_selects_zone() {
    let fixture = configured();
    let config = fixture.path("config.yaml");
    let map = fixture.path("address_map.yaml");

    let output = run(
        &["-t", "dnsmasq", "-c", path_str(&config), "-m", path_str(&map)],
        &[("INTERNAL_ZONE_GEN__DOMAIN", "example.org")],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "address=/shop.example.org/10.0.0.20\n"
    );
}
