//! CLI command tests
//!
//! Run with: cargo test --test cli_tests

use clap::Parser;
use mappr_config::cli::commands;
use mappr_config::cli::{Cli, Commands, DocumentFormat, OutputFormat, PlotTypeArg};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_cli_parse_validate() {
    let cli = Cli::try_parse_from(["mappr-config", "validate", "project.json"]).unwrap();
    match cli.command {
        Commands::Validate { file } => assert_eq!(file, PathBuf::from("project.json")),
        _ => panic!("expected validate"),
    }
}

#[test]
fn test_cli_parse_normalize_defaults() {
    let cli = Cli::try_parse_from(["mappr-config", "normalize", "p.yaml"]).unwrap();
    match cli.command {
        Commands::Normalize { format, output, .. } => {
            assert!(matches!(format, DocumentFormat::Json));
            assert!(output.is_none());
        }
        _ => panic!("expected normalize"),
    }
}

#[test]
fn test_cli_parse_snapshots_flags() {
    let cli =
        Cli::try_parse_from(["mappr-config", "snapshots", "p.json", "--all", "--format", "yaml"])
            .unwrap();
    match cli.command {
        Commands::Snapshots { all, format, .. } => {
            assert!(all);
            assert!(matches!(format, OutputFormat::Yaml));
        }
        _ => panic!("expected snapshots"),
    }
}

#[test]
fn test_cli_parse_defaults_plot_type() {
    let cli = Cli::try_parse_from(["mappr-config", "defaults", "--plot-type", "geo"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Defaults {
            plot_type: PlotTypeArg::Geo
        }
    ));

    assert!(Cli::try_parse_from(["mappr-config", "defaults", "--plot-type", "network"]).is_err());
}

#[test]
fn test_init_then_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mappr-project.json");

    commands::init(&path).unwrap();
    assert!(path.exists());
    commands::validate(&path).unwrap();
    println!("✓ init wrote a valid project");
}

#[test]
fn test_init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mappr-project.json");
    fs::write(&path, "{}").unwrap();

    commands::init(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_validate_fails_on_invalid_project() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "projName": "p", "settings": { "lastViewedSnap": "x" } }"#).unwrap();

    let err = commands::validate(&path).unwrap_err();
    assert!(err.to_string().contains("1 validation error(s)"));
}

#[test]
fn test_normalize_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.yaml");
    fs::write(
        &input,
        r#"{ "projName": "p", "snapshots": [{ "id": "a", "snapName": "A", "layout": { "plotType": "grid" } }] }"#,
    )
    .unwrap();

    commands::normalize(&input, DocumentFormat::Yaml, Some(&output)).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("nodeSizeScaleStrategy"));
    assert!(written.contains("plotType: grid"));
}
