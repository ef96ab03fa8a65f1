//! CLI command implementations

use anyhow::{bail, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::cli::{
    error, info, print_snapshot_table, print_validation_errors, success, warn, DocumentFormat,
    OutputFormat, PlotTypeArg,
};
use crate::config::{self, loader, PlotType, RenderSettings, Snapshot};
use crate::error::Error;

/// Write the sample project document
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        warn(&format!("{} already exists", path.display()));
        return Ok(());
    }

    fs::write(path, loader::sample_project_content())?;

    success(&format!("Created {}", path.display()));
    info(&format!(
        "Run 'mappr-config validate {}' after editing it",
        path.display()
    ));

    Ok(())
}

/// Validate a project document
pub fn validate(file: &Path) -> Result<()> {
    let project = load_or_report(file)?;
    success(&format!(
        "{} is valid ({} snapshot(s), {} active)",
        file.display(),
        project.snapshots.len(),
        project.active_snapshots().count()
    ));
    Ok(())
}

/// Print or write a project with all defaults resolved
pub fn normalize(file: &Path, format: DocumentFormat, output: Option<&Path>) -> Result<()> {
    let project = load_or_report(file)?;

    match output {
        Some(out) => {
            let content = loader::to_string(&project, format.into())?;
            fs::write(out, content)?;
            success(&format!("Wrote normalized project to {}", out.display()));
        }
        None => {
            println!("{}", loader::to_string(&project, format.into())?);
        }
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotSummary<'a> {
    id: &'a str,
    snap_name: &'a str,
    plot_type: PlotType,
    is_enabled: bool,
    is_deleted: bool,
    last_viewed: bool,
}

/// List snapshots in display order
pub fn snapshots(file: &Path, all: bool, format: OutputFormat) -> Result<()> {
    let project = load_or_report(file)?;
    let last_viewed = project.global_settings.last_viewed_snapshot_id.as_str();

    let listed: Vec<&Snapshot> = if all {
        project.snapshots.iter().collect()
    } else {
        project.active_snapshots().collect()
    };

    match format {
        OutputFormat::Table => {
            print_snapshot_table(&listed, last_viewed);
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let summaries: Vec<SnapshotSummary> = listed
                .iter()
                .map(|s| SnapshotSummary {
                    id: &s.id,
                    snap_name: &s.display_name,
                    plot_type: s.layout.plot_type,
                    is_enabled: s.is_enabled,
                    is_deleted: s.is_deleted,
                    last_viewed: s.id == last_viewed,
                })
                .collect();

            if matches!(format, OutputFormat::Json) {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!("{}", serde_yaml::to_string(&summaries)?);
            }
        }
    }

    Ok(())
}

/// Print the default render settings for a plot type
pub fn defaults(plot_type: PlotTypeArg) -> Result<()> {
    let settings = RenderSettings::for_plot_type(plot_type.into());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn load_or_report(file: &Path) -> Result<config::ProjectConfig> {
    match config::load_project(file) {
        Ok(project) => Ok(project),
        Err(Error::Validation(errors)) => {
            print_validation_errors(&errors);
            bail!("{} has {} validation error(s)", file.display(), errors.errors().len())
        }
        Err(e) => {
            error(&format!("Failed to load {}: {}", file.display(), e));
            Err(e.into())
        }
    }
}
