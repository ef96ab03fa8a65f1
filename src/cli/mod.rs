//! CLI interface for mappr-config

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{FileFormat, PlotType};

#[derive(Parser)]
#[command(name = "mappr-config")]
#[command(version)]
#[command(about = "Validate and normalize graph player project settings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the sample project document
    Init {
        /// Where to write it
        #[arg(short, long, default_value = crate::config::loader::DEFAULT_PROJECT_FILENAME)]
        path: PathBuf,
    },

    /// Validate a project document and report every problem
    Validate {
        /// Project file (.json, .yaml, .yml or .toml)
        file: PathBuf,
    },

    /// Print a project document with every default filled in
    Normalize {
        /// Project file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: DocumentFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the snapshots of a project
    Snapshots {
        /// Project file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Include soft-deleted snapshots
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the default render settings
    Defaults {
        /// Plot type whose preset to show
        #[arg(short, long, default_value = "original")]
        plot_type: PlotTypeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl From<DocumentFormat> for FileFormat {
    fn from(format: DocumentFormat) -> Self {
        match format {
            DocumentFormat::Json => FileFormat::Json,
            DocumentFormat::Yaml => FileFormat::Yaml,
            DocumentFormat::Toml => FileFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlotTypeArg {
    Original,
    Scatterplot,
    Grid,
    Geo,
}

impl From<PlotTypeArg> for PlotType {
    fn from(arg: PlotTypeArg) -> Self {
        match arg {
            PlotTypeArg::Original => PlotType::Original,
            PlotTypeArg::Scatterplot => PlotType::Scatterplot,
            PlotTypeArg::Grid => PlotType::Grid,
            PlotTypeArg::Geo => PlotType::Geo,
        }
    }
}
