use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mappr_config::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mappr_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => cli::commands::init(&path),
        Commands::Validate { file } => cli::commands::validate(&file),
        Commands::Normalize {
            file,
            format,
            output,
        } => cli::commands::normalize(&file, format, output.as_deref()),
        Commands::Snapshots { file, all, format } => cli::commands::snapshots(&file, all, format),
        Commands::Defaults { plot_type } => cli::commands::defaults(plot_type),
    }
}
