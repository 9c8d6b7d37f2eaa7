//! Sluice CLI
//!
//! Offline inspection tool for the pipeline canvas: computes lineage
//! highlights and version diffs from exported graph files, and replays edit
//! scripts through an editor session.

mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sluice")]
#[command(about = "Sluice pipeline canvas inspector", long_about = None)]
struct Cli {
    /// Number of snapshots kept for undo (overrides SLUICE_HISTORY_LIMIT, default 50)
    #[arg(long, global = true)]
    history_limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sluice_cli=info,sluice_canvas=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.history_limit)?;

    handle_command(cli.command, &config)
}
