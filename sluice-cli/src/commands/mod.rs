//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod diff;
mod highlight;
mod replay;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show which nodes and edges a column lineage path highlights
    Highlight {
        /// Path to the exported graph (JSON with `nodes` and `edges`)
        #[arg(short, long)]
        graph: PathBuf,

        /// Path to the column lineage (JSON with a `path` array)
        #[arg(short, long)]
        lineage: PathBuf,

        /// Print the highlight set as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two versions of a graph
    Diff {
        /// Earlier version
        #[arg(short, long)]
        base: PathBuf,

        /// Later version
        #[arg(short, long)]
        current: PathBuf,

        /// Print the annotated graph as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay an edit script through an editor session
    Replay {
        /// Starting graph; an empty graph when omitted
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Path to the edit script (JSON array of commands)
        #[arg(short, long)]
        script: PathBuf,

        /// Print the final graph as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Highlight {
            graph,
            lineage,
            json,
        } => highlight::handle_highlight(&graph, &lineage, json),
        Commands::Diff {
            base,
            current,
            json,
        } => diff::handle_diff(&base, &current, json),
        Commands::Replay {
            graph,
            script,
            json,
        } => replay::handle_replay(graph.as_deref(), &script, json, config),
    }
}
