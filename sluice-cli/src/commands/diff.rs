//! Diff command handler
//!
//! Compares two exported versions of a graph.

use anyhow::Result;
use colored::*;
use sluice_canvas::diff::edge_status;
use sluice_canvas::{annotate_diff, summarize};
use sluice_core::domain::{DiffStatus, GraphSnapshot};
use std::path::Path;

use crate::input::read_graph;

/// Compare two graph versions and print the result
pub fn handle_diff(base_path: &Path, current_path: &Path, json: bool) -> Result<()> {
    let base = read_graph(base_path)?;
    let current = read_graph(current_path)?;

    let annotated = annotate_diff(&base, &current);
    let summary = summarize(&annotated);
    tracing::info!(
        added = summary.added,
        removed = summary.removed,
        modified = summary.modified,
        "Compared graph versions"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&annotated)?);
        return Ok(());
    }

    if summary.is_unchanged() {
        println!("{}", "No changes.".green());
        return Ok(());
    }

    println!(
        "{} added, {} removed, {} modified",
        summary.added.to_string().green(),
        summary.removed.to_string().red(),
        summary.modified.to_string().yellow()
    );
    print_changes(&annotated);

    Ok(())
}

fn print_changes(annotated: &GraphSnapshot) {
    for node in &annotated.nodes {
        if let Some(status) = node.diff_status {
            print_line(status, "node", &node.id, &node.kind);
        }
    }
    for edge in &annotated.edges {
        if let Some(status) = edge_status(edge) {
            let label = format!("{} -> {}", edge.source, edge.target);
            print_line(status, "edge", &edge.id, &label);
        }
    }
}

fn print_line(status: DiffStatus, what: &str, id: &str, detail: &str) {
    let marker = match status {
        DiffStatus::Added => "+".green().bold(),
        DiffStatus::Removed => "-".red().bold(),
        DiffStatus::Modified => "~".yellow().bold(),
        DiffStatus::Unchanged => return,
    };
    println!("  {} {} {} {}", marker, what, id.cyan(), detail.dimmed());
}
