//! Highlight command handler
//!
//! Loads a graph and a column lineage and prints the highlight set the
//! canvas would render for it.

use anyhow::Result;
use colored::*;
use sluice_canvas::{HighlightSet, compute_highlights};
use sluice_core::dto::lineage::ColumnLineage;
use std::path::Path;

use crate::input::{read_graph, read_json};

/// Compute and print highlights
pub fn handle_highlight(graph_path: &Path, lineage_path: &Path, json: bool) -> Result<()> {
    let graph = read_graph(graph_path)?;
    let lineage: ColumnLineage = read_json(lineage_path)?;

    let highlights = compute_highlights(&graph.edges, Some(&lineage));
    tracing::info!(
        pipelines = lineage.pipeline_ids().len(),
        nodes = highlights.nodes.len(),
        edges = highlights.edges.len(),
        "Computed highlights"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&sorted_json(&highlights))?);
    } else {
        print_highlights(&highlights);
    }

    Ok(())
}

fn sorted_json(highlights: &HighlightSet) -> serde_json::Value {
    serde_json::json!({
        "nodes": highlights.sorted_nodes(),
        "edges": highlights.sorted_edges(),
    })
}

fn print_highlights(highlights: &HighlightSet) {
    if highlights.is_empty() {
        println!("{}", "Nothing to highlight.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "Highlighting {} node(s) and {} edge(s):",
            highlights.nodes.len(),
            highlights.edges.len()
        )
        .bold()
    );
    println!("  Nodes: {}", highlights.sorted_nodes().join(", ").cyan());
    println!("  Edges: {}", highlights.sorted_edges().join(", ").cyan());
}
