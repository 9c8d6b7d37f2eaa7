//! Graph version diff
//!
//! Merges two versions of a pipeline graph into one annotated graph so the
//! canvas can show what an edit session (or a newer version) changed.

use serde::Serialize;
use sluice_core::domain::{
    ConfigMap, ConfigValue, DiffStatus, Edge, GraphSnapshot, Node, PIPELINE_ID_KEY,
    equivalent_maps,
};
use std::collections::HashMap;

/// Key in an edge's data bag carrying its diff annotation
pub const EDGE_DIFF_KEY: &str = "diff_status";

/// Counts of changed elements in an annotated graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }

    fn count(&mut self, status: DiffStatus) {
        match status {
            DiffStatus::Added => self.added += 1,
            DiffStatus::Removed => self.removed += 1,
            DiffStatus::Modified => self.modified += 1,
            DiffStatus::Unchanged => {}
        }
    }
}

/// Annotates `current` against `base`
///
/// The result holds every node and edge of `current` in order, followed by
/// those only present in `base`. Nodes get `diff_status`; edges get a
/// `diff_status` entry in their data bag. Runtime status, metrics and earlier
/// annotations are not compared.
pub fn annotate_diff(base: &GraphSnapshot, current: &GraphSnapshot) -> GraphSnapshot {
    let base_nodes: HashMap<&str, &Node> = base.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let current_nodes: HashMap<&str, &Node> =
        current.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let mut nodes: Vec<Node> = current
        .nodes
        .iter()
        .map(|node| {
            let status = match base_nodes.get(node.id.as_str()) {
                None => DiffStatus::Added,
                Some(old) if !old.same_definition(node) => DiffStatus::Modified,
                Some(_) => DiffStatus::Unchanged,
            };
            annotated_node(node, status)
        })
        .collect();
    nodes.extend(
        base.nodes
            .iter()
            .filter(|n| !current_nodes.contains_key(n.id.as_str()))
            .map(|n| annotated_node(n, DiffStatus::Removed)),
    );

    let base_edges: HashMap<&str, &Edge> = base.edges.iter().map(|e| (e.id.as_str(), e)).collect();
    let current_edges: HashMap<&str, &Edge> =
        current.edges.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut edges: Vec<Edge> = current
        .edges
        .iter()
        .map(|edge| {
            let status = match base_edges.get(edge.id.as_str()) {
                None => DiffStatus::Added,
                Some(old) if !same_edge(old, edge) => DiffStatus::Modified,
                Some(_) => DiffStatus::Unchanged,
            };
            annotated_edge(edge, status)
        })
        .collect();
    edges.extend(
        base.edges
            .iter()
            .filter(|e| !current_edges.contains_key(e.id.as_str()))
            .map(|e| annotated_edge(e, DiffStatus::Removed)),
    );

    GraphSnapshot::new(nodes, edges)
}

/// Counts the annotations of a graph produced by [`annotate_diff`]
pub fn summarize(annotated: &GraphSnapshot) -> DiffSummary {
    let mut summary = DiffSummary::default();
    annotated
        .nodes
        .iter()
        .filter_map(|n| n.diff_status)
        .chain(annotated.edges.iter().filter_map(edge_status))
        .for_each(|status| summary.count(status));
    summary
}

/// Diff annotation of an edge, if it has one
pub fn edge_status(edge: &Edge) -> Option<DiffStatus> {
    edge.data
        .get(EDGE_DIFF_KEY)
        .and_then(ConfigValue::as_str)
        .and_then(DiffStatus::parse)
}

fn annotated_node(node: &Node, status: DiffStatus) -> Node {
    let mut node = node.clone();
    node.diff_status = Some(status);
    node
}

fn annotated_edge(edge: &Edge, status: DiffStatus) -> Edge {
    let mut edge = edge.clone();
    edge.data
        .insert(EDGE_DIFF_KEY.to_string(), status.as_str().into());
    edge
}

fn same_edge(a: &Edge, b: &Edge) -> bool {
    a.source == b.source
        && a.target == b.target
        && a.pipeline_id() == b.pipeline_id()
        && equivalent_maps(&comparable(&a.data), &comparable(&b.data))
}

/// Data entries that describe the edge itself
///
/// The pipeline id is compared in normalized form by the caller.
fn comparable(data: &ConfigMap) -> ConfigMap {
    data.iter()
        .filter(|(key, _)| *key != EDGE_DIFF_KEY && *key != PIPELINE_ID_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
