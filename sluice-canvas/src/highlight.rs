//! Lineage highlighting
//!
//! Maps a column lineage path to the nodes and edges the canvas should
//! emphasize: every edge owned by a pipeline the path crosses, plus both of
//! its endpoints.

use serde::Serialize;
use sluice_core::domain::Edge;
use sluice_core::dto::lineage::ColumnLineage;
use std::collections::HashSet;
use tracing::trace;

/// Node and edge ids to emphasize
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighlightSet {
    pub nodes: HashSet<String>,
    pub edges: HashSet<String>,
}

impl HighlightSet {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }

    /// Node ids in lexical order
    pub fn sorted_nodes(&self) -> Vec<&str> {
        sorted(&self.nodes)
    }

    /// Edge ids in lexical order
    pub fn sorted_edges(&self) -> Vec<&str> {
        sorted(&self.edges)
    }
}

fn sorted(ids: &HashSet<String>) -> Vec<&str> {
    let mut ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

/// Computes the highlight set for a lineage path
///
/// An absent or empty path highlights nothing. Otherwise the distinct
/// pipeline ids of the path are collected once and the edges are scanned in a
/// single pass. Edges without a usable `pipeline_id` never match, and path
/// ids that match no edge contribute nothing.
pub fn compute_highlights(edges: &[Edge], lineage: Option<&ColumnLineage>) -> HighlightSet {
    let Some(lineage) = lineage.filter(|l| !l.is_empty()) else {
        return HighlightSet::default();
    };

    let pipeline_ids = lineage.pipeline_ids();
    let mut highlights = HighlightSet::default();
    for edge in edges {
        if edge.pipeline_id().is_some_and(|id| pipeline_ids.contains(&id)) {
            highlights.edges.insert(edge.id.clone());
            highlights.nodes.insert(edge.source.clone());
            highlights.nodes.insert(edge.target.clone());
        }
    }

    trace!(
        pipelines = pipeline_ids.len(),
        nodes = highlights.nodes.len(),
        edges = highlights.edges.len(),
        "Computed lineage highlights"
    );

    highlights
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sluice_core::dto::lineage::LineageSegment;

    fn edges() -> Vec<Edge> {
        vec![
            Edge::new("e1", "a", "b").with_pipeline(1),
            Edge::new("e2", "b", "c").with_pipeline(2),
        ]
    }

    fn lineage(ids: &[serde_json::Value]) -> ColumnLineage {
        ids.iter().cloned().map(LineageSegment::new).collect()
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_pipeline() {
        let result = compute_highlights(&edges(), Some(&lineage(&[json!(1)])));
        assert_eq!(result.edges, set(&["e1"]));
        assert_eq!(result.nodes, set(&["a", "b"]));
        assert!(!result.contains_node("c"));
        assert!(!result.contains_edge("e2"));
    }

    #[test]
    fn test_path_crossing_pipelines() {
        let result = compute_highlights(&edges(), Some(&lineage(&[json!(1), json!(2)])));
        assert_eq!(result.edges, set(&["e1", "e2"]));
        assert_eq!(result.sorted_nodes(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_absent_or_empty_path() {
        assert!(compute_highlights(&edges(), None).is_empty());
        assert!(compute_highlights(&edges(), Some(&ColumnLineage::default())).is_empty());
    }

    #[test]
    fn test_textual_ids_match_numeric_edges() {
        let result = compute_highlights(&edges(), Some(&lineage(&[json!("2")])));
        assert_eq!(result.edges, set(&["e2"]));

        let textual_edges = vec![Edge::new("e9", "x", "y").with_pipeline("1")];
        let result = compute_highlights(&textual_edges, Some(&lineage(&[json!(1.0)])));
        assert_eq!(result.edges, set(&["e9"]));
    }

    #[test]
    fn test_untagged_edges_and_unknown_ids_ignored() {
        let mut all = edges();
        all.push(Edge::new("e3", "c", "d"));
        let result = compute_highlights(&all, Some(&lineage(&[json!(1), json!(99)])));
        assert_eq!(result.edges, set(&["e1"]));
        assert!(!result.contains_node("d"));
    }

    #[test]
    fn test_idempotent_and_order_independent() {
        let path = lineage(&[json!(2), json!(1)]);
        let first = compute_highlights(&edges(), Some(&path));
        let second = compute_highlights(&edges(), Some(&path));
        assert_eq!(first, second);

        let mut reversed = edges();
        reversed.reverse();
        assert_eq!(compute_highlights(&reversed, Some(&path)), first);
    }

    #[test]
    fn test_textual_pipeline_ids() {
        let named = vec![
            Edge::new("e1", "a", "b").with_pipeline("etl-orders"),
            Edge::new("e2", "b", "c").with_pipeline("etl-customers"),
        ];

        let result = compute_highlights(&named, Some(&lineage(&[json!(" etl-orders")])));
        assert_eq!(result.edges, set(&["e1"]));
        assert_eq!(result.nodes, set(&["a", "b"]));

        let result = compute_highlights(&named, Some(&lineage(&[json!("etl-payments")])));
        assert!(result.is_empty());
    }
}
