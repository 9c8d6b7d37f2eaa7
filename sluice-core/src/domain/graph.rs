//! Pipeline graph snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::edge::Edge;
use crate::domain::node::Node;
use crate::error::{GraphError, Result};

/// The full editable state of a pipeline graph at one point in time
///
/// A snapshot owns all of its nodes and edges. Capturing one from a live
/// graph clones every node config and edge data bag, so later in-place edits
/// to the live graph can never reach a stored snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Deep-copies a live graph
    pub fn capture(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        }
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Checks id uniqueness and that every edge endpoint exists
    ///
    /// # Errors
    /// Returns `GraphError::DuplicateId` or `GraphError::UnknownNode` for the
    /// first violation found
    pub fn validate(&self) -> Result<()> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateId(node.id.clone()));
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateId(edge.id.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::UnknownNode(endpoint.clone()));
                }
            }
        }

        Ok(())
    }
}
