//! Editor session
//!
//! Owns the live graph of one open pipeline and its history. Every mutation
//! goes through [`EditorSession::edit`], which captures the pre-edit state
//! before the change and records it once the change succeeds, so no edit can
//! escape history tracking and a failed edit leaves no trace.

use sluice_core::domain::{ConfigMap, ConfigValue, Edge, GraphSnapshot, Node};
use sluice_core::dto::edit::EditCommand;
use sluice_core::dto::lineage::ColumnLineage;
use sluice_core::{GraphError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{ConfigError, HistoryConfig};
use crate::diff::annotate_diff;
use crate::highlight::{HighlightSet, compute_highlights};
use crate::history::SnapshotHistory;

/// Mutable view of the live graph handed to an edit
pub struct GraphEdit<'a> {
    nodes: &'a mut Vec<Node>,
    edges: &'a mut Vec<Edge>,
}

impl GraphEdit<'_> {
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Places a node
    ///
    /// # Errors
    /// `GraphError::DuplicateId` if a node with the same id exists
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(GraphError::DuplicateId(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node together with every edge touching it
    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        self.edges.retain(|e| !e.touches(id));
        Ok(self.nodes.remove(index))
    }

    /// Adds an edge between two existing nodes
    pub fn connect(&mut self, edge: Edge) -> Result<()> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.iter().any(|n| &n.id == endpoint) {
                return Err(GraphError::UnknownNode(endpoint.clone()));
            }
        }
        if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(GraphError::DuplicateId(edge.id));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn disconnect(&mut self, id: &str) -> Result<Edge> {
        let index = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| GraphError::UnknownEdge(id.to_string()))?;
        Ok(self.edges.remove(index))
    }

    pub fn node_mut(&mut self, id: &str) -> Result<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Sets one config entry, returning the previous value
    pub fn set_config(
        &mut self,
        node_id: &str,
        key: impl Into<String>,
        value: ConfigValue,
    ) -> Result<Option<ConfigValue>> {
        let node = self.node_mut(node_id)?;
        Ok(node.config.insert(key.into(), value))
    }
}

/// One open pipeline-editing session
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    history: SnapshotHistory,
}

impl EditorSession {
    /// Opens a session on an existing graph with an empty history
    pub fn open(
        graph: GraphSnapshot,
        config: &HistoryConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let (nodes, edges) = graph.into_parts();
        Ok(Self {
            nodes,
            edges,
            history: SnapshotHistory::with_config(config)?,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Deep copy of the live graph
    pub fn graph(&self) -> GraphSnapshot {
        GraphSnapshot::capture(&self.nodes, &self.edges)
    }

    /// Runs a mutation as one undoable edit
    ///
    /// If the mutation fails the live graph is put back as it was and the
    /// history is left untouched, including the redo chain.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut GraphEdit<'_>) -> Result<T>) -> Result<T> {
        let before = self.graph();
        let mut edit = GraphEdit {
            nodes: &mut self.nodes,
            edges: &mut self.edges,
        };

        match f(&mut edit) {
            Ok(value) => {
                self.history.record(before);
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "Edit rejected, restoring graph");
                (self.nodes, self.edges) = before.into_parts();
                Err(err)
            }
        }
    }

    /// Places a new node with a generated id
    pub fn add_node(&mut self, kind: impl Into<String>) -> Result<String> {
        self.add_node_with(Node::new(Uuid::new_v4().to_string(), kind))
    }

    /// Places a fully built node
    pub fn add_node_with(&mut self, node: Node) -> Result<String> {
        let id = node.id.clone();
        self.edit(|graph| graph.add_node(node))?;
        Ok(id)
    }

    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        self.edit(|graph| graph.remove_node(id))
    }

    /// Connects two nodes with a generated edge id
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        pipeline_id: Option<ConfigValue>,
    ) -> Result<String> {
        let mut edge = Edge::new(Uuid::new_v4().to_string(), source, target);
        if let Some(pipeline_id) = pipeline_id {
            edge = edge.with_pipeline(pipeline_id);
        }
        self.connect_with(edge)
    }

    pub fn connect_with(&mut self, edge: Edge) -> Result<String> {
        let id = edge.id.clone();
        self.edit(|graph| graph.connect(edge))?;
        Ok(id)
    }

    pub fn disconnect(&mut self, id: &str) -> Result<Edge> {
        self.edit(|graph| graph.disconnect(id))
    }

    pub fn set_config(
        &mut self,
        node_id: &str,
        key: impl Into<String>,
        value: ConfigValue,
    ) -> Result<Option<ConfigValue>> {
        self.edit(|graph| graph.set_config(node_id, key, value))
    }

    /// Reverts the last edit; returns whether anything changed
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.nodes, &self.edges) {
            Some(snapshot) => {
                (self.nodes, self.edges) = snapshot.into_parts();
                true
            }
            None => false,
        }
    }

    /// Reapplies the last undone edit; returns whether anything changed
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.nodes, &self.edges) {
            Some(snapshot) => {
                (self.nodes, self.edges) = snapshot.into_parts();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Highlights for a lineage path over the live edges
    pub fn highlights(&self, lineage: Option<&ColumnLineage>) -> HighlightSet {
        compute_highlights(&self.edges, lineage)
    }

    /// Live graph annotated against an earlier version
    pub fn diff_against(&self, base: &GraphSnapshot) -> GraphSnapshot {
        annotate_diff(base, &self.graph())
    }

    /// Applies one editor command
    ///
    /// Undo and redo on an empty stack are no-ops, as in the interactive editor.
    pub fn apply(&mut self, command: EditCommand) -> Result<()> {
        debug!(?command, "Applying edit command");

        match command {
            EditCommand::AddNode { id, kind, config } => {
                let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
                let node = Node {
                    config,
                    ..Node::new(id, kind)
                };
                self.add_node_with(node).map(drop)
            }
            EditCommand::RemoveNode { id } => self.remove_node(&id).map(drop),
            EditCommand::Connect {
                id,
                source,
                target,
                pipeline_id,
            } => match id {
                Some(id) => {
                    let mut edge = Edge::new(id, source, target);
                    if let Some(pipeline_id) = pipeline_id {
                        edge = edge.with_pipeline(pipeline_id);
                    }
                    self.connect_with(edge).map(drop)
                }
                None => self.connect(&source, &target, pipeline_id).map(drop),
            },
            EditCommand::Disconnect { id } => self.disconnect(&id).map(drop),
            EditCommand::SetConfig { node, key, value } => {
                self.set_config(&node, key, value).map(drop)
            }
            EditCommand::Undo => {
                self.undo();
                Ok(())
            }
            EditCommand::Redo => {
                self.redo();
                Ok(())
            }
        }
    }

    /// Replaces one node's config wholesale as a single edit
    pub fn replace_config(&mut self, node_id: &str, config: ConfigMap) -> Result<ConfigMap> {
        self.edit(|graph| {
            let node = graph.node_mut(node_id)?;
            Ok(std::mem::replace(&mut node.config, config))
        })
    }
}
