//! Snapshot history
//!
//! Linear undo/redo over whole-graph snapshots. Every transfer across the
//! history boundary (recording the live graph, parking it for redo, handing a
//! snapshot back to the editor) is a deep copy, so the live graph and the two
//! stacks never share a node or an edge.
//!
//! The history never touches the live graph itself. `undo` and `redo` return
//! the snapshot to apply and the editor commits it to its own state.

use sluice_core::domain::{Edge, GraphSnapshot, Node};
use std::collections::VecDeque;
use tracing::debug;

use crate::config::{ConfigError, HistoryConfig};

/// Bounded past/future stacks of graph snapshots
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    /// Oldest first; the back is the most recent prior state
    past: VecDeque<GraphSnapshot>,
    /// Nearest first; the front is what `redo` restores next
    future: VecDeque<GraphSnapshot>,
    max_snapshots: usize,
}

impl SnapshotHistory {
    /// Creates an empty history with the default retention bound
    pub fn new() -> Self {
        Self::with_limit(HistoryConfig::default().max_snapshots)
    }

    /// Creates an empty history from a validated configuration
    pub fn with_config(config: &HistoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_limit(config.max_snapshots))
    }

    fn with_limit(max_snapshots: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(max_snapshots.min(64)),
            future: VecDeque::new(),
            max_snapshots,
        }
    }

    /// Records the pre-edit state of the live graph
    ///
    /// Must be called before the edit is applied. Any pending redo chain is
    /// discarded, and the oldest snapshots are dropped once the retention
    /// bound is exceeded.
    pub fn take_snapshot(&mut self, nodes: &[Node], edges: &[Edge]) {
        self.record(GraphSnapshot::capture(nodes, edges));
    }

    /// Records an already captured pre-edit snapshot
    pub fn record(&mut self, snapshot: GraphSnapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.max_snapshots {
            self.past.pop_front();
        }
        self.future.clear();

        debug!(undo_depth = self.past.len(), "Recorded graph snapshot");
    }

    /// Steps back one edit
    ///
    /// `nodes` and `edges` must be the live graph as it is now; a copy of it
    /// is parked for `redo`. Returns the snapshot the editor should apply, or
    /// `None` (with no state change) when there is nothing to undo.
    pub fn undo(&mut self, nodes: &[Node], edges: &[Edge]) -> Option<GraphSnapshot> {
        let snapshot = self.past.pop_back()?;
        self.future.push_front(GraphSnapshot::capture(nodes, edges));

        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Undo"
        );

        Some(snapshot)
    }

    /// Steps forward one undone edit; the mirror image of [`undo`](Self::undo)
    pub fn redo(&mut self, nodes: &[Node], edges: &[Edge]) -> Option<GraphSnapshot> {
        let snapshot = self.future.pop_front()?;
        self.past.push_back(GraphSnapshot::capture(nodes, edges));

        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Redo"
        );

        Some(snapshot)
    }

    /// Undo through setter callbacks
    ///
    /// Calls `apply_nodes` and `apply_edges` with the restored graph. Returns
    /// `false` without calling either when there is nothing to undo.
    pub fn undo_with<N, E>(
        &mut self,
        nodes: &[Node],
        edges: &[Edge],
        apply_nodes: N,
        apply_edges: E,
    ) -> bool
    where
        N: FnOnce(Vec<Node>),
        E: FnOnce(Vec<Edge>),
    {
        apply(self.undo(nodes, edges), apply_nodes, apply_edges)
    }

    /// Redo through setter callbacks
    pub fn redo_with<N, E>(
        &mut self,
        nodes: &[Node],
        edges: &[Edge],
        apply_nodes: N,
        apply_edges: E,
    ) -> bool
    where
        N: FnOnce(Vec<Node>),
        E: FnOnce(Vec<Edge>),
    {
        apply(self.redo(nodes, edges), apply_nodes, apply_edges)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_snapshots(&self) -> usize {
        self.max_snapshots
    }

    /// Prior states, oldest first
    pub fn past(&self) -> impl DoubleEndedIterator<Item = &GraphSnapshot> + ExactSizeIterator {
        self.past.iter()
    }

    /// Undone states, nearest first
    pub fn future(&self) -> impl DoubleEndedIterator<Item = &GraphSnapshot> + ExactSizeIterator {
        self.future.iter()
    }

    /// Forgets all recorded states
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn apply<N, E>(snapshot: Option<GraphSnapshot>, apply_nodes: N, apply_edges: E) -> bool
where
    N: FnOnce(Vec<Node>),
    E: FnOnce(Vec<Edge>),
{
    match snapshot {
        Some(snapshot) => {
            let (nodes, edges) = snapshot.into_parts();
            apply_nodes(nodes);
            apply_edges(edges);
            true
        }
        None => false,
    }
}
