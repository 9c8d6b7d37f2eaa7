//! Sluice Canvas
//!
//! State management for the pipeline canvas.
//!
//! This crate provides:
//! - Snapshot history: bounded, linear undo/redo over whole-graph snapshots
//! - Lineage highlighting: which nodes and edges a column lineage path touches
//! - Version diff: added/removed/modified annotations between two graphs
//! - Editor session: a graph editor that records history before every edit
//!
//! # Example
//!
//! ```
//! use sluice_canvas::{EditorSession, compute_highlights};
//! use sluice_core::dto::lineage::{ColumnLineage, LineageSegment};
//!
//! let mut session = EditorSession::default();
//! let source = session.add_node("source").unwrap();
//! let sink = session.add_node("sink").unwrap();
//! session.connect(&source, &sink, Some(1.into())).unwrap();
//!
//! let lineage = ColumnLineage::new(vec![LineageSegment::new(1)]);
//! let highlights = compute_highlights(session.edges(), Some(&lineage));
//! assert!(highlights.contains_node(&source));
//!
//! assert!(session.undo());
//! assert!(session.edges().is_empty());
//! ```

pub mod config;
pub mod diff;
pub mod highlight;
pub mod history;
pub mod session;

pub use config::{ConfigError, HistoryConfig};
pub use diff::{DiffSummary, annotate_diff, summarize};
pub use highlight::{HighlightSet, compute_highlights};
pub use history::SnapshotHistory;
pub use session::{EditorSession, GraphEdit};
