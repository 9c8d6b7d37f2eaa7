//! Core domain types
//!
//! This module contains the structures that make up a pipeline graph.
//! They are shared between the canvas history (which snapshots them) and the
//! lineage highlighter (which reads them), and carry no behavior beyond
//! structural helpers.

pub mod edge;
pub mod graph;
pub mod node;
pub mod pipeline;
pub mod value;

pub use edge::{Edge, PIPELINE_ID_KEY};
pub use graph::GraphSnapshot;
pub use node::{DiffStatus, Node, NodeStatus};
pub use pipeline::PipelineId;
pub use value::{ConfigMap, ConfigValue, equivalent_maps};
