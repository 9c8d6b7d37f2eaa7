//! Sluice Core
//!
//! Shared data model for the Sluice pipeline canvas.
//!
//! This crate contains:
//! - Domain types: the pipeline graph (nodes, edges, config values, pipeline ids)
//! - DTOs: lineage paths and edit commands exchanged with the editor and providers
//! - Errors: the graph error taxonomy shared by every crate in the workspace

pub mod domain;
pub mod dto;
pub mod error;

pub use error::{GraphError, Result};
