//! Data Transfer Objects exchanged with the canvas collaborators
//!
//! This module contains the payloads that cross the canvas boundary: lineage
//! paths resolved by the lineage service, and edit commands issued by the
//! graph editor (or replayed from a script).

pub mod edit;
pub mod lineage;
