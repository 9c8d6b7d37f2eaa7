//! Error types for the pipeline graph

use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur when building or editing a pipeline graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A value cannot be represented as a config value (null, NaN, ...)
    #[error("Unsupported config value at `{path}`")]
    UnsupportedValue {
        /// Dotted path of the offending value inside its mapping
        path: String,
    },

    /// A node id referenced by an edit does not exist
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// An edge id referenced by an edit does not exist
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),

    /// A node or edge with this id already exists
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// The graph breaks a structural invariant
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),
}

impl GraphError {
    /// Create an unsupported-value error for the given path
    pub fn unsupported(path: impl Into<String>) -> Self {
        Self::UnsupportedValue { path: path.into() }
    }

    /// Check if this error refers to a missing node or edge
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::UnknownEdge(_))
    }
}
