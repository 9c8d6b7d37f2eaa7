//! Input loading
//!
//! Reads the JSON documents the commands operate on: exported graphs,
//! lineage paths and edit scripts.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use sluice_core::domain::GraphSnapshot;
use std::path::Path;

/// Reads and deserializes a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
}

/// Reads a graph and checks its structure
pub fn read_graph(path: &Path) -> Result<GraphSnapshot> {
    let graph: GraphSnapshot = read_json(path)?;
    graph
        .validate()
        .with_context(|| format!("Invalid graph in: {}", path.display()))?;

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Loaded graph from {}",
        path.display()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_graph() {
        let file = json_file(
            r#"{"nodes":[{"id":"a","kind":"source"},{"id":"b","kind":"sink"}],
                "edges":[{"id":"e1","source":"a","target":"b","data":{"pipeline_id":1}}]}"#,
        );
        let graph = read_graph(file.path()).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_read_graph_rejects_dangling_edge() {
        let file = json_file(
            r#"{"nodes":[{"id":"a","kind":"source"}],
                "edges":[{"id":"e1","source":"a","target":"b"}]}"#,
        );
        let err = read_graph(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid graph"));
    }

    #[test]
    fn test_malformed_json() {
        let file = json_file(r#"{"nodes":["#);
        let err = read_json::<GraphSnapshot>(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<GraphSnapshot>(&dir.path().join("graph.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
