//! Node domain types

use serde::{Deserialize, Serialize};

use crate::domain::value::{ConfigMap, ConfigValue, equivalent_maps};

/// A pipeline operator placed on the canvas
///
/// Status and metrics are written by the execution side and are opaque to
/// the history and the highlighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub config: ConfigMap,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_per_second: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_pipeline_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_status: Option<DiffStatus>,
}

impl Node {
    /// Creates an idle node with an empty config
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            config: ConfigMap::new(),
            status: NodeStatus::default(),
            error_message: None,
            duration_ms: None,
            rows_per_second: None,
            source_asset_id: None,
            destination_asset_id: None,
            connection_id: None,
            sub_pipeline_id: None,
            diff_status: None,
        }
    }

    /// Adds a config entry
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// True when both nodes describe the same operator setup
    ///
    /// Runtime status, metrics and diff annotations are ignored. Config
    /// numbers are compared by value.
    pub fn same_definition(&self, other: &Node) -> bool {
        self.kind == other.kind
            && equivalent_maps(&self.config, &other.config)
            && self.source_asset_id == other.source_asset_id
            && self.destination_asset_id == other.destination_asset_id
            && self.connection_id == other.connection_id
            && self.sub_pipeline_id == other.sub_pipeline_id
    }
}

/// Execution status of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Idle,
    Pending,
    Running,
    Success,
    Failed,
    Warning,
}

/// Diff annotation used when comparing two versions of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Added,
    Removed,
    Modified,
    #[serde(rename = "none")]
    Unchanged,
}

impl DiffStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::Unchanged => "none",
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "added" => Some(Self::Added),
            "removed" => Some(Self::Removed),
            "modified" => Some(Self::Modified),
            "none" => Some(Self::Unchanged),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserialize_defaults() {
        let node: Node = serde_json::from_str(r#"{"id":"n1","kind":"source"}"#).unwrap();
        assert_eq!(node, Node::new("n1", "source"));
        assert_eq!(node.status, NodeStatus::Idle);
    }

    #[test]
    fn test_status_wire_format() {
        let mut node = Node::new("n1", "sink");
        node.status = NodeStatus::Running;
        node.diff_status = Some(DiffStatus::Unchanged);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["diff_status"], "none");
        assert!(json.get("error_message").is_none());
    }

    #[test]
    fn test_same_definition_ignores_runtime_fields() {
        let a = Node::new("n1", "transform").with_config("sql", "select 1");
        let mut b = a.clone();
        b.status = NodeStatus::Failed;
        b.error_message = Some("boom".to_string());
        b.duration_ms = Some(120);
        assert!(a.same_definition(&b));

        let c = a.clone().with_config("sql", "select 2");
        assert!(!a.same_definition(&c));
    }

    #[test]
    fn test_same_definition_compares_numbers_by_value() {
        let float = ConfigValue::float(1.0).unwrap();
        let a = Node::new("n1", "source").with_config("batch", 1);
        let b = Node::new("n1", "source").with_config("batch", float);
        let c = Node::new("n1", "source").with_config("batch", "1");
        assert!(a.same_definition(&b));
        assert!(!a.same_definition(&c));
    }

    #[test]
    fn test_diff_status_parse() {
        for status in [
            DiffStatus::Added,
            DiffStatus::Removed,
            DiffStatus::Modified,
            DiffStatus::Unchanged,
        ] {
            assert_eq!(DiffStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(DiffStatus::parse("changed"), None);
    }
}
