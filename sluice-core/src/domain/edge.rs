//! Edge domain types

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::PipelineId;
use crate::domain::value::{ConfigMap, ConfigValue};

/// Key in an edge's data bag naming the pipeline that owns the connection
pub const PIPELINE_ID_KEY: &str = "pipeline_id";

/// A directed data-flow connection between two nodes
///
/// Endpoints are plain node ids; the editor is responsible for keeping them
/// pointing at nodes of the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub data: ConfigMap,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            data: ConfigMap::new(),
        }
    }

    /// Tags the edge with the pipeline that produced it
    pub fn with_pipeline(mut self, pipeline_id: impl Into<ConfigValue>) -> Self {
        self.data
            .insert(PIPELINE_ID_KEY.to_string(), pipeline_id.into());
        self
    }

    /// Adds an arbitrary data entry
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Normalized owning pipeline, if the data bag carries a usable one
    pub fn pipeline_id(&self) -> Option<PipelineId> {
        self.data.get(PIPELINE_ID_KEY).and_then(PipelineId::from_value)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_id_from_data() {
        let numeric = Edge::new("e1", "a", "b").with_pipeline(3);
        let textual = Edge::new("e2", "a", "b").with_pipeline("3");
        let missing = Edge::new("e3", "a", "b");
        let garbage = Edge::new("e4", "a", "b").with_pipeline(true);
        let named = Edge::new("e5", "a", "b").with_pipeline(" etl-orders ");

        assert_eq!(numeric.pipeline_id(), Some(PipelineId::new(3)));
        assert_eq!(textual.pipeline_id(), numeric.pipeline_id());
        assert_eq!(missing.pipeline_id(), None);
        assert_eq!(garbage.pipeline_id(), None);
        assert_eq!(
            named.pipeline_id(),
            Some(PipelineId::Text("etl-orders".to_string()))
        );
    }

    #[test]
    fn test_edge_deserialize() {
        let edge: Edge = serde_json::from_str(
            r#"{"id":"e1","source":"a","target":"b","data":{"pipeline_id":"12","label":"orders"}}"#,
        )
        .unwrap();
        assert_eq!(edge.pipeline_id(), Some(PipelineId::new(12)));
        assert_eq!(edge.data["label"], ConfigValue::from("orders"));
    }

    #[test]
    fn test_touches() {
        let edge = Edge::new("e1", "a", "b");
        assert!(edge.touches("a"));
        assert!(edge.touches("b"));
        assert!(!edge.touches("c"));
    }
}
