//! Column lineage DTOs supplied by the lineage service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::HashSet;

use crate::domain::pipeline::PipelineId;

/// Provenance chain of one column, possibly crossing several pipelines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLineage {
    #[serde(default)]
    pub path: Vec<LineageSegment>,
}

/// One hop of a lineage path
///
/// Only `pipeline_id` is interpreted; everything else the service sends is
/// kept verbatim in `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineageSegment {
    #[serde(default)]
    pub pipeline_id: JsonValue,
    #[serde(flatten)]
    pub metadata: Map<String, JsonValue>,
}

impl ColumnLineage {
    pub fn new(path: Vec<LineageSegment>) -> Self {
        Self { path }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Distinct normalized pipeline ids referenced by the path
    ///
    /// Segments whose id cannot be normalized are skipped.
    pub fn pipeline_ids(&self) -> HashSet<PipelineId> {
        self.path
            .iter()
            .filter_map(LineageSegment::pipeline_id)
            .collect()
    }
}

impl LineageSegment {
    pub fn new(pipeline_id: impl Into<JsonValue>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn pipeline_id(&self) -> Option<PipelineId> {
        PipelineId::from_json(&self.pipeline_id)
    }
}

impl FromIterator<LineageSegment> for ColumnLineage {
    fn from_iter<I: IntoIterator<Item = LineageSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_metadata() {
        let lineage: ColumnLineage = serde_json::from_value(json!({
            "path": [
                { "pipeline_id": 1, "column": "amount", "table": "orders" },
                { "pipeline_id": "2", "column": "total_amount", "transform": null }
            ]
        }))
        .unwrap();

        assert_eq!(lineage.path.len(), 2);
        assert_eq!(lineage.path[0].metadata["column"], "amount");
        assert_eq!(lineage.path[1].metadata["transform"], JsonValue::Null);
    }

    #[test]
    fn test_pipeline_ids_are_distinct_and_normalized() {
        let lineage: ColumnLineage = [
            LineageSegment::new(1),
            LineageSegment::new("1"),
            LineageSegment::new(2.0),
            LineageSegment::new("etl-orders"),
            LineageSegment::new(" etl-orders"),
            LineageSegment::new(""),
            LineageSegment::new(false),
        ]
        .into_iter()
        .collect();

        let ids = lineage.pipeline_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&PipelineId::new(1)));
        assert!(ids.contains(&PipelineId::new(2)));
        assert!(ids.contains(&PipelineId::Text("etl-orders".to_string())));
    }

    #[test]
    fn test_serialize_flattens_metadata() {
        let segment = LineageSegment::new(4)
            .with_metadata("column", "amount")
            .with_metadata("table", "orders");

        assert_eq!(
            serde_json::to_value(&segment).unwrap(),
            json!({ "pipeline_id": 4, "column": "amount", "table": "orders" })
        );
        assert_eq!(segment.pipeline_id(), Some(PipelineId::new(4)));
    }

    #[test]
    fn test_missing_path_is_empty() {
        let lineage: ColumnLineage = serde_json::from_str("{}").unwrap();
        assert!(lineage.is_empty());
        assert!(lineage.pipeline_ids().is_empty());
    }

    #[test]
    fn test_segment_without_id() {
        let segment: LineageSegment = serde_json::from_str(r#"{"column":"a"}"#).unwrap();
        assert_eq!(segment.pipeline_id(), None);
    }
}
