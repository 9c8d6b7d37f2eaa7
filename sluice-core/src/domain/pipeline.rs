//! Pipeline identifiers
//!
//! Lineage data and edge data may encode the same pipeline id as a number or
//! as text (`1`, `1.0`, `"1"`, `" 1 "`). Everything that reads as an integer
//! is normalized to that integer; any other id is kept as trimmed text, so two
//! equal textual ids still compare equal.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

use crate::domain::value::ConfigValue;

/// Canonical pipeline identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineId {
    Numeric(i64),
    Text(String),
}

impl PipelineId {
    pub fn new(id: i64) -> Self {
        Self::Numeric(id)
    }

    /// Integer value, for numeric ids
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Numeric(id) => Some(*id),
            Self::Text(_) => None,
        }
    }

    /// Normalize a JSON number
    ///
    /// Integral floats become integers; anything else keeps its textual form.
    pub fn from_number(number: &Number) -> Self {
        match number.as_i64() {
            Some(id) => Self::Numeric(id),
            None => number
                .as_f64()
                .and_then(integral)
                .map(Self::Numeric)
                .unwrap_or_else(|| Self::Text(number.to_string())),
        }
    }

    /// Normalize a textual id
    ///
    /// Returns `None` for blank text.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let numeric = text
            .parse::<i64>()
            .ok()
            .or_else(|| text.parse::<f64>().ok().and_then(integral));
        Some(match numeric {
            Some(id) => Self::Numeric(id),
            None => Self::Text(text.to_string()),
        })
    }

    /// Normalize a config value; only numbers and strings can carry an id
    pub fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Number(n) => Some(Self::from_number(n)),
            ConfigValue::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Normalize untyped JSON
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Number(n) => Some(Self::from_number(n)),
            JsonValue::String(s) => Self::parse(s),
            _ => None,
        }
    }
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

impl From<i64> for PipelineId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<PipelineId> for ConfigValue {
    fn from(id: PipelineId) -> Self {
        match id {
            PipelineId::Numeric(id) => ConfigValue::from(id),
            PipelineId::Text(text) => ConfigValue::String(text),
        }
    }
}

impl FromStr for PipelineId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid pipeline id: `{}`", s))
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_textual_forms_agree() {
        let expected = Some(PipelineId::new(42));
        assert_eq!(PipelineId::from_json(&json!(42)), expected);
        assert_eq!(PipelineId::from_json(&json!(42.0)), expected);
        assert_eq!(PipelineId::from_json(&json!("42")), expected);
        assert_eq!(PipelineId::from_json(&json!(" 42 ")), expected);
        assert_eq!(PipelineId::from_json(&json!("42.0")), expected);
    }

    #[test]
    fn test_textual_ids_kept_as_text() {
        let expected = Some(PipelineId::Text("etl-orders".to_string()));
        assert_eq!(PipelineId::from_json(&json!("etl-orders")), expected);
        assert_eq!(PipelineId::from_json(&json!("  etl-orders ")), expected);
        assert_ne!(
            PipelineId::from_json(&json!("etl-orders")),
            PipelineId::from_json(&json!("etl-customers"))
        );
    }

    #[test]
    fn test_non_integral_numbers_match_their_text() {
        assert_eq!(
            PipelineId::from_json(&json!(1.5)),
            PipelineId::from_json(&json!("1.5"))
        );
        assert_eq!(
            PipelineId::from_json(&json!(u64::MAX)),
            PipelineId::from_json(&json!(u64::MAX.to_string()))
        );
        assert_eq!(PipelineId::from_json(&json!(1.5)).unwrap().as_i64(), None);
    }

    #[test]
    fn test_rejects_non_ids() {
        assert_eq!(PipelineId::from_json(&json!("")), None);
        assert_eq!(PipelineId::from_json(&json!("   ")), None);
        assert_eq!(PipelineId::from_json(&json!(true)), None);
        assert_eq!(PipelineId::from_json(&json!(null)), None);
        assert_eq!(PipelineId::from_json(&json!([1])), None);
    }

    #[test]
    fn test_from_config_value() {
        assert_eq!(
            PipelineId::from_value(&ConfigValue::from("7")),
            Some(PipelineId::new(7))
        );
        assert_eq!(PipelineId::from_value(&ConfigValue::Bool(true)), None);
    }

    #[test]
    fn test_from_str_and_display() {
        assert_eq!("-3".parse::<PipelineId>(), Ok(PipelineId::new(-3)));
        assert_eq!(
            "abc".parse::<PipelineId>(),
            Ok(PipelineId::Text("abc".to_string()))
        );
        assert!(" ".parse::<PipelineId>().is_err());
        assert_eq!(PipelineId::new(9).to_string(), "9");
        assert_eq!(PipelineId::Text("etl".to_string()).to_string(), "etl");
    }
}
