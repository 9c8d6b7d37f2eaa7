//! Config value types
//!
//! Nodes and edges carry free-form configuration attached by many producers.
//! Instead of an untyped blob it is stored as a tree of tagged values, so that
//! copying a graph is always a total structural clone.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

/// Mapping of config keys to values
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single configuration value
///
/// Nulls and non-finite numbers have no representation here. Converting
/// untyped JSON that contains them fails instead of passing the value through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<ConfigValue>),
    Map(ConfigMap),
}

impl ConfigValue {
    /// Build a number value from a float
    ///
    /// # Errors
    /// Returns `GraphError::UnsupportedValue` for NaN and infinities
    pub fn float(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(Self::Number)
            .ok_or_else(|| GraphError::unsupported(value.to_string()))
    }

    /// Convert untyped JSON into a config value
    ///
    /// # Errors
    /// Returns `GraphError::UnsupportedValue` naming the first null found
    pub fn from_json(value: JsonValue) -> Result<Self> {
        Self::from_json_at(value, "$")
    }

    fn from_json_at(value: JsonValue, path: &str) -> Result<Self> {
        match value {
            JsonValue::Null => Err(GraphError::unsupported(path)),
            JsonValue::Bool(b) => Ok(Self::Bool(b)),
            JsonValue::Number(n) => Ok(Self::Number(n)),
            JsonValue::String(s) => Ok(Self::String(s)),
            JsonValue::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::from_json_at(item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            JsonValue::Object(fields) => fields
                .into_iter()
                .map(|(key, item)| {
                    let value = Self::from_json_at(item, &format!("{}.{}", path, key))?;
                    Ok((key, value))
                })
                .collect::<Result<ConfigMap>>()
                .map(Self::Map),
        }
    }

    /// Convert back into untyped JSON
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => JsonValue::Number(n.clone()),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::List(items) => JsonValue::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Structural equality that compares numbers by value
    ///
    /// `1` and `1.0` are equivalent; other variants must match exactly.
    pub fn equivalent(&self, other: &ConfigValue) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => same_number(a, b),
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.equivalent(b))
            }
            (Self::Map(a), Self::Map(b)) => equivalent_maps(a, b),
            _ => self == other,
        }
    }
}

fn same_number(a: &Number, b: &Number) -> bool {
    match (a.as_i64(), b.as_i64()) {
        (Some(a), Some(b)) => a == b,
        _ => match (a.as_u64(), b.as_u64()) {
            (Some(a), Some(b)) => a == b,
            _ => a.as_f64() == b.as_f64(),
        },
    }
}

/// [`ConfigValue::equivalent`] applied entry by entry
pub fn equivalent_maps(a: &ConfigMap, b: &ConfigMap) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| value.equivalent(other)))
}

/// Convert an untyped JSON object into a config map
///
/// # Errors
/// Returns `GraphError::UnsupportedValue` if any value is null, or
/// `GraphError::InvalidGraph` if the value is not an object
pub fn config_map_from_json(value: JsonValue) -> Result<ConfigMap> {
    match ConfigValue::from_json(value)? {
        ConfigValue::Map(map) => Ok(map),
        _ => Err(GraphError::InvalidGraph(
            "config must be a JSON object".to_string(),
        )),
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::List(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        Self::Map(value)
    }
}
