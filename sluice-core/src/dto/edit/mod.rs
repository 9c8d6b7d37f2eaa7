//! Edit command DTOs
//!
//! Structural edits the graph editor can issue, in a serializable form so
//! that edit sequences can be scripted and replayed.

use serde::{Deserialize, Serialize};

use crate::domain::value::{ConfigMap, ConfigValue};

/// A single editor command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    /// Place a new operator; an id is generated when omitted
    AddNode {
        #[serde(default)]
        id: Option<String>,
        kind: String,
        #[serde(default)]
        config: ConfigMap,
    },
    /// Remove an operator and every edge touching it
    RemoveNode { id: String },
    /// Connect two operators
    Connect {
        #[serde(default)]
        id: Option<String>,
        source: String,
        target: String,
        #[serde(default)]
        pipeline_id: Option<ConfigValue>,
    },
    /// Remove a connection
    Disconnect { id: String },
    /// Set one config entry on an operator
    SetConfig {
        node: String,
        key: String,
        value: ConfigValue,
    },
    Undo,
    Redo,
}

impl EditCommand {
    /// True for commands that change the graph structurally and therefore
    /// must be recorded in history
    pub fn is_edit(&self) -> bool {
        !matches!(self, Self::Undo | Self::Redo)
    }
}
