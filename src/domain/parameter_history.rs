use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A snapshot taken by the tuner before it changes parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParameterHistoryEntry {
    pub timestamp: Option<String>,
    pub reason: Option<String>,
    pub parameters: Option<Value>,
}

impl ParameterHistoryEntry {
    /// `version` recorded in the parameter snapshot, if any.
    pub fn snapshot_version(&self) -> Option<u64> {
        self.parameters
            .as_ref()
            .and_then(|p| p.get("version"))
            .and_then(Value::as_u64)
    }
}

pub type ParameterHistory = Vec<ParameterHistoryEntry>;
