use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One optimizer run, appended to the log in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OptimizationRun {
    pub timestamp: Option<String>,
    pub total_trades: i64,
    pub analysis: RunAnalysis,
    pub application: ApplicationResult,
}

/// Pattern analysis produced for a run. Entries are free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunAnalysis {
    pub patterns: Vec<Value>,
    pub recommendations: Vec<Value>,
    pub priority_actions: Vec<Value>,
}

/// Outcome of applying a run's recommendations to the live parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApplicationResult {
    pub applied: i64,
    pub skipped: i64,
    pub changes: Vec<ParameterChange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParameterChange {
    pub category: Option<String>,
    pub parameter: Option<String>,
    pub old_value: Value,
    pub new_value: Value,
}

/// Full optimizer log, oldest first.
pub type OptimizationLog = Vec<OptimizationRun>;
