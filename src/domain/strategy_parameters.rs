//! Strategy parameters as written by the optimizer's parameter tuner.
//!
//! Every field falls back to the value the report displays when the key is
//! absent, so a partially written file still renders.

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParameters {
    pub stop_loss: StopLossSettings,
    pub position_sizing: PositionSizing,
    pub filters: FilterRules,
    pub take_profit: Option<TakeProfitSettings>,
    pub entry_strategy: Option<EntryStrategy>,
    pub last_updated: Option<String>,
    pub version: u32,
}

impl Default for StrategyParameters {
    fn default() -> Self {
        Self {
            stop_loss: StopLossSettings::default(),
            position_sizing: PositionSizing::default(),
            filters: FilterRules::default(),
            take_profit: None,
            entry_strategy: None,
            last_updated: None,
            version: 1,
        }
    }
}

/// Stop-loss percentages by risk tier, plus token-type multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopLossSettings {
    pub high_risk_pct: f64,
    pub medium_risk_pct: f64,
    pub low_risk_pct: f64,
    pub tech_multiplier: f64,
    pub viral_multiplier: f64,
}

impl Default for StopLossSettings {
    fn default() -> Self {
        Self {
            high_risk_pct: 0.0,
            medium_risk_pct: 0.0,
            low_risk_pct: 0.0,
            tech_multiplier: 1.0,
            viral_multiplier: 1.0,
        }
    }
}

/// Position-size cap and multipliers by confidence tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionSizing {
    pub max_position_pct: f64,
    pub high_confidence_mult: f64,
    pub medium_confidence_mult: f64,
    pub low_confidence_mult: f64,
    pub high_risk_reduction: Option<f64>,
}

impl Default for PositionSizing {
    fn default() -> Self {
        Self {
            max_position_pct: 0.0,
            high_confidence_mult: 1.0,
            medium_confidence_mult: 1.0,
            low_confidence_mult: 1.0,
            high_risk_reduction: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// `None` accepts every confidence level.
    pub min_confidence: Option<String>,
    /// Shown as written: `7` and `7.0` render differently.
    pub max_risk_score: Number,
    pub min_liquidity_sol: Number,
    pub enabled_token_types: Option<Vec<String>>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            min_confidence: None,
            max_risk_score: Number::from(10),
            min_liquidity_sol: Number::from(0),
            enabled_token_types: None,
        }
    }
}

impl FilterRules {
    /// Minimum confidence, treating an empty string as "accept all".
    pub fn effective_min_confidence(&self) -> Option<&str> {
        self.min_confidence
            .as_deref()
            .filter(|level| !level.trim().is_empty())
    }
}

/// Take-profit ladders keyed by risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TakeProfitSettings {
    pub high_risk: Option<TakeProfitLadder>,
    pub medium_risk: Option<TakeProfitLadder>,
    pub low_risk: Option<TakeProfitLadder>,
}

impl TakeProfitSettings {
    /// Present tiers in display order, labelled.
    pub fn tiers(&self) -> Vec<(&'static str, &TakeProfitLadder)> {
        [
            ("High Risk", self.high_risk.as_ref()),
            ("Medium Risk", self.medium_risk.as_ref()),
            ("Low Risk", self.low_risk.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, ladder)| ladder.map(|l| (label, l)))
        .collect()
    }
}

/// Three take-profit targets as multiples of the predicted return, and the
/// fraction of the position exited at each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TakeProfitLadder {
    pub tp1_mult: f64,
    pub tp2_mult: f64,
    pub tp3_mult: f64,
    pub tp1_exit_pct: f64,
    pub tp2_exit_pct: f64,
    pub tp3_exit_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryStrategy {
    pub viral_meme_immediate_liquidity_threshold: Number,
    pub tech_wait_for_dip_liquidity_threshold: Number,
    pub wait_for_dip_max_hours: Number,
    pub wait_for_dip_target_pct: f64,
}

impl Default for EntryStrategy {
    fn default() -> Self {
        Self {
            viral_meme_immediate_liquidity_threshold: Number::from(0),
            tech_wait_for_dip_liquidity_threshold: Number::from(0),
            wait_for_dip_max_hours: Number::from(0),
            wait_for_dip_target_pct: 0.0,
        }
    }
}
