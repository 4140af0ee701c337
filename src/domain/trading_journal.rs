use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate snapshot of the paper-trading journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TradingJournal {
    /// Fraction in `[0, 1]`.
    pub win_rate: Decimal,
    pub total_trades: i64,
    pub total_pnl: Decimal,
}
