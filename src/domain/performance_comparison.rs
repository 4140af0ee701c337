//! Performance snapshot relative to the optimizer's timeline.

use crate::domain::errors::OutOfRange;
use crate::domain::optimization_log::OptimizationRun;
use crate::domain::trading_journal::TradingJournal;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceComparison {
    pub total_trades: i64,
    pub optimization_count: usize,
    /// Win rate as a percentage (0-100).
    pub win_rate_pct: Decimal,
    pub total_pnl: Decimal,
    pub trades_at_first_optimization: i64,
    pub trades_at_last_optimization: i64,
    /// Negative when the journal was reset after the last run.
    pub trades_since_last_optimization: i64,
}

impl PerformanceComparison {
    /// Builds the comparison, or `None` when no optimization has run yet.
    ///
    /// Figures too large for their numeric type are reported as
    /// [`OutOfRange`] instead of wrapping or panicking.
    pub fn from_records(
        journal: &TradingJournal,
        runs: &[OptimizationRun],
    ) -> Result<Option<Self>, OutOfRange> {
        let (Some(first), Some(last)) = (runs.first(), runs.last()) else {
            return Ok(None);
        };

        let win_rate_pct = journal
            .win_rate
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(OutOfRange { field: "win_rate" })?;
        let trades_since_last_optimization = journal
            .total_trades
            .checked_sub(last.total_trades)
            .ok_or(OutOfRange {
                field: "total_trades",
            })?;

        Ok(Some(Self {
            total_trades: journal.total_trades,
            optimization_count: runs.len(),
            win_rate_pct,
            total_pnl: journal.total_pnl,
            trades_at_first_optimization: first.total_trades,
            trades_at_last_optimization: last.total_trades,
            trades_since_last_optimization,
        }))
    }

    /// Whether enough runs exist to say anything about adaptation.
    pub fn has_multiple_optimizations(&self) -> bool {
        self.optimization_count >= 2
    }
}
