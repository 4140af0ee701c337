//! In-Memory Data Source
//!
//! Holds the optimizer's documents in memory instead of on disk. Each
//! document is `None` until set, which the reports treat exactly like a
//! missing file.
//!
//! Useful for tests and for embedding the reports in another tool that
//! already has the documents loaded.

use crate::domain::optimization_log::{OptimizationLog, OptimizationRun};
use crate::domain::parameter_history::{ParameterHistory, ParameterHistoryEntry};
use crate::domain::repositories::{DataResult, OptimizationDataSource};
use crate::domain::strategy_parameters::StrategyParameters;
use crate::domain::trading_journal::TradingJournal;

#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    parameters: Option<StrategyParameters>,
    optimization_log: Option<OptimizationLog>,
    parameter_history: Option<ParameterHistory>,
    trading_journal: Option<TradingJournal>,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(mut self, parameters: StrategyParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_optimization_log(mut self, runs: Vec<OptimizationRun>) -> Self {
        self.optimization_log = Some(runs);
        self
    }

    pub fn with_parameter_history(mut self, entries: Vec<ParameterHistoryEntry>) -> Self {
        self.parameter_history = Some(entries);
        self
    }

    pub fn with_trading_journal(mut self, journal: TradingJournal) -> Self {
        self.trading_journal = Some(journal);
        self
    }
}

impl OptimizationDataSource for InMemoryDataSource {
    fn strategy_parameters(&self) -> DataResult<StrategyParameters> {
        Ok(self.parameters.clone())
    }

    fn optimization_log(&self) -> DataResult<OptimizationLog> {
        Ok(self.optimization_log.clone())
    }

    fn parameter_history(&self) -> DataResult<ParameterHistory> {
        Ok(self.parameter_history.clone())
    }

    fn trading_journal(&self) -> DataResult<TradingJournal> {
        Ok(self.trading_journal.clone())
    }
}
