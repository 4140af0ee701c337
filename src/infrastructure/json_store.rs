//! JSON file store for the optimizer's documents.
//!
//! Reads `strategy_parameters.json`, `optimization_log.json`,
//! `parameter_history.json` and `trading_journal.json` from a data
//! directory. The store is strictly read-only.

use crate::domain::errors::DataError;
use crate::domain::optimization_log::OptimizationLog;
use crate::domain::parameter_history::ParameterHistory;
use crate::domain::repositories::{DataResult, OptimizationDataSource};
use crate::domain::strategy_parameters::StrategyParameters;
use crate::domain::trading_journal::TradingJournal;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PARAMETERS_FILE: &str = "strategy_parameters.json";
pub const OPTIMIZATION_LOG_FILE: &str = "optimization_log.json";
pub const PARAMETER_HISTORY_FILE: &str = "parameter_history.json";
pub const TRADING_JOURNAL_FILE: &str = "trading_journal.json";

/// Reads the optimizer's documents from a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn parameters_path(&self) -> PathBuf {
        self.data_dir.join(PARAMETERS_FILE)
    }

    pub fn optimization_log_path(&self) -> PathBuf {
        self.data_dir.join(OPTIMIZATION_LOG_FILE)
    }

    pub fn parameter_history_path(&self) -> PathBuf {
        self.data_dir.join(PARAMETER_HISTORY_FILE)
    }

    pub fn trading_journal_path(&self) -> PathBuf {
        self.data_dir.join(TRADING_JOURNAL_FILE)
    }

    fn load<T: DeserializeOwned>(&self, path: PathBuf) -> DataResult<T> {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:?} not found", path);
                return Ok(None);
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        match serde_json::from_str(&content) {
            Ok(document) => {
                debug!("Loaded {:?}", path);
                Ok(Some(document))
            }
            Err(source) => {
                warn!("Failed to parse {:?}: {}", path, source);
                Err(DataError::Malformed { path, source })
            }
        }
    }
}

impl OptimizationDataSource for JsonFileStore {
    fn strategy_parameters(&self) -> DataResult<StrategyParameters> {
        self.load(self.parameters_path())
    }

    fn optimization_log(&self) -> DataResult<OptimizationLog> {
        self.load(self.optimization_log_path())
    }

    fn parameter_history(&self) -> DataResult<ParameterHistory> {
        self.load(self.parameter_history_path())
    }

    fn trading_journal(&self) -> DataResult<TradingJournal> {
        self.load(self.trading_journal_path())
    }
}
