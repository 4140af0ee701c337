//! Data Source Abstraction
//!
//! The reports never touch the filesystem directly. They read the optimizer's
//! four documents through [`OptimizationDataSource`], which lets the same
//! report code run against the JSON files on disk or an in-memory fixture.
//!
//! # Contract
//!
//! - `Ok(None)`: the document does not exist (expected, not an error)
//! - `Ok(Some(_))`: the document was read and parsed
//! - `Err(_)`: the document exists but could not be read or parsed
//!
//! Every call reads fresh; implementations must not cache between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use optview::domain::repositories::OptimizationDataSource;
//! use optview::infrastructure::JsonFileStore;
//!
//! let store = JsonFileStore::new("data");
//! if let Some(log) = store.optimization_log()? {
//!     println!("{} runs recorded", log.len());
//! }
//! # Ok::<(), optview::domain::errors::DataError>(())
//! ```

use crate::domain::errors::DataError;
use crate::domain::optimization_log::OptimizationLog;
use crate::domain::parameter_history::ParameterHistory;
use crate::domain::strategy_parameters::StrategyParameters;
use crate::domain::trading_journal::TradingJournal;

pub type DataResult<T> = Result<Option<T>, DataError>;

/// Read-only access to the documents maintained by the optimizer.
pub trait OptimizationDataSource {
    /// Current strategy parameters.
    fn strategy_parameters(&self) -> DataResult<StrategyParameters>;

    /// All optimizer runs, oldest first.
    fn optimization_log(&self) -> DataResult<OptimizationLog>;

    /// Parameter snapshots, oldest first.
    fn parameter_history(&self) -> DataResult<ParameterHistory>;

    /// Aggregate trading journal.
    fn trading_journal(&self) -> DataResult<TradingJournal>;
}
