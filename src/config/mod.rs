//! Configuration for optview.
//!
//! Loaded from environment variables (after `.env`, see `main`). Every
//! variable is optional.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OPTIMIZER_COMMAND: &str = "python strategy_optimizer.py --run-once";

/// Viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Directory holding the optimizer's JSON documents.
    pub data_dir: PathBuf,
    /// Command suggested when the optimization log does not exist yet.
    pub optimizer_command: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            optimizer_command: DEFAULT_OPTIMIZER_COMMAND.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values are
    /// treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: get("OPTVIEW_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            optimizer_command: get("OPTVIEW_OPTIMIZER_COMMAND")
                .unwrap_or_else(|| DEFAULT_OPTIMIZER_COMMAND.to_string()),
        }
    }

    /// Overrides the data directory, e.g. from `--data-dir`.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }
}
