use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the optimizer's JSON documents.
///
/// A missing document is not an error: data sources report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    /// Path of the document that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            DataError::Io { path, .. } | DataError::Malformed { path, .. } => path,
        }
    }
}

/// A figure derived from the documents does not fit its numeric type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Trading journal value out of range: {field}")]
pub struct OutOfRange {
    pub field: &'static str,
}

/// Failure of a single report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
