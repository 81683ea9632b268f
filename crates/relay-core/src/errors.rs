//! Error types for bundle assembly and log parsing.

use std::path::PathBuf;

/// Errors raised before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A local input file (log, metrics, attachment) could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required run-context field is missing or empty.
    #[error("missing required field: {field}")]
    Config { field: &'static str },

    /// The metrics file is not a JSON object of numeric series.
    #[error("invalid metrics file {}: {message}", path.display())]
    Metrics { path: PathBuf, message: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
