//! Output errors

use thiserror::Error;

/// Result type for writers
pub type WriteResult<T> = Result<T, WriteError>;

/// Errors raised while writing results
#[derive(Debug, Error)]
pub enum WriteError {
    /// Output path has an extension no writer handles
    #[error("Unsupported output format for '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    /// Output file could not be created or written
    #[error("Cannot write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Stream write failed
    #[error("Write failed: {0}")]
    Stream(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WriteError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        WriteError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
