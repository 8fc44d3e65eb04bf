//! Extraction errors

use thiserror::Error;

/// Result type for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors raised while reading input files
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File could not be opened or read
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV syntax error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON syntax or shape error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is not present in the header
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A row has fewer cells than the header requires
    #[error("Row {row} has {found} values, expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A cell could not be converted to its field type
    #[error("Malformed {field} on row {row}: '{value}'")]
    MalformedValue {
        field: &'static str,
        row: usize,
        value: String,
    },
}

impl ExtractError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn malformed(field: &'static str, row: usize, value: impl Into<String>) -> Self {
        ExtractError::MalformedValue {
            field,
            row,
            value: value.into(),
        }
    }
}
