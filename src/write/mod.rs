//! Serialization of query results
//!
//! - `write_to_csv`: one row per approach, flat columns
//! - `write_to_json`: array of approaches, each with a nested `neo` object
//! - `write_results`: picks the format from the output path's extension
//!
//! Writers consume the result stream as they go and never buffer it whole.

mod csv_out;
mod errors;
mod json_out;
mod record;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::catalog::Approach;
use crate::observability::{log_event_with_fields, Event};

pub use csv_out::{write_to_csv, CSV_FIELDS};
pub use errors::{WriteError, WriteResult};
pub use json_out::write_to_json;

/// Output formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Detects the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> WriteResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(WriteError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Returns the format name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes results to `path` as CSV or JSON, returning the number of rows.
///
/// The format is checked before the file is created, so an unsupported
/// extension leaves the filesystem untouched.
pub fn write_results<'a, I>(results: I, path: impl AsRef<Path>) -> WriteResult<usize>
where
    I: IntoIterator<Item = Approach<'a>>,
{
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;

    let file = File::create(path).map_err(|e| WriteError::io(path, e))?;
    let out = BufWriter::new(file);
    let rows = match format {
        OutputFormat::Csv => write_to_csv(results, out)?,
        OutputFormat::Json => write_to_json(results, out)?,
    };

    let rows_str = rows.to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::ResultsWritten,
        &[
            ("path", path_str.as_str()),
            ("format", format.as_str()),
            ("rows", rows_str.as_str()),
        ],
    );

    Ok(rows)
}
