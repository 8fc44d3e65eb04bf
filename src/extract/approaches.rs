//! Close-approach JSON reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{parse_calendar_date, ApproachEvent};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ExtractError, ExtractResult};

const DES: &str = "des";
const CD: &str = "cd";
const DIST: &str = "dist";
const V_REL: &str = "v_rel";

/// Close-approach document: column names plus rows of values
#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Reads close approaches from a JSON file.
///
/// Approaches are returned in file order, which is chronological for the
/// published data.
pub fn load_approaches(path: impl AsRef<Path>) -> ExtractResult<Vec<ApproachEvent>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    let approaches = read_approaches(BufReader::new(file))?;

    let count = approaches.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::ApproachesLoaded,
        &[("path", path_str.as_str()), ("count", count.as_str())],
    );

    Ok(approaches)
}

/// Reads close approaches from a JSON document.
///
/// Columns are located by name, so field order may vary between files.
/// Cells may be JSON strings or numbers.
pub fn read_approaches<R: Read>(reader: R) -> ExtractResult<Vec<ApproachEvent>> {
    let doc: CadDocument = serde_json::from_reader(reader)?;

    let des_col = column(&doc.fields, DES)?;
    let cd_col = column(&doc.fields, CD)?;
    let dist_col = column(&doc.fields, DIST)?;
    let v_rel_col = column(&doc.fields, V_REL)?;
    let needed = des_col.max(cd_col).max(dist_col).max(v_rel_col) + 1;

    let mut approaches = Vec::with_capacity(doc.data.len());
    for (i, values) in doc.data.iter().enumerate() {
        let row = i + 1;
        if values.len() < needed {
            return Err(ExtractError::ShortRow {
                row,
                found: values.len(),
                expected: needed,
            });
        }

        let designation = text(&values[des_col], DES, row)?;
        let cd = text(&values[cd_col], CD, row)?;
        let time = parse_calendar_date(&cd).map_err(|_| ExtractError::malformed(CD, row, cd.as_str()))?;
        let distance = number(&values[dist_col], DIST, row)?;
        let velocity = number(&values[v_rel_col], V_REL, row)?;

        approaches.push(ApproachEvent::new(designation, time, distance, velocity));
    }

    Ok(approaches)
}

fn column(fields: &[String], name: &str) -> ExtractResult<usize> {
    fields
        .iter()
        .position(|f| f == name)
        .ok_or_else(|| ExtractError::MissingColumn(name.to_string()))
}

fn text(value: &Value, field: &'static str, row: usize) -> ExtractResult<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ExtractError::malformed(field, row, other.to_string())),
    }
}

// Distances and velocities are finite and non-negative
fn number(value: &Value, field: &'static str, row: usize) -> ExtractResult<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|x| x.is_finite() && *x >= 0.0)
        .ok_or_else(|| ExtractError::malformed(field, row, value.to_string()))
}
