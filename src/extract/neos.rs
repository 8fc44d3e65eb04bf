//! NEO catalog CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::model::AstroObject;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ExtractError, ExtractResult};

const PDES: &str = "pdes";
const NAME: &str = "name";
const DIAMETER: &str = "diameter";
const PHA: &str = "pha";

/// Reads near-Earth objects from a CSV file.
///
/// Objects are returned in file order.
pub fn load_neos(path: impl AsRef<Path>) -> ExtractResult<Vec<AstroObject>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractError::io(path, e))?;
    let neos = read_neos(file)?;

    let count = neos.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::ObjectsLoaded,
        &[("path", path_str.as_str()), ("count", count.as_str())],
    );

    Ok(neos)
}

/// Reads near-Earth objects from CSV data with a header row.
///
/// - `pha == "Y"` marks an object hazardous; any other value does not
/// - An empty `name` becomes `None`
/// - An empty `diameter` becomes unknown; any other value must be a finite,
///   non-negative number, or the error names the (1-based) data row
pub fn read_neos<R: Read>(reader: R) -> ExtractResult<Vec<AstroObject>> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    let pdes_col = column(&headers, PDES)?;
    let name_col = column(&headers, NAME)?;
    let diameter_col = column(&headers, DIAMETER)?;
    let pha_col = column(&headers, PHA)?;

    let mut neos = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let designation = cell(pdes_col);
        if designation.is_empty() {
            return Err(ExtractError::malformed(PDES, row, designation));
        }

        let name = match cell(name_col) {
            "" => None,
            n => Some(n.to_string()),
        };

        let diameter = match cell(diameter_col) {
            "" => None,
            d => Some(
                d.parse::<f64>()
                    .ok()
                    .filter(|x| x.is_finite() && *x >= 0.0)
                    .ok_or_else(|| ExtractError::malformed(DIAMETER, row, d))?,
            ),
        };

        let hazardous = cell(pha_col) == "Y";

        neos.push(AstroObject::new(designation, name, diameter, hazardous));
    }

    Ok(neos)
}

fn column(headers: &StringRecord, name: &str) -> ExtractResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ExtractError::MissingColumn(name.to_string()))
}
