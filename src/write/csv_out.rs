//! CSV writer

use std::io::Write;

use crate::catalog::Approach;

use super::errors::WriteResult;
use super::record::ApproachRecord;

/// Column header of CSV output
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Writes results as CSV with a header row, returning the number of rows.
///
/// An absent name is an empty cell, an unknown diameter is `nan`, and the
/// hazard flag is `True`/`False`.
pub fn write_to_csv<'a, I, W>(results: I, out: W) -> WriteResult<usize>
where
    I: IntoIterator<Item = Approach<'a>>,
    W: Write,
{
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_FIELDS)?;

    let mut rows = 0;
    for approach in results {
        let record = ApproachRecord::from_approach(&approach);
        let diameter = match record.neo.diameter_km {
            Some(d) => d.to_string(),
            None => "nan".to_string(),
        };
        let hazardous = if record.neo.potentially_hazardous {
            "True"
        } else {
            "False"
        };

        writer.write_record([
            record.datetime_utc.as_str(),
            record.distance_au.to_string().as_str(),
            record.velocity_km_s.to_string().as_str(),
            record.neo.designation,
            record.neo.name,
            diameter.as_str(),
            hazardous,
        ])?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}
