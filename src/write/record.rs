//! Flattened output record for one approach

use serde::Serialize;

use crate::catalog::Approach;

/// NEO fields nested under `neo` in JSON output
#[derive(Debug, Serialize)]
pub(crate) struct NeoRecord<'a> {
    pub designation: &'a str,
    pub name: &'a str,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: bool,
}

/// One approach as written to JSON
#[derive(Debug, Serialize)]
pub(crate) struct ApproachRecord<'a> {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord<'a>,
}

impl<'a> ApproachRecord<'a> {
    pub fn from_approach(approach: &Approach<'a>) -> Self {
        let event = approach.event();
        let neo = approach.neo();
        Self {
            datetime_utc: event.time_str(),
            distance_au: event.distance,
            velocity_km_s: event.velocity,
            neo: NeoRecord {
                designation: neo.designation(),
                name: neo.name().unwrap_or(""),
                diameter_km: neo.diameter_km(),
                potentially_hazardous: neo.hazardous,
            },
        }
    }
}
