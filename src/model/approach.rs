//! Close approach entity

use chrono::{NaiveDate, NaiveDateTime};

use super::time::datetime_to_str;

/// One close approach of a near-Earth object to Earth
///
/// Carries the designation of its object until a `Dataset` resolves it.
/// The resolved object is reached through the dataset (`Approach::neo`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachEvent {
    designation: String,
    /// Approach time, naive UTC
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units
    pub distance: f64,
    /// Velocity relative to Earth in km/s
    pub velocity: f64,
}

impl ApproachEvent {
    /// Creates a new approach for the object with the given designation
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
        }
    }

    /// Designation of the object this approach belongs to
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Calendar date of the approach (time of day stripped)
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Approach time formatted without seconds
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}
