//! Entity and value types for the NEO catalog
//!
//! - `AstroObject`: one catalogued body (near-Earth object)
//! - `ApproachEvent`: one close approach of a body to Earth
//! - `ObjectId` / `EventId`: arena indices into a `Dataset`
//!
//! # Invariants
//!
//! - A designation is immutable once the object is constructed
//! - An unknown diameter is NaN, never zero
//! - An absent name is `None`, never the empty string

mod approach;
mod object;
mod time;

pub use approach::ApproachEvent;
pub use object::AstroObject;
pub use time::{datetime_to_str, parse_calendar_date, DATETIME_OUTPUT_FORMAT};

use std::fmt;

/// Index of an object inside a `Dataset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    /// Returns the raw arena position
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Index of an approach event inside a `Dataset`
///
/// Event ids follow the canonical chronological order of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub(crate) usize);

impl EventId {
    /// Returns the raw arena position
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}
