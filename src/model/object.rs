//! Near-Earth object entity

use std::fmt;

use super::EventId;

/// A catalogued near-Earth object
///
/// `approaches` is a derived grouping filled by `Dataset::build`; it holds
/// positions into the dataset's canonical event sequence, never the events
/// themselves.
#[derive(Debug, Clone)]
pub struct AstroObject {
    designation: String,
    /// IAU name, `None` when the object is unnamed
    pub(crate) name: Option<String>,
    /// Diameter in kilometers, NaN when unknown
    pub diameter: f64,
    /// Whether the object is flagged potentially hazardous
    pub hazardous: bool,
    pub(crate) approaches: Vec<EventId>,
}

impl AstroObject {
    /// Creates a new, unlinked object.
    ///
    /// An empty name is normalized to `None`.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter: diameter.unwrap_or(f64::NAN),
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Returns the primary designation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the name if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Returns the diameter, or `None` when unknown
    pub fn diameter_km(&self) -> Option<f64> {
        if self.diameter.is_nan() {
            None
        } else {
            Some(self.diameter)
        }
    }

    /// Returns true if the diameter is known
    pub fn has_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Ids of this object's approaches, in dataset order
    pub fn approach_ids(&self) -> &[EventId] {
        &self.approaches
    }

    /// Designation plus name, e.g. `433 (Eros)`
    pub fn fullname(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for AstroObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.fullname())?;
        match self.diameter_km() {
            Some(d) => write!(f, "a diameter of {:.3} km", d)?,
            None => write!(f, "an unknown diameter")?,
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}
