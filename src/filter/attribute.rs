//! Attribute projections over a linked approach

use std::fmt;

use chrono::NaiveDate;

use crate::catalog::Approach;

/// The kind of value an attribute yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Date,
    Number,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Date => write!(f, "date"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Flag => write!(f, "flag"),
        }
    }
}

/// A comparable value, either extracted from an approach or supplied as a
/// reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Date(NaiveDate),
    Number(f64),
    Flag(bool),
}

impl AttributeValue {
    /// Returns the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Date(_) => ValueKind::Date,
            AttributeValue::Number(_) => ValueKind::Number,
            AttributeValue::Flag(_) => ValueKind::Flag,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Date(d) => write!(f, "{}", d),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Filterable attributes of an approach or its object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Calendar date of the approach
    Date,
    /// Approach distance (au)
    Distance,
    /// Relative velocity (km/s)
    Velocity,
    /// Object diameter (km), NaN when unknown
    Diameter,
    /// Object hazard flag
    Hazardous,
}

impl Attribute {
    /// Returns the kind of value this attribute yields
    pub fn kind(&self) -> ValueKind {
        match self {
            Attribute::Date => ValueKind::Date,
            Attribute::Distance | Attribute::Velocity | Attribute::Diameter => ValueKind::Number,
            Attribute::Hazardous => ValueKind::Flag,
        }
    }

    /// Returns the attribute name for display
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Date => "date",
            Attribute::Distance => "distance",
            Attribute::Velocity => "velocity",
            Attribute::Diameter => "diameter",
            Attribute::Hazardous => "hazardous",
        }
    }

    /// Projects this attribute out of an approach
    pub fn extract(&self, approach: &Approach<'_>) -> AttributeValue {
        let event = approach.event();
        match self {
            Attribute::Date => AttributeValue::Date(event.date()),
            Attribute::Distance => AttributeValue::Number(event.distance),
            Attribute::Velocity => AttributeValue::Number(event.velocity),
            Attribute::Diameter => AttributeValue::Number(approach.neo().diameter),
            Attribute::Hazardous => AttributeValue::Flag(approach.neo().hazardous),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
