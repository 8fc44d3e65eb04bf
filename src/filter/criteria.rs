//! User-facing query criteria and their translation into filters

use chrono::NaiveDate;
use serde::Deserialize;

use crate::observability::{log_event_with_fields, Event};

use super::attribute::Attribute;
use super::errors::FilterResult;
use super::predicate::{AttributeFilter, CompareOp, FilterSet};

/// Optional query criteria. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }
}

/// Translates criteria into a conjunction of filters.
///
/// One filter per present criterion:
/// - date -> date == d; start_date -> date >= d; end_date -> date <= d
/// - *_min -> attribute >= x; *_max -> attribute <= x
/// - hazardous -> hazardous == b
///
/// Contradictory criteria are accepted and simply match nothing.
/// A NaN bound returns NEODB_INVALID_REFERENCE.
pub fn create_filters(criteria: &Criteria) -> FilterResult<FilterSet> {
    let mut filters = FilterSet::new();

    if let Some(d) = criteria.date {
        filters.push(AttributeFilter::date_on(d));
    }
    if let Some(d) = criteria.start_date {
        filters.push(AttributeFilter::date_from(d));
    }
    if let Some(d) = criteria.end_date {
        filters.push(AttributeFilter::date_until(d));
    }

    let bounds = [
        (Attribute::Distance, CompareOp::Ge, criteria.distance_min),
        (Attribute::Distance, CompareOp::Le, criteria.distance_max),
        (Attribute::Velocity, CompareOp::Ge, criteria.velocity_min),
        (Attribute::Velocity, CompareOp::Le, criteria.velocity_max),
        (Attribute::Diameter, CompareOp::Ge, criteria.diameter_min),
        (Attribute::Diameter, CompareOp::Le, criteria.diameter_max),
    ];
    for (attribute, op, bound) in bounds {
        if let Some(x) = bound {
            filters.push(AttributeFilter::numeric(attribute, op, x)?);
        }
    }

    if let Some(flag) = criteria.hazardous {
        filters.push(AttributeFilter::hazardous(flag));
    }

    let count = filters.len().to_string();
    let described = filters.to_string();
    log_event_with_fields(
        Event::FiltersCreated,
        &[("count", count.as_str()), ("filters", described.as_str())],
    );

    Ok(filters)
}
