//! Predicate evaluation over linked approaches
//!
//! Each filter compares one extracted attribute against a reference value.
//! No coercion: kinds must agree, which `AttributeFilter::new` enforces.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::catalog::Approach;

use super::attribute::{Attribute, AttributeValue, ValueKind};
use super::errors::{FilterError, FilterResult};

/// A pure boolean test over one linked approach
pub trait ApproachPredicate {
    /// Returns true if the approach satisfies this predicate
    fn test(&self, approach: &Approach<'_>) -> bool;
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// attribute <= reference
    Le,
    /// attribute == reference
    Eq,
    /// attribute >= reference
    Ge,
}

impl CompareOp {
    /// Returns true if `ordering` (attribute vs reference) satisfies the operator
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }

    /// Returns the operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Le => "<=",
            CompareOp::Eq => "==",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One attribute compared against one reference value
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeFilter {
    attribute: Attribute,
    op: CompareOp,
    reference: AttributeValue,
}

impl AttributeFilter {
    /// Creates a filter.
    ///
    /// Fails with NEODB_UNSUPPORTED_CRITERION if the reference kind does not
    /// match the attribute, and NEODB_INVALID_REFERENCE for a NaN reference.
    pub fn new(attribute: Attribute, op: CompareOp, reference: AttributeValue) -> FilterResult<Self> {
        if attribute.kind() != reference.kind() {
            return Err(FilterError::unsupported_criterion(format!(
                "{} takes a {} reference, got {} '{}'",
                attribute,
                attribute.kind(),
                reference.kind(),
                reference
            )));
        }
        if let AttributeValue::Number(n) = reference {
            if n.is_nan() {
                return Err(FilterError::invalid_reference(format!(
                    "{} reference is NaN",
                    attribute
                )));
            }
        }
        Ok(Self {
            attribute,
            op,
            reference,
        })
    }

    /// Approaches on the given date
    pub fn date_on(date: NaiveDate) -> Self {
        Self::typed(Attribute::Date, CompareOp::Eq, AttributeValue::Date(date))
    }

    /// Approaches on or after the given date
    pub fn date_from(date: NaiveDate) -> Self {
        Self::typed(Attribute::Date, CompareOp::Ge, AttributeValue::Date(date))
    }

    /// Approaches on or before the given date
    pub fn date_until(date: NaiveDate) -> Self {
        Self::typed(Attribute::Date, CompareOp::Le, AttributeValue::Date(date))
    }

    /// Approaches of objects with the given hazard flag
    pub fn hazardous(flag: bool) -> Self {
        Self::typed(Attribute::Hazardous, CompareOp::Eq, AttributeValue::Flag(flag))
    }

    /// Numeric bound on distance, velocity or diameter
    pub fn numeric(attribute: Attribute, op: CompareOp, bound: f64) -> FilterResult<Self> {
        Self::new(attribute, op, AttributeValue::Number(bound))
    }

    // Kinds agree by construction for the typed helpers above.
    fn typed(attribute: Attribute, op: CompareOp, reference: AttributeValue) -> Self {
        debug_assert_eq!(attribute.kind(), reference.kind());
        Self {
            attribute,
            op,
            reference,
        }
    }

    /// Returns the filtered attribute
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Returns the comparison operator
    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Returns the reference value
    pub fn reference(&self) -> AttributeValue {
        self.reference
    }

    fn compare(&self, actual: AttributeValue) -> bool {
        match (actual, self.reference) {
            (AttributeValue::Date(a), AttributeValue::Date(b)) => self.op.holds(a.cmp(&b)),
            // NaN (unknown diameter) has no ordering and fails closed
            (AttributeValue::Number(a), AttributeValue::Number(b)) => a
                .partial_cmp(&b)
                .map_or(false, |ordering| self.op.holds(ordering)),
            (AttributeValue::Flag(a), AttributeValue::Flag(b)) => self.op.holds(a.cmp(&b)),
            (actual, reference) => {
                debug_assert!(
                    false,
                    "filter on {} compared {} against {}",
                    self.attribute,
                    actual.kind(),
                    reference.kind()
                );
                false
            }
        }
    }
}

impl ApproachPredicate for AttributeFilter {
    fn test(&self, approach: &Approach<'_>) -> bool {
        self.compare(self.attribute.extract(approach))
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.op, self.reference)
    }
}

/// A conjunction of attribute filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<AttributeFilter>,
}

impl FilterSet {
    /// Creates an empty set, which matches every approach
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter to the conjunction
    pub fn push(&mut self, filter: AttributeFilter) {
        self.filters.push(filter);
    }

    /// Returns the filters in evaluation order
    pub fn filters(&self) -> &[AttributeFilter] {
        &self.filters
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is present
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns true if all filters accept the approach (AND semantics)
    pub fn matches(&self, approach: &Approach<'_>) -> bool {
        self.filters.iter().all(|filter| filter.test(approach))
    }
}

impl ApproachPredicate for FilterSet {
    fn test(&self, approach: &Approach<'_>) -> bool {
        self.matches(approach)
    }
}

impl From<Vec<AttributeFilter>> for FilterSet {
    fn from(filters: Vec<AttributeFilter>) -> Self {
        Self { filters }
    }
}

impl FromIterator<AttributeFilter> for FilterSet {
    fn from_iter<T: IntoIterator<Item = AttributeFilter>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.is_empty() {
            return write!(f, "(all)");
        }
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dataset;
    use crate::model::{ApproachEvent, AstroObject};
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single(diameter: Option<f64>, hazardous: bool, time: &str) -> Dataset {
        let time = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap();
        Dataset::build(
            vec![AstroObject::new("433", Some("Eros".into()), diameter, hazardous)],
            vec![ApproachEvent::new("433", time, 0.3976, 3.7289)],
        )
        .unwrap()
    }

    fn first(dataset: &Dataset) -> Approach<'_> {
        dataset.approaches().next().unwrap()
    }

    #[test]
    fn test_date_ignores_time_of_day() {
        let dataset = single(Some(16.84), false, "2025-11-30 23:59");
        let a = first(&dataset);

        assert!(AttributeFilter::date_on(date(2025, 11, 30)).test(&a));
        assert!(AttributeFilter::date_from(date(2025, 11, 30)).test(&a));
        assert!(AttributeFilter::date_until(date(2025, 11, 30)).test(&a));
        assert!(!AttributeFilter::date_until(date(2025, 11, 29)).test(&a));
        assert!(!AttributeFilter::date_from(date(2025, 12, 1)).test(&a));
    }

    #[test]
    fn test_numeric_bounds_inclusive() {
        let dataset = single(Some(16.84), false, "2025-11-30 02:18");
        let a = first(&dataset);

        let min = AttributeFilter::numeric(Attribute::Distance, CompareOp::Ge, 0.3976).unwrap();
        let max = AttributeFilter::numeric(Attribute::Distance, CompareOp::Le, 0.3976).unwrap();
        assert!(min.test(&a));
        assert!(max.test(&a));

        let too_fast = AttributeFilter::numeric(Attribute::Velocity, CompareOp::Ge, 4.0).unwrap();
        assert!(!too_fast.test(&a));
    }

    #[test]
    fn test_unknown_diameter_fails_closed() {
        let dataset = single(None, false, "2025-11-30 02:18");
        let a = first(&dataset);

        for bound in [0.0, 1.0, 1e9, -1.0] {
            for op in [CompareOp::Le, CompareOp::Eq, CompareOp::Ge] {
                let filter = AttributeFilter::numeric(Attribute::Diameter, op, bound).unwrap();
                assert!(!filter.test(&a), "{} matched an unknown diameter", filter);
            }
        }
    }

    #[test]
    fn test_hazard_flag() {
        let dataset = single(Some(1.0), true, "2025-11-30 02:18");
        let a = first(&dataset);
        assert!(AttributeFilter::hazardous(true).test(&a));
        assert!(!AttributeFilter::hazardous(false).test(&a));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let err = AttributeFilter::new(
            Attribute::Hazardous,
            CompareOp::Eq,
            AttributeValue::Date(date(2020, 1, 1)),
        )
        .unwrap_err();
        assert_eq!(err.code().code(), "NEODB_UNSUPPORTED_CRITERION");

        let err = AttributeFilter::numeric(Attribute::Date, CompareOp::Ge, 1.0).unwrap_err();
        assert_eq!(err.code().code(), "NEODB_UNSUPPORTED_CRITERION");
    }

    #[test]
    fn test_nan_reference_rejected() {
        let err = AttributeFilter::numeric(Attribute::Distance, CompareOp::Le, f64::NAN).unwrap_err();
        assert_eq!(err.code().code(), "NEODB_INVALID_REFERENCE");
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let dataset = single(None, false, "2025-11-30 02:18");
        assert!(FilterSet::new().test(&first(&dataset)));
    }

    #[test]
    fn test_set_is_conjunction() {
        let dataset = single(Some(16.84), false, "2025-11-30 02:18");
        let a = first(&dataset);

        let pass: FilterSet = vec![
            AttributeFilter::date_on(date(2025, 11, 30)),
            AttributeFilter::hazardous(false),
        ]
        .into();
        assert!(pass.test(&a));

        let fail: FilterSet = vec![
            AttributeFilter::date_on(date(2025, 11, 30)),
            AttributeFilter::hazardous(true),
        ]
        .into();
        assert!(!fail.test(&a));
    }

    #[test]
    fn test_display() {
        let set: FilterSet = vec![
            AttributeFilter::date_from(date(2020, 1, 1)),
            AttributeFilter::numeric(Attribute::Distance, CompareOp::Le, 0.025).unwrap(),
        ]
        .into();
        assert_eq!(set.to_string(), "date >= 2020-01-01 AND distance <= 0.025");
        assert_eq!(FilterSet::new().to_string(), "(all)");
    }
}
