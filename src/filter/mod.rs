//! Filter subsystem for neodb
//!
//! Turns user criteria into a conjunction of attribute predicates over
//! linked approaches.
//!
//! # Model
//!
//! - `Attribute`: closed set of projections (approach date, distance,
//!   velocity; object diameter, hazard flag)
//! - `CompareOp`: `<=`, `=`, `>=`
//! - `AttributeFilter`: attribute + operator + reference value, checked for
//!   type agreement when built
//! - `FilterSet`: AND of filters; the empty set matches everything
//!
//! # Invariants
//!
//! - Dates compare against the date part of an approach time only
//! - An unknown diameter satisfies no diameter bound
//! - Evaluation is pure: no side effects, no mutation

mod attribute;
mod criteria;
mod errors;
mod predicate;

pub use attribute::{Attribute, AttributeValue, ValueKind};
pub use criteria::{create_filters, Criteria};
pub use errors::{FilterError, FilterErrorCode, FilterResult};
pub use predicate::{ApproachPredicate, AttributeFilter, CompareOp, FilterSet};
