//! Catalog subsystem for neodb
//!
//! The `Dataset` is the aggregate root: it owns every object and the
//! canonical, chronologically ordered approach sequence, and builds the
//! lookup indices once at load time.
//!
//! # Design Principles
//!
//! - Arena ownership: objects and events live in two vectors; links are ids
//! - Derived state: per-object approach lists and both indices mirror the
//!   canonical vectors and are never a second source of truth
//! - All or nothing: a build either links every event or fails
//!
//! # Invariants
//!
//! - Designations are unique across the catalog
//! - Every event resolves to exactly one object after build
//! - Empty or absent names are never indexed

mod dataset;
mod errors;
mod view;

pub use dataset::Dataset;
pub use errors::{CatalogError, CatalogErrorCode, CatalogResult, Severity};
pub use view::Approach;
