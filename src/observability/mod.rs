//! Observability subsystem for neodb
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Scope-based BEGIN/COMPLETE/FAILED tracing
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on loading or querying
//! 3. No async or background threads
//! 4. Nothing is logged per approach in the query hot path
//!
//! # Usage
//!
//! ```ignore
//! use neodb::observability::{Logger, Event, ObservationScope};
//!
//! Logger::info("QUERY_COMPLETE", &[("returned", "10")]);
//!
//! let scope = ObservationScope::new("DATASET_BUILD");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{min_severity, set_min_severity, Logger, Severity};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
