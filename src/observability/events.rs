//! Observability events for neodb
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in neodb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration resolved
    ConfigLoaded,

    // Ingestion
    /// Object file parsed
    ObjectsLoaded,
    /// Approach file parsed
    ApproachesLoaded,

    // Lookup
    /// Lookup found no object (not an error)
    LookupMiss,

    // Query
    /// Filters composed from criteria
    FiltersCreated,
    /// Query stream drained by a consumer
    QueryComplete,

    // Output
    /// Results written to a file
    ResultsWritten,

    // Interactive shell
    /// Shell ready for input
    ShellStart,
    /// A shell line failed; the session continues
    ShellCommandFailed,
    /// Shell ended
    ShellExit,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ObjectsLoaded => "OBJECTS_LOADED",
            Event::ApproachesLoaded => "APPROACHES_LOADED",
            Event::LookupMiss => "LOOKUP_MISS",
            Event::FiltersCreated => "FILTERS_CREATED",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::ResultsWritten => "RESULTS_WRITTEN",
            Event::ShellStart => "SHELL_START",
            Event::ShellCommandFailed => "SHELL_COMMAND_FAILED",
            Event::ShellExit => "SHELL_EXIT",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::LookupMiss | Event::FiltersCreated => Severity::Trace,
            Event::ShellCommandFailed => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
