//! Filter error types
//!
//! Error codes:
//! - NEODB_UNSUPPORTED_CRITERION (ERROR)
//! - NEODB_INVALID_REFERENCE (ERROR)
//!
//! Both indicate a wiring defect in the caller, never a data condition.

use std::fmt;

/// Filter-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorCode {
    /// Reference value kind does not match the attribute
    NeodbUnsupportedCriterion,
    /// Reference value can never compare (NaN)
    NeodbInvalidReference,
}

impl FilterErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            FilterErrorCode::NeodbUnsupportedCriterion => "NEODB_UNSUPPORTED_CRITERION",
            FilterErrorCode::NeodbInvalidReference => "NEODB_INVALID_REFERENCE",
        }
    }
}

impl fmt::Display for FilterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Filter error type
#[derive(Debug, Clone)]
pub struct FilterError {
    code: FilterErrorCode,
    message: String,
}

impl FilterError {
    /// A filter was wired with a reference of the wrong kind
    pub fn unsupported_criterion(reason: impl Into<String>) -> Self {
        Self {
            code: FilterErrorCode::NeodbUnsupportedCriterion,
            message: reason.into(),
        }
    }

    /// A filter was wired with a reference that never compares
    pub fn invalid_reference(reason: impl Into<String>) -> Self {
        Self {
            code: FilterErrorCode::NeodbInvalidReference,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> FilterErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for FilterError {}

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;
