//! Catalog error types
//!
//! Error codes:
//! - NEODB_DATA_INTEGRITY (FATAL)
//! - NEODB_DUPLICATE_DESIGNATION (FATAL)

use std::fmt;

/// Severity levels for catalog errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The dataset is unusable and the session must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Catalog-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// An approach references a designation with no matching object
    NeodbDataIntegrity,
    /// Two objects share a designation
    NeodbDuplicateDesignation,
}

impl CatalogErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogErrorCode::NeodbDataIntegrity => "NEODB_DATA_INTEGRITY",
            CatalogErrorCode::NeodbDuplicateDesignation => "NEODB_DUPLICATE_DESIGNATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal // A partially linked catalog is never usable
    }
}

impl fmt::Display for CatalogErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Catalog error type with full context
#[derive(Debug)]
pub struct CatalogError {
    code: CatalogErrorCode,
    message: String,
    designation: String,
    position: usize,
}

impl CatalogError {
    /// An approach at `position` names a designation that is not catalogued
    pub fn unresolved_designation(position: usize, designation: impl Into<String>) -> Self {
        let designation = designation.into();
        Self {
            code: CatalogErrorCode::NeodbDataIntegrity,
            message: format!(
                "approach #{} references unknown designation '{}'",
                position, designation
            ),
            designation,
            position,
        }
    }

    /// The object at `position` repeats an earlier designation
    pub fn duplicate_designation(position: usize, designation: impl Into<String>) -> Self {
        let designation = designation.into();
        Self {
            code: CatalogErrorCode::NeodbDuplicateDesignation,
            message: format!(
                "object #{} repeats designation '{}'",
                position, designation
            ),
            designation,
            position,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CatalogErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending designation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the input position of the offending record
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for CatalogError {}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
