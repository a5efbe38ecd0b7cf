//! Custom error types for the vacations manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Business-rule failures raised by the
//! accrual and approval engine each get their own variant so the caller can
//! render a specific message and ask for corrected input.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ApprovalStatus;

/// The main error type for vacations manager operations
#[derive(Error, Debug)]
pub enum VacationError {
    /// A date string was not in `YYYY-MM-DD` form
    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// The end date of a request precedes its start date
    #[error("End date {end} cannot be before start date {start}")]
    DateRangeInverted { start: NaiveDate, end: NaiveDate },

    /// The employee has not worked long enough to request vacations
    #[error(
        "Employee has {months_worked} full months of work; at least {required} are required"
    )]
    InsufficientTenure { months_worked: u32, required: u32 },

    /// The requested range contains no chargeable days
    #[error("Requested range contains no vacation days (Sundays are not counted)")]
    ZeroDaysRequested,

    /// The request is larger than the available balance
    #[error("Requested {requested} days exceed the available balance of {available:.2} days")]
    InsufficientBalance { requested: u32, available: f64 },

    /// No request exists under the given key
    #[error("Vacation request not found: {0}")]
    RequestNotFound(String),

    /// The request exists but has already been approved or rejected
    #[error("Vacation request {key} was already resolved as {status}")]
    AlreadyResolved { key: String, status: ApprovalStatus },

    /// A pending-list selection was out of range
    #[error("Invalid selection {selection}: choose a request between 1 and {count}")]
    InvalidSelection { selection: usize, count: usize },

    /// The referenced employee does not exist
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login or permission failures
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl VacationError {
    /// Create an "employee not found" error
    pub fn employee_not_found(identifier: impl Into<String>) -> Self {
        Self::EmployeeNotFound(identifier.into())
    }

    /// Create a duplicate-employee error
    pub fn duplicate_employee(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Employee",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate-user error
    pub fn duplicate_user(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this error is a business-rule rejection of a request
    ///
    /// These are recoverable: the operator can correct the input and retry.
    pub fn is_request_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateFormat(_)
                | Self::DateRangeInverted { .. }
                | Self::InsufficientTenure { .. }
                | Self::ZeroDaysRequested
                | Self::InsufficientBalance { .. }
                | Self::RequestNotFound(_)
                | Self::AlreadyResolved { .. }
                | Self::InvalidSelection { .. }
                | Self::EmployeeNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for VacationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for VacationError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for VacationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for VacationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for vacations manager operations
pub type VacationResult<T> = Result<T, VacationError>;
