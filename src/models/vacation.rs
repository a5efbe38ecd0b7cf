//! Vacation request model
//!
//! A request moves from `Pending` to exactly one terminal status. Requests
//! carry no surrogate identifier; they are addressed by the compound key of
//! employee and date range (see [`RequestSelector`]).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::employee::Employee;
use crate::error::VacationError;

/// Approval status of a vacation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalStatus {
    /// Awaiting a decision; the only initial state
    #[default]
    Pending,
    /// Approved; counts against the employee's balance
    Approved,
    /// Rejected
    Rejected,
}

impl ApprovalStatus {
    /// Terminal statuses can never change again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The stored token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = VacationError;

    /// Status tokens are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        [Self::Pending, Self::Approved, Self::Rejected]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| VacationError::Validation(format!("Unknown approval status '{}'", token)))
    }
}

/// A decision taken on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl From<Decision> for ApprovalStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => ApprovalStatus::Approved,
            Decision::Reject => ApprovalStatus::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// A vacation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Employee the request belongs to (not checked against the employee table)
    pub employee_id: String,

    /// Employee name at the time of the request
    pub full_name: String,

    /// First day of vacations
    pub start_date: NaiveDate,

    /// Last day of vacations (inclusive)
    pub end_date: NaiveDate,

    /// Chargeable days in the range (Sundays excluded)
    pub total_days_taken: f64,

    /// Current approval status
    pub approval_status: ApprovalStatus,
}

impl VacationRequest {
    /// Create a pending request for an employee
    pub fn pending(
        employee: &Employee,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_days_taken: u32,
    ) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            start_date,
            end_date,
            total_days_taken: f64::from(total_days_taken),
            approval_status: ApprovalStatus::Pending,
        }
    }

    /// Month of the start date (1-12)
    pub fn month(&self) -> u32 {
        self.start_date.month()
    }

    /// Year of the start date
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    /// Check if the request is still awaiting a decision
    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }

    /// Check if the request has been approved
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    /// The compound key identifying this request
    pub fn selector(&self) -> RequestSelector {
        RequestSelector {
            employee_id: self.employee_id.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Validate the request
    pub fn validate(&self) -> Result<(), VacationValidationError> {
        if self.employee_id.trim().is_empty() {
            return Err(VacationValidationError::EmptyEmployeeId);
        }

        if self.end_date < self.start_date {
            return Err(VacationValidationError::InvertedRange);
        }

        if !(self.total_days_taken > 0.0) {
            return Err(VacationValidationError::NonPositiveDays(self.total_days_taken));
        }

        Ok(())
    }
}

impl fmt::Display for VacationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} | {} to {} | Days: {} | {}",
            self.employee_id,
            self.full_name,
            self.start_date,
            self.end_date,
            self.total_days_taken,
            self.approval_status
        )
    }
}

/// Compound key addressing a vacation request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestSelector {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RequestSelector {
    pub fn new(employee_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date,
            end_date,
        }
    }

    /// Check whether a request is stored under this key, regardless of status
    pub fn matches(&self, request: &VacationRequest) -> bool {
        request.employee_id == self.employee_id
            && request.start_date == self.start_date
            && request.end_date == self.end_date
    }
}

impl fmt::Display for RequestSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{}", self.employee_id, self.start_date, self.end_date)
    }
}

/// Validation errors for vacation requests
#[derive(Debug, Clone, PartialEq)]
pub enum VacationValidationError {
    EmptyEmployeeId,
    InvertedRange,
    NonPositiveDays(f64),
}

impl fmt::Display for VacationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmployeeId => write!(f, "Employee ID cannot be empty"),
            Self::InvertedRange => write!(f, "End date cannot be before start date"),
            Self::NonPositiveDays(days) => {
                write!(f, "Total days taken must be greater than 0 (got {})", days)
            }
        }
    }
}

impl std::error::Error for VacationValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee() -> Employee {
        Employee::new("E001", "Ana Torres", "Analyst", "Finance", date(2024, 1, 15))
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("approved".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Approved);
        assert_eq!(" Pending ".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Pending);
        assert_eq!("REJECTED".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Rejected);
        assert!("DENIED".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ApprovalStatus::Pending.is_terminal());
        assert!(ApprovalStatus::Approved.is_terminal());
        assert!(ApprovalStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_decision_maps_to_terminal_status() {
        assert_eq!(ApprovalStatus::from(Decision::Approve), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::from(Decision::Reject), ApprovalStatus::Rejected);
    }

    #[test]
    fn test_pending_request_snapshot() {
        let request = VacationRequest::pending(&employee(), date(2024, 8, 5), date(2024, 8, 9), 5);
        assert_eq!(request.full_name, "Ana Torres");
        assert_eq!(request.total_days_taken, 5.0);
        assert!(request.is_pending());
        assert_eq!(request.month(), 8);
        assert_eq!(request.year(), 2024);
    }

    #[test]
    fn test_selector_matches_any_status() {
        let mut request =
            VacationRequest::pending(&employee(), date(2024, 8, 5), date(2024, 8, 9), 5);
        let selector = request.selector();
        assert!(selector.matches(&request));

        request.approval_status = ApprovalStatus::Rejected;
        assert!(selector.matches(&request));

        let other = RequestSelector::new("E001", date(2024, 8, 5), date(2024, 8, 10));
        assert!(!other.matches(&request));
        assert_eq!(selector.to_string(), "E001 2024-08-05..2024-08-09");
    }

    #[test]
    fn test_validation() {
        let mut request =
            VacationRequest::pending(&employee(), date(2024, 8, 5), date(2024, 8, 9), 5);
        assert!(request.validate().is_ok());

        request.total_days_taken = 0.0;
        assert_eq!(
            request.validate(),
            Err(VacationValidationError::NonPositiveDays(0.0))
        );

        request.total_days_taken = 5.0;
        request.end_date = date(2024, 8, 1);
        assert_eq!(request.validate(), Err(VacationValidationError::InvertedRange));
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&ApprovalStatus::Approved).unwrap();
        assert_eq!(json, "\"APPROVED\"");
    }
}
