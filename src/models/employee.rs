//! Employee model
//!
//! Employees are keyed by a free-form identifier assigned by the organization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An employee entitled to vacations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub employee_id: String,

    /// Full name
    pub full_name: String,

    /// Job position
    pub position: String,

    /// Department or area
    pub department: String,

    /// Date the employee started working; tenure is measured from here
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Create a new employee, trimming all text fields
    pub fn new(
        employee_id: impl Into<String>,
        full_name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into().trim().to_string(),
            full_name: full_name.into().trim().to_string(),
            position: position.into().trim().to_string(),
            department: department.into().trim().to_string(),
            hire_date,
        }
    }

    /// Validate the employee
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.employee_id.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }

        if self.full_name.trim().is_empty() {
            return Err(EmployeeValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.employee_id)
    }
}

/// Validation errors for employees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    EmptyId,
    EmptyName,
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Employee ID cannot be empty"),
            Self::EmptyName => write!(f, "Employee full name cannot be empty"),
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn hire_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_new_trims_fields() {
        let employee = Employee::new(" E001 ", " Ana Torres ", "Analyst ", " Finance", hire_date());
        assert_eq!(employee.employee_id, "E001");
        assert_eq!(employee.full_name, "Ana Torres");
        assert_eq!(employee.position, "Analyst");
        assert_eq!(employee.department, "Finance");
    }

    #[test]
    fn test_validation() {
        let mut employee = Employee::new("E001", "Ana Torres", "Analyst", "Finance", hire_date());
        assert!(employee.validate().is_ok());

        employee.full_name = "  ".into();
        assert_eq!(employee.validate(), Err(EmployeeValidationError::EmptyName));

        employee.employee_id = String::new();
        assert_eq!(employee.validate(), Err(EmployeeValidationError::EmptyId));
    }

    #[test]
    fn test_display() {
        let employee = Employee::new("E001", "Ana Torres", "Analyst", "Finance", hire_date());
        assert_eq!(employee.to_string(), "Ana Torres (E001)");
    }
}
