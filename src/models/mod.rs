//! Core data models for the vacations manager
//!
//! This module contains the data structures of the vacations domain:
//! employees, vacation requests and their approval status, operator accounts,
//! and the calendar arithmetic used for tenure and day counting.

pub mod calendar;
pub mod employee;
pub mod user;
pub mod vacation;

pub use calendar::{count_days_excluding_sundays, full_months_between, parse_date, DATE_FORMAT};
pub use employee::{Employee, EmployeeValidationError};
pub use user::{Role, User};
pub use vacation::{
    ApprovalStatus, Decision, RequestSelector, VacationRequest, VacationValidationError,
};
