//! Reports module for the vacations manager
//!
//! Reports are generated from the in-memory collections and can be shown in
//! the terminal or exported as CSV, JSON or YAML.

pub mod approved_period;

pub use approved_period::{ApprovedPeriodReport, ApprovedVacationRow, REPORT_HEADER};
