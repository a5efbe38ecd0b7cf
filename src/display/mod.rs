//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod employee;
pub mod user;
pub mod vacation;

pub use employee::{format_employee_details, format_employee_list};
pub use user::format_user_list;
pub use vacation::{format_balance, format_history, format_pending_list, format_request};
