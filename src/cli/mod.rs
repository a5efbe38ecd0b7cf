//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod employee;
pub mod report;
pub mod session;
pub mod user;
pub mod vacation;

pub use employee::{handle_employee_command, EmployeeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use session::{login, Credentials};
pub use user::{handle_user_command, UserCommands};
pub use vacation::{handle_vacation_command, VacationCommands};
