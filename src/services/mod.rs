//! Service layer for the vacations manager
//!
//! The rule modules (`accrual`, `eligibility`, `lifecycle`, `approval`,
//! `history`) are pure functions over slices of domain values. The services
//! (`EmployeeService`, `VacationService`, `UserService`) orchestrate them on
//! top of the storage layer, saving and auditing every change.

pub mod accrual;
pub mod approval;
pub mod eligibility;
pub mod employee;
pub mod history;
pub mod lifecycle;
pub mod user;
pub mod vacation;

pub use accrual::{compute_balance, VacationBalance, ACCRUAL_RATE};
pub use approval::{approve_or_reject, list_pending};
pub use eligibility::{validate_request, MIN_MONTHS_FOR_VACATION};
pub use employee::EmployeeService;
pub use history::{
    approved_in_period, by_employee, employee_lookup, join_employee_info, EmployeeInfo,
    EmployeeLookup,
};
pub use user::UserService;
pub use vacation::{BalanceSummary, VacationService};
