//! Vacation accrual
//!
//! Employees earn a fixed number of vacation days for every full month worked.
//! The balance is always derived from the hire date and the approved requests,
//! never stored.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{full_months_between, Employee, VacationRequest};

/// Vacation days earned per full month worked
pub const ACCRUAL_RATE: f64 = 1.5;

/// Snapshot of an employee's vacation entitlement at a reference date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VacationBalance {
    /// Days that can still be requested, never negative
    pub available: f64,
    /// Full months between hire date and the reference date
    pub months_worked: u32,
    /// Days already consumed by approved requests
    pub used_days: f64,
    /// Days earned so far
    pub accrued_days: f64,
}

/// Compute the balance of an employee at `reference_date`
///
/// Only approved requests of this employee count as used. Pending requests
/// do not reserve days.
pub fn compute_balance(
    employee: &Employee,
    reference_date: NaiveDate,
    requests: &[VacationRequest],
) -> VacationBalance {
    let months_worked = full_months_between(employee.hire_date, reference_date);
    let accrued_days = f64::from(months_worked) * ACCRUAL_RATE;

    let used_days: f64 = requests
        .iter()
        .filter(|r| r.employee_id == employee.employee_id && r.is_approved())
        .map(|r| r.total_days_taken)
        .sum();

    VacationBalance {
        available: (accrued_days - used_days).max(0.0),
        months_worked,
        used_days,
        accrued_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApprovalStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ana() -> Employee {
        Employee::new("E001", "Ana Torres", "Analyst", "Finance", date(2024, 1, 15))
    }

    fn request_with(employee: &Employee, days: u32, status: ApprovalStatus) -> VacationRequest {
        let mut request =
            VacationRequest::pending(employee, date(2024, 8, 5), date(2024, 8, 9), days);
        request.approval_status = status;
        request
    }

    #[test]
    fn test_six_months_no_history() {
        let balance = compute_balance(&ana(), date(2024, 7, 15), &[]);
        assert_eq!(balance.months_worked, 6);
        assert_eq!(balance.accrued_days, 9.0);
        assert_eq!(balance.used_days, 0.0);
        assert_eq!(balance.available, 9.0);
    }

    #[test]
    fn test_accrued_is_exact_multiple() {
        for (as_of, months) in [
            (date(2024, 1, 14), 0),
            (date(2024, 2, 15), 1),
            (date(2024, 7, 10), 5),
            (date(2025, 1, 15), 12),
        ] {
            let balance = compute_balance(&ana(), as_of, &[]);
            assert_eq!(balance.months_worked, months);
            assert_eq!(balance.accrued_days, f64::from(months) * ACCRUAL_RATE);
        }
    }

    #[test]
    fn test_only_approved_requests_are_used() {
        let employee = ana();
        let requests = vec![
            request_with(&employee, 5, ApprovalStatus::Approved),
            request_with(&employee, 4, ApprovalStatus::Pending),
            request_with(&employee, 3, ApprovalStatus::Rejected),
        ];

        let balance = compute_balance(&employee, date(2024, 7, 15), &requests);
        assert_eq!(balance.used_days, 5.0);
        assert_eq!(balance.available, 4.0);
    }

    #[test]
    fn test_other_employees_are_ignored() {
        let employee = ana();
        let other = Employee::new("E002", "Luis Gil", "Clerk", "Sales", date(2023, 1, 1));
        let requests = vec![request_with(&other, 5, ApprovalStatus::Approved)];

        let balance = compute_balance(&employee, date(2024, 7, 15), &requests);
        assert_eq!(balance.used_days, 0.0);
        assert_eq!(balance.available, 9.0);
    }

    #[test]
    fn test_available_is_clamped_at_zero() {
        let employee = ana();
        let requests = vec![request_with(&employee, 12, ApprovalStatus::Approved)];

        let balance = compute_balance(&employee, date(2024, 7, 15), &requests);
        assert_eq!(balance.used_days, 12.0);
        assert_eq!(balance.available, 0.0);
    }

    #[test]
    fn test_reference_before_hire() {
        let balance = compute_balance(&ana(), date(2023, 12, 1), &[]);
        assert_eq!(balance.months_worked, 0);
        assert_eq!(balance.available, 0.0);
    }
}
