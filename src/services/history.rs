//! Read-only queries over vacation history

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Employee, VacationRequest};

/// Employees indexed by id
pub type EmployeeLookup<'a> = HashMap<&'a str, &'a Employee>;

/// Build an id index over the employee table
pub fn employee_lookup(employees: &[Employee]) -> EmployeeLookup<'_> {
    employees
        .iter()
        .map(|e| (e.employee_id.as_str(), e))
        .collect()
}

/// Organisational data attached to report rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeInfo {
    pub position: String,
    pub department: String,
}

/// All requests of an employee, any status, in storage order
pub fn by_employee<'a>(
    requests: &'a [VacationRequest],
    employee_id: &str,
) -> Vec<&'a VacationRequest> {
    let employee_id = employee_id.trim();
    requests
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .collect()
}

/// Approved requests whose start date falls in the given month
pub fn approved_in_period(
    requests: &[VacationRequest],
    month: u32,
    year: i32,
) -> Vec<&VacationRequest> {
    requests
        .iter()
        .filter(|r| r.is_approved() && r.month() == month && r.year() == year)
        .collect()
}

/// Position and department of the request's employee
///
/// Requests can outlive their employee row; missing employees yield empty
/// fields.
pub fn join_employee_info(
    request: &VacationRequest,
    employees: &EmployeeLookup<'_>,
) -> EmployeeInfo {
    employees
        .get(request.employee_id.as_str())
        .map(|e| EmployeeInfo {
            position: e.position.clone(),
            department: e.department.clone(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApprovalStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employees() -> Vec<Employee> {
        vec![
            Employee::new("E001", "Ana Torres", "Analyst", "Finance", date(2024, 1, 15)),
            Employee::new("E002", "Luis Gil", "Clerk", "Sales", date(2023, 3, 1)),
        ]
    }

    fn requests() -> Vec<VacationRequest> {
        let staff = employees();
        let mut approved_aug =
            VacationRequest::pending(&staff[0], date(2024, 8, 5), date(2024, 8, 9), 5);
        approved_aug.approval_status = ApprovalStatus::Approved;
        let pending_aug =
            VacationRequest::pending(&staff[1], date(2024, 8, 12), date(2024, 8, 13), 2);
        let mut approved_jul =
            VacationRequest::pending(&staff[1], date(2024, 7, 29), date(2024, 8, 2), 5);
        approved_jul.approval_status = ApprovalStatus::Approved;
        let mut approved_2023 =
            VacationRequest::pending(&staff[0], date(2023, 8, 7), date(2023, 8, 8), 2);
        approved_2023.approval_status = ApprovalStatus::Approved;

        vec![approved_aug, pending_aug, approved_jul, approved_2023]
    }

    #[test]
    fn test_by_employee_any_status() {
        let requests = requests();
        let history = by_employee(&requests, "E002");

        assert_eq!(history.len(), 2);
        assert!(history[0].is_pending());
        assert!(history[1].is_approved());
        assert!(by_employee(&requests, "E999").is_empty());
    }

    #[test]
    fn test_approved_in_period_uses_start_date() {
        let requests = requests();

        let august = approved_in_period(&requests, 8, 2024);
        assert_eq!(august.len(), 1);
        assert_eq!(august[0].employee_id, "E001");

        // Starts in July, spills into August
        let july = approved_in_period(&requests, 7, 2024);
        assert_eq!(july.len(), 1);
        assert_eq!(july[0].employee_id, "E002");

        assert!(approved_in_period(&requests, 12, 2024).is_empty());
    }

    #[test]
    fn test_approved_in_period_is_idempotent() {
        let requests = requests();
        let first: Vec<VacationRequest> =
            approved_in_period(&requests, 8, 2024).into_iter().cloned().collect();
        let second: Vec<VacationRequest> =
            approved_in_period(&requests, 8, 2024).into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(requests, self::requests());
    }

    #[test]
    fn test_join_employee_info() {
        let staff = employees();
        let lookup = employee_lookup(&staff);
        let requests = requests();

        let info = join_employee_info(&requests[0], &lookup);
        assert_eq!(info.position, "Analyst");
        assert_eq!(info.department, "Finance");

        let mut orphan = requests[0].clone();
        orphan.employee_id = "E404".into();
        assert_eq!(join_employee_info(&orphan, &lookup), EmployeeInfo::default());
    }
}
