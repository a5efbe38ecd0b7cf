//! Employee display formatting
//!
//! Formats employees for terminal output in table and detail views.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Employee, DATE_FORMAT};

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Hired")]
    hired: String,
}

/// Format a list of employees as a table
pub fn format_employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.".to_string();
    }

    let rows = employees.iter().map(|e| EmployeeRow {
        id: e.employee_id.clone(),
        name: e.full_name.clone(),
        position: e.position.clone(),
        department: e.department.clone(),
        hired: e.hire_date.format(DATE_FORMAT).to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n{} employee(s)", table, employees.len())
}

/// Format a single employee's details
pub fn format_employee_details(employee: &Employee) -> String {
    let mut output = String::new();

    output.push_str(&format!("Employee: {}\n", employee.full_name));
    output.push_str(&format!("  ID:         {}\n", employee.employee_id));
    output.push_str(&format!("  Position:   {}\n", employee.position));
    output.push_str(&format!("  Department: {}\n", employee.department));
    output.push_str(&format!(
        "  Hire date:  {}\n",
        employee.hire_date.format(DATE_FORMAT)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ana() -> Employee {
        Employee::new(
            "E001",
            "Ana Torres",
            "Analyst",
            "Finance",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_employee_list(&[]), "No employees found.");
    }

    #[test]
    fn test_list_contains_rows() {
        let output = format_employee_list(&[ana()]);
        assert!(output.contains("ID"));
        assert!(output.contains("Ana Torres"));
        assert!(output.contains("2024-01-15"));
        assert!(output.ends_with("1 employee(s)"));
    }

    #[test]
    fn test_details() {
        let output = format_employee_details(&ana());
        assert!(output.starts_with("Employee: Ana Torres\n"));
        assert!(output.contains("Department: Finance"));
    }
}
