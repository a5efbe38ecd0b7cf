//! Employee repository for CSV storage
//!
//! Manages loading and saving employees to employees.csv

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::VacationError;
use crate::models::{parse_date, Employee, DATE_FORMAT};

use super::csv_io::{read_csv, write_csv_atomic};

/// Column layout of employees.csv
pub const EMPLOYEE_CSV_HEADER: &[&str] =
    &["employee_id", "full_name", "position", "department", "hire_date"];

/// One row of employees.csv
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmployeeRecord {
    employee_id: String,
    full_name: String,
    position: String,
    department: String,
    hire_date: String,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = VacationError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let employee = Employee::new(
            record.employee_id,
            record.full_name,
            record.position,
            record.department,
            parse_date(&record.hire_date)?,
        );
        employee
            .validate()
            .map_err(|e| VacationError::Validation(e.to_string()))?;
        Ok(employee)
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            hire_date: employee.hire_date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Repository for employee persistence, in insertion order
pub struct EmployeeRepository {
    path: PathBuf,
    employees: Vec<Employee>,
    skipped_rows: usize,
}

impl EmployeeRepository {
    /// Create a new employee repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            employees: Vec::new(),
            skipped_rows: 0,
        }
    }

    /// Load employees from disk
    pub fn load(&mut self) -> Result<(), VacationError> {
        let load = read_csv::<EmployeeRecord, Employee, _>(&self.path, EMPLOYEE_CSV_HEADER)?;
        self.employees = load.records;
        self.skipped_rows = load.skipped_rows;
        Ok(())
    }

    /// Save employees to disk, replacing the whole file
    pub fn save(&self) -> Result<(), VacationError> {
        write_csv_atomic(
            &self.path,
            EMPLOYEE_CSV_HEADER,
            self.employees.iter().map(EmployeeRecord::from),
        )
    }

    /// Get an employee by ID
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        let employee_id = employee_id.trim();
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Check whether an employee ID is taken
    pub fn contains(&self, employee_id: &str) -> bool {
        self.get(employee_id).is_some()
    }

    /// All employees in insertion order
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Append an employee and save the file
    ///
    /// Uniqueness is enforced by the service layer. If the save fails the
    /// employee is dropped again so memory matches the file.
    pub fn insert(&mut self, employee: Employee) -> Result<(), VacationError> {
        self.employees.push(employee);
        if let Err(e) = self.save() {
            self.employees.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Count employees
    pub fn count(&self) -> usize {
        self.employees.len()
    }

    /// Rows skipped by the last load
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EmployeeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = EmployeeRepository::new(temp_dir.path().join("employees.csv"));
        (temp_dir, repo)
    }

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
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.insert(ana()).unwrap();

        let contents = fs::read_to_string(temp_dir.path().join("employees.csv")).unwrap();
        assert!(contents.starts_with("employee_id,full_name,position,department,hire_date\n"));
        assert!(contents.contains("E001,Ana Torres,Analyst,Finance,2024-01-15"));

        let mut reloaded = EmployeeRepository::new(temp_dir.path().join("employees.csv"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get("E001"), Some(&ana()));
    }

    #[test]
    fn test_get_trims_lookup() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.insert(ana()).unwrap();
        assert!(repo.contains(" E001 "));
        assert!(!repo.contains("E002"));
    }

    #[test]
    fn test_invalid_hire_date_fails_load() {
        let (temp_dir, mut repo) = create_test_repo();
        fs::write(
            temp_dir.path().join("employees.csv"),
            "employee_id,full_name,position,department,hire_date\nE001,Ana,Analyst,Finance,15/01/2024\n",
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_failed_insert_is_rolled_back() {
        let (temp_dir, mut repo) = create_test_repo();
        fs::create_dir(temp_dir.path().join("employees.csv.tmp")).unwrap();

        assert!(repo.insert(ana()).is_err());
        assert_eq!(repo.count(), 0);
        assert!(!repo.contains("E001"));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let (temp_dir, mut repo) = create_test_repo();
        fs::write(
            temp_dir.path().join("employees.csv"),
            "employee_id,full_name,position,department,hire_date\nE001,Ana\nE002,Luis Gil,Clerk,Sales,2023-03-01\n",
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.skipped_rows(), 1);
        assert!(repo.contains("E002"));
    }
}
