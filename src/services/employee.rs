//! Employee service
//!
//! Provides business logic for registering and looking up employees.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{VacationError, VacationResult};
use crate::models::Employee;
use crate::storage::Storage;

/// Service for employee management
pub struct EmployeeService<'a> {
    storage: &'a mut Storage,
    actor: Option<&'a str>,
}

impl<'a> EmployeeService<'a> {
    /// Create a new employee service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self {
            storage,
            actor: None,
        }
    }

    /// Attribute audit entries to an operator
    pub fn acting_as(mut self, actor: Option<&'a str>) -> Self {
        self.actor = actor;
        self
    }

    /// Register a new employee
    pub fn add(
        &mut self,
        employee_id: &str,
        full_name: &str,
        position: &str,
        department: &str,
        hire_date: NaiveDate,
    ) -> VacationResult<Employee> {
        let employee = Employee::new(employee_id, full_name, position, department, hire_date);

        employee
            .validate()
            .map_err(|e| VacationError::Validation(e.to_string()))?;

        if self.storage.employees.contains(&employee.employee_id) {
            return Err(VacationError::duplicate_employee(&employee.employee_id));
        }

        self.storage.employees.insert(employee.clone())?;

        self.storage.log_create(
            EntityType::Employee,
            employee.employee_id.clone(),
            Some(employee.full_name.clone()),
            &employee,
            self.actor,
        )?;

        info!(employee_id = %employee.employee_id, "employee registered");

        Ok(employee)
    }

    /// All employees in registration order
    pub fn list(&self) -> &[Employee] {
        self.storage.employees.all()
    }

    /// Find an employee by ID
    pub fn find(&self, employee_id: &str) -> Option<&Employee> {
        self.storage.employees.get(employee_id)
    }

    /// Get an employee by ID, failing if unknown
    pub fn get(&self, employee_id: &str) -> VacationResult<&Employee> {
        self.find(employee_id)
            .ok_or_else(|| VacationError::employee_not_found(employee_id.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::VacationPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = VacationPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn hire_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_add_employee() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = EmployeeService::new(&mut storage).acting_as(Some("admin"));

        let employee = service
            .add(" E001 ", " Ana Torres ", "Analyst", "Finance", hire_date())
            .unwrap();
        assert_eq!(employee.employee_id, "E001");
        assert_eq!(employee.full_name, "Ana Torres");
        assert_eq!(service.list().len(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, "E001");
        assert_eq!(entries[0].actor.as_deref(), Some("admin"));
    }

    #[test]
    fn test_add_persists() {
        let (temp_dir, mut storage) = create_test_storage();
        EmployeeService::new(&mut storage)
            .add("E001", "Ana Torres", "Analyst", "Finance", hire_date())
            .unwrap();

        let paths = VacationPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert!(EmployeeService::new(&mut reopened).find("E001").is_some());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = EmployeeService::new(&mut storage);

        service
            .add("E001", "Ana Torres", "Analyst", "Finance", hire_date())
            .unwrap();
        let err = service
            .add("E001", "Someone Else", "Clerk", "Sales", hire_date())
            .unwrap_err();

        assert!(matches!(err, VacationError::Duplicate { entity_type: "Employee", .. }));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_employee_out() {
        let (temp_dir, mut storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("data").join("employees.csv.tmp")).unwrap();
        let mut service = EmployeeService::new(&mut storage);

        let err = service
            .add("E001", "Ana Torres", "Analyst", "Finance", hire_date())
            .unwrap_err();
        assert!(matches!(err, VacationError::Storage(_)));
        assert!(service.find("E001").is_none());
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = EmployeeService::new(&mut storage);

        let err = service
            .add("E001", "   ", "Analyst", "Finance", hire_date())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_get_unknown() {
        let (_temp_dir, mut storage) = create_test_storage();
        let service = EmployeeService::new(&mut storage);

        assert!(service.find("E404").is_none());
        assert!(matches!(
            service.get("E404"),
            Err(VacationError::EmployeeNotFound(id)) if id == "E404"
        ));
    }
}
