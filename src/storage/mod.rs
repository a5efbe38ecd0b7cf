//! Storage layer for the vacations manager
//!
//! Provides CSV file storage with header validation, atomic writes, and
//! automatic directory creation. Each command loads every file once, works on
//! the in-memory collections, and saves whole files back.

pub mod csv_io;
pub mod employees;
pub mod users;
pub mod vacations;

pub use csv_io::{read_csv, write_csv_atomic, CsvLoad};
pub use employees::{EmployeeRepository, EMPLOYEE_CSV_HEADER};
pub use users::{UserRepository, USER_CSV_HEADER};
pub use vacations::{VacationRepository, VACATION_CSV_HEADER};

use std::path::PathBuf;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::VacationPaths;
use crate::error::VacationError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: VacationPaths,
    pub employees: EmployeeRepository,
    pub vacations: VacationRepository,
    pub users: UserRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: VacationPaths) -> Result<Self, VacationError> {
        paths.ensure_directories()?;

        Ok(Self {
            employees: EmployeeRepository::new(paths.employees_file()),
            vacations: VacationRepository::new(paths.vacations_file()),
            users: UserRepository::new(paths.users_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &VacationPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), VacationError> {
        self.employees.load()?;
        self.vacations.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Rows dropped as malformed by the last load, across all data files
    pub fn skipped_rows(&self) -> usize {
        self.employees.skipped_rows() + self.vacations.skipped_rows()
    }

    /// Write a header-only file for every data file that does not exist yet
    ///
    /// Existing files are never read or rewritten. Returns the created paths.
    pub fn create_missing_files(&self) -> Result<Vec<PathBuf>, VacationError> {
        let files = [
            (self.paths.employees_file(), EMPLOYEE_CSV_HEADER),
            (self.paths.vacations_file(), VACATION_CSV_HEADER),
            (self.paths.users_file(), USER_CSV_HEADER),
        ];

        let mut created = Vec::new();
        for (path, header) in files {
            if !path.exists() {
                write_csv_atomic(&path, header, std::iter::empty::<()>())?;
                created.push(path);
            }
        }
        Ok(created)
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record the creation of an entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
        actor: Option<&str>,
    ) -> Result<(), VacationError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity)
            .with_actor(actor.map(str::to_string));
        self.audit.log(&entry)
    }

    /// Record an update, with a field-level diff between the two states
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        actor: Option<&str>,
    ) -> Result<(), VacationError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff)
            .with_actor(actor.map(str::to_string));
        self.audit.log(&entry)
    }
}
