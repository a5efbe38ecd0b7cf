//! Vacation request repository for CSV storage
//!
//! Manages loading and saving requests to vacations.csv. The file keeps the
//! `month` and `year` columns for compatibility; they are derived from the
//! start date on save and checked against it on load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::VacationError;
use crate::models::{parse_date, ApprovalStatus, VacationRequest, DATE_FORMAT};

use super::csv_io::{read_csv, write_csv_atomic};

/// Column layout of vacations.csv
pub const VACATION_CSV_HEADER: &[&str] = &[
    "employee_id",
    "full_name",
    "vacations_start_date",
    "vacations_end_date",
    "total_days_taken",
    "approval_status",
    "month",
    "year",
];

/// One row of vacations.csv
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VacationRecord {
    employee_id: String,
    full_name: String,
    vacations_start_date: String,
    vacations_end_date: String,
    total_days_taken: f64,
    approval_status: String,
    month: u32,
    year: i32,
}

impl TryFrom<VacationRecord> for VacationRequest {
    type Error = VacationError;

    fn try_from(record: VacationRecord) -> Result<Self, Self::Error> {
        let request = VacationRequest {
            employee_id: record.employee_id,
            full_name: record.full_name,
            start_date: parse_date(&record.vacations_start_date)?,
            end_date: parse_date(&record.vacations_end_date)?,
            total_days_taken: record.total_days_taken,
            approval_status: record.approval_status.parse::<ApprovalStatus>()?,
        };

        request
            .validate()
            .map_err(|e| VacationError::Validation(e.to_string()))?;

        if request.month() != record.month || request.year() != record.year {
            return Err(VacationError::Validation(format!(
                "month/year {}/{} do not match start date {}",
                record.month, record.year, request.start_date
            )));
        }

        Ok(request)
    }
}

impl From<&VacationRequest> for VacationRecord {
    fn from(request: &VacationRequest) -> Self {
        Self {
            employee_id: request.employee_id.clone(),
            full_name: request.full_name.clone(),
            vacations_start_date: request.start_date.format(DATE_FORMAT).to_string(),
            vacations_end_date: request.end_date.format(DATE_FORMAT).to_string(),
            total_days_taken: request.total_days_taken,
            approval_status: request.approval_status.to_string(),
            month: request.month(),
            year: request.year(),
        }
    }
}

/// Repository for vacation request persistence, in insertion order
pub struct VacationRepository {
    path: PathBuf,
    requests: Vec<VacationRequest>,
    skipped_rows: usize,
}

impl VacationRepository {
    /// Create a new vacation request repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            requests: Vec::new(),
            skipped_rows: 0,
        }
    }

    /// Load requests from disk
    pub fn load(&mut self) -> Result<(), VacationError> {
        let load = read_csv::<VacationRecord, VacationRequest, _>(&self.path, VACATION_CSV_HEADER)?;
        self.requests = load.records;
        self.skipped_rows = load.skipped_rows;
        Ok(())
    }

    /// Save requests to disk, replacing the whole file
    pub fn save(&self) -> Result<(), VacationError> {
        write_csv_atomic(
            &self.path,
            VACATION_CSV_HEADER,
            self.requests.iter().map(VacationRecord::from),
        )
    }

    /// All requests in insertion order
    pub fn all(&self) -> &[VacationRequest] {
        &self.requests
    }

    /// Append a request and save; a failed save drops it again
    pub fn insert(&mut self, request: VacationRequest) -> Result<(), VacationError> {
        self.requests.push(request);
        if let Err(e) = self.save() {
            self.requests.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Run `change` over the requests and save the result
    ///
    /// If either step fails the requests are restored to their previous state.
    pub fn update<T, F>(&mut self, change: F) -> Result<T, VacationError>
    where
        F: FnOnce(&mut [VacationRequest]) -> Result<T, VacationError>,
    {
        let previous = self.requests.clone();
        let outcome = change(&mut self.requests).and_then(|value| {
            self.save()?;
            Ok(value)
        });
        if outcome.is_err() {
            self.requests = previous;
        }
        outcome
    }

    /// Count requests
    pub fn count(&self) -> usize {
        self.requests.len()
    }

    /// Rows skipped by the last load
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
