//! Approved Vacations Report
//!
//! Lists the approved vacation requests that start in a given month, joined
//! with the position and department of each employee.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::settings::ReportFormat;
use crate::error::{VacationError, VacationResult};
use crate::models::{Employee, VacationRequest};
use crate::services::{approved_in_period, employee_lookup, join_employee_info};

/// One row of the approved vacations report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovedVacationRow {
    pub employee_id: String,
    pub full_name: String,
    pub position: String,
    pub department: String,
    pub vacations_start_date: NaiveDate,
    pub vacations_end_date: NaiveDate,
    pub total_days_taken: f64,
    pub month: u32,
    pub year: i32,
}

/// Approved Vacations Report
#[derive(Debug, Clone, Serialize)]
pub struct ApprovedPeriodReport {
    /// Month of the period (1-12)
    pub month: u32,
    /// Year of the period
    pub year: i32,
    /// Rows in storage order
    pub rows: Vec<ApprovedVacationRow>,
}

impl ApprovedPeriodReport {
    /// Generate the report for a month
    pub fn generate(
        requests: &[VacationRequest],
        employees: &[Employee],
        month: u32,
        year: i32,
    ) -> VacationResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(VacationError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }

        let lookup = employee_lookup(employees);

        let rows = approved_in_period(requests, month, year)
            .into_iter()
            .map(|request| {
                let info = join_employee_info(request, &lookup);
                ApprovedVacationRow {
                    employee_id: request.employee_id.clone(),
                    full_name: request.full_name.clone(),
                    position: info.position,
                    department: info.department,
                    vacations_start_date: request.start_date,
                    vacations_end_date: request.end_date,
                    total_days_taken: request.total_days_taken,
                    month: request.month(),
                    year: request.year(),
                }
            })
            .collect();

        Ok(Self { month, year, rows })
    }

    /// True when no approved vacation starts in the period
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total approved days in the period
    pub fn total_days(&self) -> f64 {
        self.rows.iter().map(|r| r.total_days_taken).sum()
    }

    /// File name for an export, e.g. `vacations_report_2024_08.csv`
    pub fn default_file_name(&self, prefix: &str, format: ReportFormat) -> String {
        format!(
            "{}_{}_{:02}.{}",
            prefix,
            self.year,
            self.month,
            format.extension()
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Approved Vacations: {}-{:02}\n",
            self.year, self.month
        ));
        output.push_str(&"=".repeat(100));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No approved vacations found for that period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:<24} {:<18} {:<16} {:<10} {:<10} {:>6}\n",
            "ID", "Name", "Position", "Department", "Start", "End", "Days"
        ));
        output.push_str(&"-".repeat(100));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:<24} {:<18} {:<16} {:<10} {:<10} {:>6.1}\n",
                row.employee_id,
                row.full_name,
                row.position,
                row.department,
                row.vacations_start_date,
                row.vacations_end_date,
                row.total_days_taken
            ));
        }

        output.push_str(&"-".repeat(100));
        output.push('\n');
        output.push_str(&format!(
            "{:<92} {:>6.1}\n",
            format!("TOTAL ({} requests)", self.rows.len()),
            self.total_days()
        ));

        output
    }

    /// Export to a file, creating or truncating it
    ///
    /// The buffer is flushed before returning; any write error is an `Export`.
    pub fn write_to_file(&self, format: ReportFormat, path: &Path) -> VacationResult<()> {
        let file = File::create(path).map_err(|e| {
            VacationError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        self.export(format, &mut writer)?;
        writer.flush().map_err(|e| {
            VacationError::Export(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    /// Export the report in the given format
    pub fn export<W: Write>(&self, format: ReportFormat, writer: &mut W) -> VacationResult<()> {
        match format {
            ReportFormat::Csv => self.export_csv(writer),
            ReportFormat::Json => self.export_json(writer),
            ReportFormat::Yaml => self.export_yaml(writer),
        }
    }

    /// Export the rows to CSV, header first
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> VacationResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.is_empty() {
            // serialize() only emits the header alongside the first row
            csv_writer
                .write_record(REPORT_HEADER)
                .map_err(|e| VacationError::Export(e.to_string()))?;
        }

        for row in &self.rows {
            csv_writer
                .serialize(row)
                .map_err(|e| VacationError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| VacationError::Export(e.to_string()))?;

        Ok(())
    }

    /// Export the report to pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> VacationResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| VacationError::Export(e.to_string()))?;
        writeln!(writer).map_err(|e| VacationError::Export(e.to_string()))?;
        Ok(())
    }

    /// Export the report to YAML
    pub fn export_yaml<W: Write>(&self, writer: &mut W) -> VacationResult<()> {
        serde_yaml::to_writer(writer, self).map_err(|e| VacationError::Export(e.to_string()))
    }
}

/// Column order of the CSV export
pub const REPORT_HEADER: &[&str] = &[
    "employee_id",
    "full_name",
    "position",
    "department",
    "vacations_start_date",
    "vacations_end_date",
    "total_days_taken",
    "month",
    "year",
];
