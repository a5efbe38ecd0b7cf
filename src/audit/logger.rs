//! Change journal for employees, operator accounts and vacation requests
//!
//! `audit.log` sits next to the data directory. Every registration, account
//! creation and approval decision appends one JSON object on its own line.
//! The file is never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{VacationError, VacationResult};

use super::entry::AuditEntry;

/// Append-only journal of changes made by operators
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record one change
    ///
    /// The line is written and flushed before returning, after the data file
    /// it describes has already been saved.
    pub fn log(&self, entry: &AuditEntry) -> VacationResult<()> {
        let mut line = serde_json::to_string(entry).map_err(|e| {
            VacationError::Json(format!(
                "Cannot record {} of {} {}: {}",
                entry.operation, entry.entity_type, entry.entity_id, e
            ))
        })?;
        line.push('\n');

        let mut journal = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;

        journal
            .write_all(line.as_bytes())
            .and_then(|()| journal.flush())
            .map_err(|e| self.io_error("append to", e))
    }

    /// Every recorded change, oldest first
    ///
    /// A missing journal means nothing has been changed yet.
    pub fn read_all(&self) -> VacationResult<Vec<AuditEntry>> {
        let journal = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(journal).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                VacationError::Json(format!(
                    "{}: line {} is not an audit entry: {}",
                    self.log_path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` changes, oldest first
    pub fn read_recent(&self, count: usize) -> VacationResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> VacationError {
        VacationError::Io(format!(
            "Cannot {} audit log {}: {}",
            action,
            self.log_path.display(),
            e
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn registration(employee_id: &str) -> AuditEntry {
        AuditEntry::create(
            EntityType::Employee,
            employee_id,
            None,
            &json!({ "employee_id": employee_id }),
        )
    }

    #[test]
    fn test_registration_then_decision() {
        let (logger, _temp) = create_test_logger();
        logger
            .log(&registration("E001").with_actor(Some("admin".into())))
            .unwrap();

        let before = json!({ "approval_status": "PENDING" });
        let after = json!({ "approval_status": "APPROVED" });
        let decision = AuditEntry::update(
            EntityType::VacationRequest,
            "E001 2024-08-05..2024-08-09",
            Some("Ana Torres".into()),
            &before,
            &after,
            Some("approval_status: \"PENDING\" -> \"APPROVED\"".into()),
        );
        logger.log(&decision).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].actor.as_deref(), Some("admin"));
        assert_eq!(entries[1].entity_type, EntityType::VacationRequest);
        assert!(entries[1].diff_summary.as_deref().unwrap().contains("APPROVED"));
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&registration(&format!("E{:03}", i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].entity_id, "E007");
        assert_eq!(recent[2].entity_id, "E009");

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_journal_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_names_its_position() {
        let (logger, temp) = create_test_logger();
        logger.log(&registration("E001")).unwrap();
        let mut journal = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(journal, "\n{{truncated").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::create(EntityType::User, "admin", None, &json!({})))
            .unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
