//! Audit logging system for the vacations manager
//!
//! Records every create and update of employees, operator accounts and
//! vacation requests, with before/after values, in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, entity
//!   information, acting operator and optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL).
//! - `generate_diff`: creates human-readable diffs between entity states.
//!
//! # Example
//!
//! ```rust,ignore
//! use vacations_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Employee,
//!     "E001",
//!     Some("Ana Torres".to_string()),
//!     &employee,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
