//! Vacations CLI - employee vacation accrual and approval manager
//!
//! This library implements the vacations manager: employees accrue vacation
//! days for every full month worked, request ranges of days (Sundays are not
//! charged), and operators approve or reject those requests. Approved
//! vacations can be exported per month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (employees, vacation requests, operators)
//! - `storage`: CSV file storage layer
//! - `services`: Accrual, eligibility and approval rules plus orchestration
//! - `audit`: Audit logging system
//! - `auth`: Operator password hashing and login
//! - `reports`: Approved vacations report
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `telemetry`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use vacations_cli::config::{VacationPaths, Settings};
//! use vacations_cli::services::VacationService;
//! use vacations_cli::storage::Storage;
//!
//! let paths = VacationPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let summary = VacationService::new(&mut storage).balance("E001", today)?;
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use error::{VacationError, VacationResult};
