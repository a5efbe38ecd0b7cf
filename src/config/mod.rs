//! Configuration module for the vacations manager
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Report preferences

pub mod paths;
pub mod settings;

pub use paths::VacationPaths;
pub use settings::{ReportFormat, Settings};
