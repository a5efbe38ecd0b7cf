//! User settings for the vacations manager
//!
//! Manages preferences for diagnostics and report generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::VacationPaths;
use crate::error::VacationError;

/// Output format for generated reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Spreadsheet-compatible CSV (default)
    #[default]
    Csv,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl ReportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = VacationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(VacationError::Validation(format!(
                "Unknown report format '{}' (expected csv, json or yaml)",
                other
            ))),
        }
    }
}

/// User settings for the vacations manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Diagnostic log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// File name prefix for generated reports
    #[serde(default = "default_report_file_prefix")]
    pub report_file_prefix: String,

    /// Report format used when none is given on the command line
    #[serde(default)]
    pub default_report_format: ReportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_report_file_prefix() -> String {
    "vacations_report".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            log_level: default_log_level(),
            report_file_prefix: default_report_file_prefix(),
            default_report_format: ReportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VacationPaths) -> Result<Self, VacationError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                VacationError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                VacationError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VacationPaths) -> Result<(), VacationError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            VacationError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            VacationError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
