//! Path management for the vacations manager
//!
//! Provides XDG-compliant path resolution for configuration, data, and reports.
//!
//! ## Path Resolution Order
//!
//! 1. `VACATIONS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/vacations-cli` or `~/.config/vacations-cli`
//! 3. Windows: `%APPDATA%\vacations-cli`

use std::path::PathBuf;

use crate::error::VacationError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "VACATIONS_DATA_DIR";

/// Manages all paths used by the vacations manager
#[derive(Debug, Clone)]
pub struct VacationPaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl VacationPaths {
    /// Create a new VacationPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, VacationError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create VacationPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/vacations-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/vacations-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory generated reports are written to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn employees_file(&self) -> PathBuf {
        self.data_dir().join("employees.csv")
    }

    pub fn vacations_file(&self) -> PathBuf {
        self.data_dir().join("vacations.csv")
    }

    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), VacationError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VacationError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| VacationError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| VacationError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }

    /// Check if the manager has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, VacationError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                VacationError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("vacations-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, VacationError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| VacationError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("vacations-cli"))
}
