//! Path management for Budgetwise
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETWISE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/budgetwise` on Linux, `~/Library/Application Support/budgetwise`
//!    on macOS, `%APPDATA%\budgetwise\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetwiseError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGETWISE_CONFIG_DIR";

/// Manages all paths used by Budgetwise
#[derive(Debug, Clone)]
pub struct BudgetwisePaths {
    base_dir: PathBuf,
}

impl BudgetwisePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, BudgetwiseError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "budgetwise")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetwiseError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetwiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetwiseError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
