//! User settings for Budgetwise
//!
//! Defaults for the dashboard: window length, how many category slices to
//! show, how many recent transactions to list, and the output format.

use serde::{Deserialize, Serialize};

use super::paths::BudgetwisePaths;
use crate::error::BudgetwiseError;
use crate::models::WindowDays;
use crate::reports::breakdown::DEFAULT_TOP_CATEGORIES;
use crate::reports::summary::DEFAULT_RECENT_LIMIT;
use crate::storage::file_io::read_json;

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON view-model
    Json,
    /// YAML view-model
    Yaml,
}

/// User settings for Budgetwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Window used when `--window` is not given
    #[serde(default)]
    pub default_window_days: WindowDays,

    /// Number of slices kept in the category breakdown
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Number of transactions listed under recent activity
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Currency symbol for table output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_top_categories() -> usize {
    DEFAULT_TOP_CATEGORIES
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_window_days: WindowDays::default(),
            top_categories: default_top_categories(),
            recent_limit: default_recent_limit(),
            currency_symbol: default_currency(),
            default_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetwisePaths) -> Result<Self, BudgetwiseError> {
        read_json(paths.settings_file()).map_err(|e| {
            BudgetwiseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetwisePaths) -> Result<(), BudgetwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetwiseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
