//! Configuration module for Budgetwise
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetwisePaths;
pub use settings::{OutputFormat, Settings};
