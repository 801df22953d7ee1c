//! CLI command handlers
//!
//! This module bridges clap argument parsing with the reporting engine.

pub mod report;

pub use report::{handle_report_command, BreakdownBy, ReportArgs, ReportCommands};
