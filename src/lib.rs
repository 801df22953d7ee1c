//! Budgetwise - financial analytics for personal budgeting snapshots
//!
//! This library turns a snapshot of transactions, categories, budgets and
//! savings goals into the figures a budgeting dashboard shows: income and
//! expense flow over time, spending breakdowns, period-over-period trends,
//! budget progress and goal progress. Every calculator is a pure function of
//! its inputs; the reference date is always passed in explicitly.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Snapshot records, money and date windows
//! - `storage`: Snapshot and settings file loading
//! - `reports`: The analytics calculators and dashboard assembler
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the `budgetwise` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetwise::models::WindowDays;
//! use budgetwise::reports::{DashboardParams, DashboardReport};
//! use budgetwise::storage::Snapshot;
//!
//! let snapshot = Snapshot::load("snapshot.json")?;
//! let params = DashboardParams::new(today, WindowDays::Seven);
//! let report = DashboardReport::assemble(&snapshot, &params);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetwiseError, BudgetwiseResult};
