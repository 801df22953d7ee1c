//! Display formatting for terminal output
//!
//! Provides utilities for rendering reports as tables, bars and status
//! badges.

pub mod dashboard;
pub mod report;

pub use dashboard::{
    format_achievements, format_breakdown, format_budgets, format_dashboard, format_flow, format_goals, format_recent,
    format_summary, format_trends,
};
