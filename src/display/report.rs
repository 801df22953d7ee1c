//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard views.

use crate::reports::{BudgetStatus, TrendDirection};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a signed change such as `+12.5%` or `-50%`
pub fn format_change(pct: f64) -> String {
    let sign = if pct > 0.0 { "+" } else if pct < 0.0 { "-" } else { "" };
    format!("{}{}", sign, format_percentage(pct.abs()))
}

/// Arrow for a trend direction
pub fn trend_arrow(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
        TrendDirection::Flat => "─",
    }
}

/// Short badge for a budget status
pub fn status_badge(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Ok => "OK",
        BudgetStatus::Warn => "WARN",
        BudgetStatus::Over => "OVER",
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Prefix a label with its icon when it has one
pub fn with_icon(icon: &str, label: &str) -> String {
    if icon.is_empty() {
        label.to_string()
    } else {
        format!("{} {}", icon, label)
    }
}
