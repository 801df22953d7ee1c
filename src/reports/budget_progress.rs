//! Budget progress
//!
//! Measures expense spending against each budget definition over its
//! window. The displayed percentage is clamped to 0..=100 while the overage
//! is kept separately, unclamped. Zero or negative limits never fail.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::category::find_category;
use crate::models::{BudgetDefinition, BudgetId, Category, DateWindow, Money, Transaction};

/// Share of the limit above which a budget is flagged, in percent
pub const WARN_THRESHOLD_PERCENT: i64 = 80;

/// Where spending stands against the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    Ok,
    Warn,
    Over,
}

/// Presentation-ready progress for one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetCard {
    pub budget_id: BudgetId,
    pub category_label: String,
    pub icon: String,
    pub window: DateWindow,
    pub limit: Money,
    pub spent: Money,
    /// Limit minus spending, never below zero
    pub remaining: Money,
    /// Spending as a share of the limit, clamped to 0..=100
    pub percentage: f64,
    pub status: BudgetStatus,
    /// Spending beyond the limit, never below zero; measured from the limit
    /// as given, so a negative limit adds to it
    pub overage_amount: Money,
}

impl BudgetCard {
    pub fn is_over_budget(&self) -> bool {
        self.status == BudgetStatus::Over
    }
}

/// Display percentage and status for `spent` against `limit`
pub fn classify(spent: Money, limit: Money) -> (f64, BudgetStatus) {
    if !limit.is_positive() {
        return if spent.is_positive() {
            (100.0, BudgetStatus::Over)
        } else {
            (0.0, BudgetStatus::Ok)
        };
    }

    let percentage = spent.percent_of(limit).clamp(0.0, 100.0);
    let status = if spent > limit {
        BudgetStatus::Over
    } else if i128::from(spent.cents()) * 100
        > i128::from(limit.cents()) * i128::from(WARN_THRESHOLD_PERCENT)
    {
        BudgetStatus::Warn
    } else {
        BudgetStatus::Ok
    };

    (percentage, status)
}

/// Total expense matching a budget's category within `window`
pub fn spent_within(
    budget: &BudgetDefinition,
    transactions: &[Transaction],
    window: DateWindow,
) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| t.is_dated_between(window.start, window.end))
        .filter(|t| budget.category_id.is_none() || t.category_id == budget.category_id)
        .map(|t| t.amount)
        .sum()
}

/// Evaluate one budget against the snapshot
pub fn evaluate(
    budget: &BudgetDefinition,
    transactions: &[Transaction],
    categories: &[Category],
    now: NaiveDate,
) -> BudgetCard {
    let window = budget.window(now);
    let spent = spent_within(budget, transactions, window);
    let limit = budget.amount_limit;
    let (percentage, status) = classify(spent, limit);

    let (category_label, icon) = match budget.category_id {
        None => ("All categories".to_string(), String::new()),
        Some(id) => match find_category(categories, id) {
            Some(category) => (category.name.clone(), category.icon.clone()),
            None => ("Unknown category".to_string(), String::new()),
        },
    };

    BudgetCard {
        budget_id: budget.id,
        category_label,
        icon,
        window,
        limit,
        spent,
        remaining: (limit - spent).non_negative(),
        percentage,
        status,
        overage_amount: (spent - limit).non_negative(),
    }
}

/// Evaluate every budget, preserving input order
pub fn evaluate_all(
    budgets: &[BudgetDefinition],
    transactions: &[Transaction],
    categories: &[Category],
    now: NaiveDate,
) -> Vec<BudgetCard> {
    let cards: Vec<BudgetCard> = budgets
        .iter()
        .map(|budget| evaluate(budget, transactions, categories, now))
        .collect();
    debug!(
        budgets = cards.len(),
        over = cards.iter().filter(|c| c.is_over_budget()).count(),
        "Evaluated budgets"
    );
    cards
}
