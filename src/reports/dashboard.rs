//! Dashboard view-model
//!
//! Composes every calculator against one snapshot into the structure the
//! presentation layer renders. Nothing here reads the clock: the reference
//! date arrives in [`DashboardParams`], so the same snapshot and parameters
//! always produce the same report.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::achievements::{self, AchievementCard};
use super::breakdown::{self, Breakdown, DEFAULT_TOP_CATEGORIES};
use super::budget_progress::{self, BudgetCard};
use super::buckets::{self, Bucket, Granularity};
use super::goals::{self, GoalCard};
use super::summary::{self, RecentTransaction, Summary, DEFAULT_RECENT_LIMIT};
use super::trend::{self, Trends};
use crate::models::WindowDays;
use crate::storage::Snapshot;

/// Inputs of one dashboard request besides the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    pub now: NaiveDate,
    pub window: WindowDays,
    /// Slices kept in the category breakdown
    pub top_categories: usize,
    /// Rows kept in the recent activity list
    pub recent_limit: usize,
}

impl DashboardParams {
    pub fn new(now: NaiveDate, window: WindowDays) -> Self {
        Self {
            now,
            window,
            top_categories: DEFAULT_TOP_CATEGORIES,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_top_categories(mut self, top_categories: usize) -> Self {
        self.top_categories = top_categories;
        self
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }
}

/// Everything the dashboard shows for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub now: NaiveDate,
    pub window_days: WindowDays,
    pub summary: Summary,
    /// Daily income/expense over the window
    pub flow: Vec<Bucket>,
    /// Six calendar months ending with the current one
    pub monthly: Vec<Bucket>,
    pub category_breakdown: Breakdown,
    pub payment_method_breakdown: Breakdown,
    pub trends: Trends,
    pub budgets: Vec<BudgetCard>,
    pub goals: Vec<GoalCard>,
    pub achievements: Vec<AchievementCard>,
    pub recent: Vec<RecentTransaction>,
}

impl DashboardReport {
    /// Build the dashboard for a snapshot
    ///
    /// Breakdowns and the summary span the whole snapshot; flow and trends
    /// follow the window; budgets follow their own windows. When the snapshot
    /// carries no budgets they are synthesized from category limits.
    pub fn assemble(snapshot: &Snapshot, params: &DashboardParams) -> Self {
        let transactions = &snapshot.transactions;
        let categories = &snapshot.categories;

        let report = Self {
            now: params.now,
            window_days: params.window,
            summary: Summary::from_transactions(transactions),
            flow: buckets::flow_series(transactions, params.now, params.window, Granularity::Day),
            monthly: buckets::monthly_series(transactions, params.now),
            category_breakdown: breakdown::by_category(
                transactions,
                categories,
                Some(params.top_categories),
            ),
            payment_method_breakdown: breakdown::by_payment_method(transactions),
            trends: trend::compare(transactions, params.now, params.window),
            budgets: budget_progress::evaluate_all(
                &snapshot.effective_budgets(),
                transactions,
                categories,
                params.now,
            ),
            goals: goals::goal_cards(&snapshot.goals),
            achievements: achievements::achievement_cards(
                transactions,
                &snapshot.budgets,
                &snapshot.goals,
                params.now,
            ),
            recent: summary::recent_transactions(transactions, categories, params.recent_limit),
        };

        debug!(
            now = %params.now,
            window = %params.window,
            budgets = report.budgets.len(),
            "Assembled dashboard"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetDefinition, Category, Goal, Money, PaymentMethod, Transaction};
    use crate::reports::budget_progress::BudgetStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    fn sample_snapshot() -> Snapshot {
        let food = Category::new("Food")
            .with_icon("🍔")
            .with_default_limit(dollars(400));
        let rent = Category::new("Rent").with_default_limit(dollars(1000));

        let transactions = vec![
            Transaction::income(dollars(3000), date(2025, 3, 1)).with_description("Salary"),
            Transaction::expense(dollars(1000), date(2025, 3, 2))
                .with_category(rent.id)
                .with_payment_method(PaymentMethod::BankTransfer),
            Transaction::expense(dollars(350), date(2025, 3, 10))
                .with_category(food.id)
                .with_payment_method(PaymentMethod::CreditCard),
            Transaction::expense(dollars(40), date(2025, 2, 20)).with_category(food.id),
            Transaction::income(dollars(2800), date(2025, 2, 1)),
        ];

        let mut snapshot = Snapshot::new(transactions, vec![food, rent]);
        snapshot.goals.push(Goal::new("Emergency fund", dollars(5000)));
        snapshot
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let snapshot = sample_snapshot();
        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Seven);

        let first = DashboardReport::assemble(&snapshot, &params);
        let second = DashboardReport::assemble(&snapshot, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assemble_composes_every_section() {
        let snapshot = sample_snapshot();
        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Thirty);
        let report = DashboardReport::assemble(&snapshot, &params);

        assert_eq!(report.summary.transaction_count, 5);
        assert_eq!(report.summary.balance, dollars(5800 - 1390));
        assert_eq!(report.flow.len(), 30);
        assert_eq!(report.flow.last().unwrap().key, params.now);
        assert_eq!(report.monthly.len(), 6);
        assert_eq!(report.monthly[5].label, "Mar");

        assert_eq!(report.category_breakdown.slices[0].name, "Rent");
        assert_eq!(report.category_breakdown.total, dollars(1390));
        assert_eq!(report.payment_method_breakdown.slices.len(), 3);

        // Synthesized budgets: one per category limit, for March
        assert_eq!(report.budgets.len(), 2);
        let food = report
            .budgets
            .iter()
            .find(|b| b.category_label == "Food")
            .unwrap();
        assert_eq!(food.spent, dollars(350));
        assert_eq!(food.status, BudgetStatus::Warn);

        assert_eq!(report.goals.len(), 1);
        assert_eq!(report.achievements.len(), 4);
        assert!(report.achievements[0].unlocked);
        assert!(!report.achievements[1].unlocked);
        assert_eq!(report.recent.len(), 5);
        assert_eq!(report.recent[0].date, date(2025, 3, 10));
    }

    #[test]
    fn test_explicit_budgets_take_precedence() {
        let mut snapshot = sample_snapshot();
        snapshot.budgets.push(BudgetDefinition::new(None, dollars(1000)));

        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Seven);
        let report = DashboardReport::assemble(&snapshot, &params);

        assert_eq!(report.budgets.len(), 1);
        assert_eq!(report.budgets[0].category_label, "All categories");
        assert_eq!(report.budgets[0].spent, dollars(1350));
        assert_eq!(report.budgets[0].status, BudgetStatus::Over);
        assert_eq!(report.budgets[0].overage_amount, dollars(350));
    }

    #[test]
    fn test_loaded_snapshot_without_ids_is_idempotent() {
        let json = r#"{
            "categories": [ { "name": "Food", "defaultLimit": 400 } ],
            "transactions": [ { "amount": 20, "type": "EXPENSE", "date": "2025-03-10" } ],
            "goals": [ { "name": "Bike", "targetAmount": 400 } ]
        }"#;
        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Seven);

        let first: Snapshot = serde_json::from_str(json).unwrap();
        let second: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            DashboardReport::assemble(&first, &params),
            DashboardReport::assemble(&second, &params)
        );
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        let snapshot = Snapshot::new(
            vec![
                Transaction::expense(Money::from_major(1e300), date(2025, 3, 10)),
                Transaction::expense(Money::from_major(1e300), date(2025, 3, 11)),
                Transaction::income(Money::from_major(-1e300).abs(), date(2025, 3, 11)),
            ],
            Vec::new(),
        );
        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Seven);
        let report = DashboardReport::assemble(&snapshot, &params);

        assert_eq!(report.summary.total_expenses.cents(), i64::MAX);
        assert_eq!(report.category_breakdown.total.cents(), i64::MAX);
        assert!(report.trends.expense.percent_change.is_finite());
    }

    #[test]
    fn test_empty_snapshot_yields_zeroed_report() {
        let params = DashboardParams::new(date(2025, 3, 12), WindowDays::Seven)
            .with_top_categories(3)
            .with_recent_limit(2);
        let report = DashboardReport::assemble(&Snapshot::default(), &params);

        assert_eq!(report.flow.len(), 7);
        assert!(report.flow.iter().all(|b| b.income.is_zero() && b.expense.is_zero()));
        assert!(report.category_breakdown.is_empty());
        assert_eq!(report.trends.expense.percent_change, 0.0);
        assert!(report.budgets.is_empty());
        assert!(report.recent.is_empty());
    }
}
