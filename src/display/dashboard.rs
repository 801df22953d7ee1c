//! Dashboard display formatting
//!
//! Renders report sections as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{
    format_bar, format_change, format_header, format_percentage, separator, status_badge,
    trend_arrow, truncate, with_icon,
};
use crate::models::TransactionType;
use crate::reports::{
    AchievementCard, Breakdown, Bucket, BudgetCard, DashboardReport, GoalCard, RecentTransaction,
    Summary, TrendResult, Trends,
};

const REPORT_WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct FlowRow {
    #[tabled(rename = "Period")]
    label: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

#[derive(Tabled)]
struct SliceRow {
    #[tabled(rename = "Group")]
    name: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Txns")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "")]
    name: &'static str,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Previous")]
    previous: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Budget")]
    label: String,
    #[tabled(rename = "Period")]
    window: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    current: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

#[derive(Tabled)]
struct AchievementRow {
    #[tabled(rename = "Achievement")]
    name: String,
    #[tabled(rename = "Goal")]
    description: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "")]
    state: &'static str,
}

#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, separator(REPORT_WIDTH))
}

/// Format the headline totals
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    format!(
        "Income: {}   Expenses: {}   Balance: {}   ({} transactions)\n",
        summary.total_income.format_with_symbol(currency),
        summary.total_expenses.format_with_symbol(currency),
        summary.balance.format_with_symbol(currency),
        summary.transaction_count
    )
}

/// Format a flow or monthly series
pub fn format_flow(buckets: &[Bucket], currency: &str) -> String {
    let rows = buckets
        .iter()
        .map(|bucket| FlowRow {
            label: bucket.label.clone(),
            income: bucket.income.format_with_symbol(currency),
            expense: bucket.expense.format_with_symbol(currency),
            net: bucket.net().format_with_symbol(currency),
        })
        .collect();
    render(rows)
}

/// Format a category or payment-method breakdown
pub fn format_breakdown(breakdown: &Breakdown, currency: &str) -> String {
    if breakdown.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let largest = breakdown
        .slices
        .first()
        .map(|s| s.percent_of_total)
        .unwrap_or(0.0);

    let rows = breakdown
        .slices
        .iter()
        .map(|slice| SliceRow {
            name: truncate(&with_icon(&slice.icon, &slice.name), 28),
            total: slice.total.format_with_symbol(currency),
            count: slice.transaction_count,
            share: format_percentage(slice.percent_of_total),
            bar: format_bar(slice.percent_of_total, largest, BAR_WIDTH),
        })
        .collect();

    let mut output = render(rows);
    output.push('\n');
    if breakdown.hidden_count > 0 {
        output.push_str(&format!(
            "+ {} more ({}, {})\n",
            breakdown.hidden_count,
            breakdown.hidden_total.format_with_symbol(currency),
            format_percentage(breakdown.hidden_total.percent_of(breakdown.total))
        ));
    }
    output.push_str(&format!(
        "Total spending: {}\n",
        breakdown.total.format_with_symbol(currency)
    ));
    output
}

fn trend_row(name: &'static str, trend: &TrendResult, currency: &str) -> TrendRow {
    TrendRow {
        name,
        current: trend.current.format_with_symbol(currency),
        previous: trend.previous.format_with_symbol(currency),
        change: format!(
            "{} {}",
            trend_arrow(trend.direction),
            format_change(trend.percent_change)
        ),
    }
}

/// Format the period-over-period comparison
pub fn format_trends(trends: &Trends, currency: &str) -> String {
    let rows = vec![
        trend_row("Income", &trends.income, currency),
        trend_row("Expense", &trends.expense, currency),
    ];
    format!(
        "{} vs {}\n{}\n",
        trends.current_window,
        trends.previous_window,
        render(rows)
    )
}

/// Format budget progress cards
pub fn format_budgets(cards: &[BudgetCard], currency: &str) -> String {
    if cards.is_empty() {
        return "No budgets defined.\n".to_string();
    }

    let rows = cards
        .iter()
        .map(|card| BudgetRow {
            label: truncate(&with_icon(&card.icon, &card.category_label), 28),
            window: card.window.to_string(),
            spent: card.spent.format_with_symbol(currency),
            limit: card.limit.format_with_symbol(currency),
            used: format_percentage(card.percentage),
            status: if card.overage_amount.is_positive() {
                format!(
                    "{} +{}",
                    status_badge(card.status),
                    card.overage_amount.format_with_symbol(currency)
                )
            } else {
                status_badge(card.status).to_string()
            },
        })
        .collect();
    format!("{}\n", render(rows))
}

/// Format savings goal progress
pub fn format_goals(goals: &[GoalCard], currency: &str) -> String {
    if goals.is_empty() {
        return "No savings goals.\n".to_string();
    }

    let rows = goals
        .iter()
        .map(|goal| GoalRow {
            name: truncate(&goal.name, 28),
            current: goal.current.format_with_symbol(currency),
            target: goal.target.format_with_symbol(currency),
            progress: format!(
                "{} {}",
                format_bar(goal.progress, 100.0, 10),
                format_percentage(goal.progress)
            ),
        })
        .collect();
    format!("{}\n", render(rows))
}

/// Format achievement progress with an unlocked count
pub fn format_achievements(cards: &[AchievementCard]) -> String {
    if cards.is_empty() {
        return "No achievements available.\n".to_string();
    }

    let unlocked = cards.iter().filter(|c| c.unlocked).count();
    let rows = cards
        .iter()
        .map(|card| AchievementRow {
            name: card.name.clone(),
            description: truncate(&card.description, 30),
            progress: format!("{}/{}", card.progress, card.threshold),
            state: if card.unlocked { "Unlocked" } else { "Locked" },
        })
        .collect();
    format!("{}\n{} / {} unlocked\n", render(rows), unlocked, cards.len())
}

/// Format the recent activity list
pub fn format_recent(recent: &[RecentTransaction], currency: &str) -> String {
    if recent.is_empty() {
        return "No recent transactions.\n".to_string();
    }

    let rows = recent
        .iter()
        .map(|txn| {
            let sign = if txn.kind == TransactionType::Income {
                "+"
            } else {
                "-"
            };
            RecentRow {
                date: txn.date.format("%Y-%m-%d").to_string(),
                description: truncate(&txn.description, 30),
                category: with_icon(&txn.icon, &txn.category),
                method: txn.payment_method.clone(),
                amount: format!("{}{}", sign, txn.amount.format_with_symbol(currency)),
            }
        })
        .collect();
    format!("{}\n", render(rows))
}

/// Format the full dashboard
pub fn format_dashboard(report: &DashboardReport, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header(
        &format!("Budgetwise Dashboard ({})", report.now.format("%Y-%m-%d")),
        REPORT_WIDTH,
    ));
    output.push('\n');
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_summary(&report.summary, currency));

    output.push_str(&section(&format!("Cash Flow (last {} days)", report.window_days.days())));
    output.push_str(&format_flow(&report.flow, currency));
    output.push('\n');

    output.push_str(&section("Trends"));
    output.push_str(&format_trends(&report.trends, currency));

    output.push_str(&section("Spending by Category"));
    output.push_str(&format_breakdown(&report.category_breakdown, currency));

    output.push_str(&section("Spending by Payment Method"));
    output.push_str(&format_breakdown(&report.payment_method_breakdown, currency));

    output.push_str(&section("Monthly Overview"));
    output.push_str(&format_flow(&report.monthly, currency));
    output.push('\n');

    output.push_str(&section("Budgets"));
    output.push_str(&format_budgets(&report.budgets, currency));

    output.push_str(&section("Savings Goals"));
    output.push_str(&format_goals(&report.goals, currency));

    output.push_str(&section("Achievements"));
    output.push_str(&format_achievements(&report.achievements));

    output.push_str(&section("Recent Transactions"));
    output.push_str(&format_recent(&report.recent, currency));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, WindowDays};
    use crate::reports::{achievements, breakdown, DashboardParams};
    use crate::storage::Snapshot;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_breakdown_lists_hidden_groups() {
        let categories: Vec<Category> = (0..3).map(|i| Category::new(format!("Cat{}", i))).collect();
        let transactions: Vec<Transaction> = categories
            .iter()
            .map(|c| Transaction::expense(Money::from_cents(1_000), date(2025, 1, 1)).with_category(c.id))
            .collect();

        let output = format_breakdown(
            &breakdown::by_category(&transactions, &categories, Some(2)),
            "$",
        );
        assert!(output.contains("Cat0"));
        assert!(output.contains("Cat1"));
        assert!(!output.contains("Cat2"));
        assert!(output.contains("+ 1 more ($10.00, 33%)"));
        assert!(output.contains("Total spending: $30.00"));
    }

    #[test]
    fn test_empty_sections() {
        assert_eq!(format_budgets(&[], "$"), "No budgets defined.\n");
        assert_eq!(format_goals(&[], "$"), "No savings goals.\n");
        assert_eq!(format_recent(&[], "$"), "No recent transactions.\n");
        assert_eq!(format_achievements(&[]), "No achievements available.\n");
    }

    #[test]
    fn test_format_achievements_counts_unlocked() {
        let transactions = vec![Transaction::expense(Money::from_cents(100), date(2025, 1, 1))];
        let cards = achievements::achievement_cards(&transactions, &[], &[], date(2025, 1, 1));
        let output = format_achievements(&cards);

        assert!(output.contains("First Steps"));
        assert!(output.contains("1/10"));
        assert!(output.contains("Unlocked"));
        assert!(output.contains("1 / 4 unlocked"));
    }

    #[test]
    fn test_format_dashboard_has_every_section() {
        let snapshot = Snapshot::new(
            vec![Transaction::income(Money::from_cents(50_000), date(2025, 1, 15)).with_description("Salary")],
            Vec::new(),
        );
        let report = DashboardReport::assemble(
            &snapshot,
            &DashboardParams::new(date(2025, 1, 15), WindowDays::Seven),
        );
        let output = format_dashboard(&report, "€");

        for heading in [
            "Budgetwise Dashboard (2025-01-15)",
            "Cash Flow (last 7 days)",
            "Trends",
            "Spending by Category",
            "Monthly Overview",
            "Budgets",
            "Savings Goals",
            "Achievements",
            "Recent Transactions",
            "Salary",
            "+€500.00",
        ] {
            assert!(output.contains(heading), "missing {heading}");
        }
    }
}
