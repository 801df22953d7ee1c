//! Period-over-period trends
//!
//! Compares income and expense totals in the current window (ending on the
//! reference date) with the window of equal length immediately before it.
//! The comparison is polarity-agnostic: whether a rise is good news is up to
//! the caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DateWindow, Money, Transaction, TransactionType, WindowDays};

/// Which way a value moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// One compared value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub current: Money,
    pub previous: Money,
    pub percent_change: f64,
    pub direction: TrendDirection,
}

impl TrendResult {
    pub fn new(current: Money, previous: Money) -> Self {
        let direction = match current.cmp(&previous) {
            std::cmp::Ordering::Greater => TrendDirection::Up,
            std::cmp::Ordering::Less => TrendDirection::Down,
            std::cmp::Ordering::Equal => TrendDirection::Flat,
        };
        Self {
            current,
            previous,
            percent_change: percent_change(current, previous),
            direction,
        }
    }
}

/// Income and expense trends for two adjacent windows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trends {
    pub current_window: DateWindow,
    pub previous_window: DateWindow,
    pub income: TrendResult,
    pub expense: TrendResult,
}

/// Signed percentage change from `previous` to `current`
///
/// - both zero: 0
/// - previous zero, current positive: 100
/// - otherwise `(current - previous) / previous * 100`
pub fn percent_change(current: Money, previous: Money) -> f64 {
    if previous.is_zero() {
        if current.is_positive() {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous).cents() as f64 * 100.0 / previous.cents() as f64
    }
}

/// Compare the `window` days ending on `now` with the window before it
pub fn compare(transactions: &[Transaction], now: NaiveDate, window: WindowDays) -> Trends {
    compare_windows(transactions, DateWindow::trailing_days(now, window.days()))
}

/// Compare `current` with the equal-length window immediately preceding it
pub fn compare_windows(transactions: &[Transaction], current: DateWindow) -> Trends {
    let previous = current.previous();
    let (income_now, expense_now) = totals_within(transactions, current);
    let (income_before, expense_before) = totals_within(transactions, previous);

    Trends {
        current_window: current,
        previous_window: previous,
        income: TrendResult::new(income_now, income_before),
        expense: TrendResult::new(expense_now, expense_before),
    }
}

/// Income and expense totals for transactions dated inside `window`
pub fn totals_within(transactions: &[Transaction], window: DateWindow) -> (Money, Money) {
    transactions
        .iter()
        .filter(|t| t.is_dated_between(window.start, window.end))
        .fold((Money::zero(), Money::zero()), |(income, expense), t| match t.kind {
            TransactionType::Income => (income + t.amount, expense),
            TransactionType::Expense => (income, expense + t.amount),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_percent_change_rules() {
        assert_eq!(percent_change(dollars(0), dollars(0)), 0.0);
        assert_eq!(percent_change(dollars(50), dollars(0)), 100.0);
        assert_eq!(percent_change(dollars(150), dollars(100)), 50.0);
        assert_eq!(percent_change(dollars(50), dollars(100)), -50.0);
        assert_eq!(percent_change(dollars(0), dollars(100)), -100.0);
    }

    #[test]
    fn test_compare_adjacent_windows() {
        let now = date(2025, 1, 14);
        let transactions = vec![
            // current window: Jan 8..=Jan 14
            Transaction::income(dollars(150), date(2025, 1, 14)),
            Transaction::expense(dollars(30), date(2025, 1, 8)),
            // previous window: Jan 1..=Jan 7
            Transaction::income(dollars(100), date(2025, 1, 7)),
            Transaction::expense(dollars(60), date(2025, 1, 1)),
            // neither
            Transaction::expense(dollars(1_000), date(2024, 12, 31)),
        ];

        let trends = compare(&transactions, now, WindowDays::Seven);
        assert_eq!(trends.current_window.start, date(2025, 1, 8));
        assert_eq!(trends.previous_window, DateWindow::new(date(2025, 1, 1), date(2025, 1, 7)));

        assert_eq!(trends.income.current, dollars(150));
        assert_eq!(trends.income.previous, dollars(100));
        assert_eq!(trends.income.percent_change, 50.0);
        assert_eq!(trends.income.direction, TrendDirection::Up);

        assert_eq!(trends.expense.percent_change, -50.0);
        assert_eq!(trends.expense.direction, TrendDirection::Down);
    }

    #[test]
    fn test_empty_set_is_flat_zero() {
        let trends = compare(&[], date(2025, 6, 30), WindowDays::Thirty);
        assert_eq!(trends.income.percent_change, 0.0);
        assert_eq!(trends.expense.direction, TrendDirection::Flat);
        assert_eq!(trends.previous_window.days(), 30);
    }
}
