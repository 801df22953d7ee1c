//! Temporal bucketing
//!
//! Builds ordered, zero-seeded day or month buckets for a window ending on
//! the reference date and attributes dated transactions to them. Buckets for
//! one request partition the window: they are contiguous, never overlap and
//! each holds non-negative income and expense totals.

use std::collections::HashMap;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::period::first_of_month;
use crate::models::{DateWindow, Money, Transaction, TransactionType, WindowDays};

/// Number of calendar months in the monthly series
pub const MONTHLY_BUCKETS: u32 = 6;

/// Bucket size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day
    #[default]
    Day,
    /// One bucket per calendar month, always six of them
    Month,
}

/// A fixed time slice holding aggregated income and expense totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// Display label ("Mon", "3/14" or "Mar")
    pub label: String,
    /// Canonical key: the day itself, or the first day of the month
    pub key: NaiveDate,
    /// Days covered by this bucket
    pub window: DateWindow,
    pub income: Money,
    pub expense: Money,
}

impl Bucket {
    fn empty(label: String, key: NaiveDate, window: DateWindow) -> Self {
        Self {
            label,
            key,
            window,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    /// Income minus expense for this bucket
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// The full span covered by the buckets of a request
pub fn coverage(now: NaiveDate, window: WindowDays, granularity: Granularity) -> DateWindow {
    match granularity {
        Granularity::Day => DateWindow::trailing_days(now, window.days()),
        Granularity::Month => DateWindow::trailing_months(now, MONTHLY_BUCKETS),
    }
}

/// Build the ordered, zero-seeded buckets for a request
///
/// Day mode yields `window.days()` buckets ending on `now`. Month mode yields
/// exactly [`MONTHLY_BUCKETS`] buckets ending with the month of `now`,
/// whatever the window length.
pub fn build_skeleton(now: NaiveDate, window: WindowDays, granularity: Granularity) -> Vec<Bucket> {
    match granularity {
        Granularity::Day => DateWindow::trailing_days(now, window.days())
            .iter_days()
            .map(|day| Bucket::empty(day_label(day, window), day, DateWindow::new(day, day)))
            .collect(),
        Granularity::Month => {
            let current = first_of_month(now);
            (0..MONTHLY_BUCKETS)
                .rev()
                .filter_map(|back| current.checked_sub_months(Months::new(back)))
                .map(|month| {
                    Bucket::empty(month_label(month), month, DateWindow::month_of(month))
                })
                .collect()
        }
    }
}

/// Attribute transactions to the bucket whose key matches their date
///
/// Undated transactions and those outside every bucket are skipped. Returns
/// the number of transactions that were skipped.
pub fn fill(buckets: &mut [Bucket], transactions: &[Transaction], granularity: Granularity) -> usize {
    let index: HashMap<NaiveDate, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| (bucket.key, i))
        .collect();

    let mut skipped = 0;
    for txn in transactions {
        let slot = txn
            .date
            .map(|date| bucket_key(date, granularity))
            .and_then(|key| index.get(&key));

        match slot {
            Some(&i) => match txn.kind {
                TransactionType::Income => buckets[i].income += txn.amount,
                TransactionType::Expense => buckets[i].expense += txn.amount,
            },
            None => skipped += 1,
        }
    }

    skipped
}

/// Income/expense series for the dashboard flow chart
pub fn flow_series(
    transactions: &[Transaction],
    now: NaiveDate,
    window: WindowDays,
    granularity: Granularity,
) -> Vec<Bucket> {
    let mut buckets = build_skeleton(now, window, granularity);
    let skipped = fill(&mut buckets, transactions, granularity);
    debug!(
        buckets = buckets.len(),
        skipped,
        ?granularity,
        "Built flow series"
    );
    buckets
}

/// Six-month income/expense series ending with the month of `now`
pub fn monthly_series(transactions: &[Transaction], now: NaiveDate) -> Vec<Bucket> {
    flow_series(transactions, now, WindowDays::default(), Granularity::Month)
}

fn bucket_key(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Day => date,
        Granularity::Month => first_of_month(date),
    }
}

fn day_label(day: NaiveDate, window: WindowDays) -> String {
    match window {
        WindowDays::Seven => day.format("%a").to_string(),
        WindowDays::Thirty => format!("{}/{}", day.month(), day.day()),
    }
}

fn month_label(month: NaiveDate) -> String {
    month.format("%b").to_string()
}
