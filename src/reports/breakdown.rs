//! Spending breakdowns
//!
//! Groups expense transactions by category or by payment method, sums each
//! group and computes its share of total spending. Income is not broken down.
//!
//! Shares are always taken against the total of *every* group, so when the
//! category view is cut down to its top slices the remaining percentages
//! still describe the whole month rather than the visible subset.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::models::category::find_category;
use crate::models::{Category, CategoryId, Money, PaymentMethod, Transaction};

/// Default number of slices kept in the category view
pub const DEFAULT_TOP_CATEGORIES: usize = 8;

const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// What a slice is grouped by
///
/// `Uncategorized` is its own variant so that a real category that happens
/// to be called "Uncategorized" never merges with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum GroupKey {
    Category(CategoryId),
    Uncategorized,
    PaymentMethod(PaymentMethod),
}

/// A named group with its aggregated total and share of all spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub key: GroupKey,
    pub name: String,
    pub icon: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the total across all groups, 0..=100
    pub percent_of_total: f64,
}

/// An ordered breakdown, largest slice first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub slices: Vec<CategorySlice>,
    /// Total expense across all groups, including truncated ones
    pub total: Money,
    /// Number of groups cut off by the top-K limit
    pub hidden_count: usize,
    /// Combined total of the groups cut off by the top-K limit
    pub hidden_total: Money,
}

impl Breakdown {
    /// Sum of the visible slices' percentages
    pub fn percent_sum(&self) -> f64 {
        self.slices.iter().map(|s| s.percent_of_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

struct Group {
    key: GroupKey,
    name: String,
    icon: String,
    total: Money,
    count: usize,
}

/// Break down expenses by category, keeping the `top` largest slices
///
/// A transaction without a category, or whose category no longer exists,
/// lands in the uncategorized group. `None` keeps every slice.
pub fn by_category(
    transactions: &[Transaction],
    categories: &[Category],
    top: Option<usize>,
) -> Breakdown {
    let breakdown = aggregate(transactions, top, |txn| {
        match txn.category_id.and_then(|id| find_category(categories, id)) {
            Some(category) => (
                GroupKey::Category(category.id),
                category.name.clone(),
                category.icon.clone(),
            ),
            None => (
                GroupKey::Uncategorized,
                UNCATEGORIZED_LABEL.to_string(),
                String::new(),
            ),
        }
    });
    debug!(
        slices = breakdown.slices.len(),
        hidden = breakdown.hidden_count,
        "Built category breakdown"
    );
    breakdown
}

/// Break down expenses by payment method; every method with spending is kept
pub fn by_payment_method(transactions: &[Transaction]) -> Breakdown {
    aggregate(transactions, None, |txn| {
        (
            GroupKey::PaymentMethod(txn.payment_method),
            txn.payment_method.label().to_string(),
            String::new(),
        )
    })
}

fn aggregate<F>(transactions: &[Transaction], top: Option<usize>, mut classify: F) -> Breakdown
where
    F: FnMut(&Transaction) -> (GroupKey, String, String),
{
    // Groups stay in first-seen order so the stable sort below breaks ties by encounter order.
    let mut groups: Vec<Group> = Vec::new();
    let mut positions: HashMap<GroupKey, usize> = HashMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let (key, name, icon) = classify(txn);
        let position = *positions.entry(key).or_insert_with(|| {
            groups.push(Group {
                key,
                name,
                icon,
                total: Money::zero(),
                count: 0,
            });
            groups.len() - 1
        });
        groups[position].total += txn.amount;
        groups[position].count += 1;
    }

    let total: Money = groups.iter().map(|g| g.total).sum();
    groups.sort_by(|a, b| b.total.cmp(&a.total));

    let visible = top.unwrap_or(groups.len()).min(groups.len());
    let hidden_total: Money = groups[visible..].iter().map(|g| g.total).sum();
    let hidden_count = groups.len() - visible;

    let slices = groups
        .into_iter()
        .take(visible)
        .map(|group| CategorySlice {
            percent_of_total: group.total.percent_of(total),
            key: group.key,
            name: group.name,
            icon: group.icon,
            total: group.total,
            transaction_count: group.count,
        })
        .collect();

    Breakdown {
        slices,
        total,
        hidden_count,
        hidden_total,
    }
}
