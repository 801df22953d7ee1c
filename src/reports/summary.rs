//! Headline totals and recent activity

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::category::find_category;
use crate::models::{Category, Money, Transaction, TransactionId, TransactionType};

/// Default number of rows in the recent activity list
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Totals across every transaction in the snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; may be negative
    pub balance: Money,
    pub transaction_count: usize,
}

impl Summary {
    /// Summarize all transactions, dated or not
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => summary.total_income += txn.amount,
                TransactionType::Expense => summary.total_expenses += txn.amount,
            }
            summary.transaction_count += 1;
        }
        summary.balance = summary.total_income - summary.total_expenses;
        summary
    }
}

/// A row in the recent activity list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub icon: String,
    pub payment_method: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Money,
}

/// The `limit` most recent dated transactions, newest first
///
/// Transactions sharing a date keep their snapshot order.
pub fn recent_transactions(
    transactions: &[Transaction],
    categories: &[Category],
    limit: usize,
) -> Vec<RecentTransaction> {
    let mut dated: Vec<(NaiveDate, &Transaction)> = transactions
        .iter()
        .filter_map(|t| t.date.map(|date| (date, t)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));

    dated
        .into_iter()
        .take(limit)
        .map(|(date, txn)| {
            let category = txn.category_id.and_then(|id| find_category(categories, id));
            RecentTransaction {
                id: txn.id,
                date,
                description: txn.description.clone(),
                category: category
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "Uncategorized".to_string()),
                icon: category.map(|c| c.icon.clone()).unwrap_or_default(),
                payment_method: txn.payment_method.label().to_string(),
                kind: txn.kind,
                amount: txn.amount,
            }
        })
        .collect()
}
