//! Snapshot loading
//!
//! A [`Snapshot`] is the frozen set of records a single engine invocation
//! runs against. It is produced by the data-access layer (or read from a
//! file by the CLI) and never mutated by the analytics code.
//!
//! Records are decoded one at a time. A record that cannot be read (an
//! unknown transaction type, a goal without a name) is skipped and counted
//! rather than failing the whole snapshot, and a record without an `id` is
//! given one derived from its collection and position.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::file_io::read_document;
use crate::error::BudgetwiseResult;
use crate::models::{BudgetDefinition, Category, Goal, RawId, Transaction};

/// Immutable input to one dashboard computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSnapshot")]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,

    pub categories: Vec<Category>,

    pub budgets: Vec<BudgetDefinition>,

    pub goals: Vec<Goal>,

    /// Records dropped while decoding
    #[serde(skip_serializing)]
    pub skipped_records: usize,
}

/// Undecoded collections as they appear on disk
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSnapshot {
    transactions: Vec<Value>,
    categories: Vec<Value>,
    budgets: Vec<Value>,
    goals: Vec<Value>,
}

impl From<RawSnapshot> for Snapshot {
    fn from(raw: RawSnapshot) -> Self {
        let mut skipped = 0;
        let transactions = decode_records("transaction", raw.transactions, &mut skipped);
        let categories = decode_records("category", raw.categories, &mut skipped);
        let budgets = decode_records("budget", raw.budgets, &mut skipped);
        let goals = decode_records("goal", raw.goals, &mut skipped);

        Self {
            transactions,
            categories,
            budgets,
            goals,
            skipped_records: skipped,
        }
    }
}

fn decode_records<T: DeserializeOwned>(
    kind: &'static str,
    values: Vec<Value>,
    skipped: &mut usize,
) -> Vec<T> {
    let mut records = Vec::with_capacity(values.len());

    for (index, mut value) in values.into_iter().enumerate() {
        if let Value::Object(fields) = &mut value {
            if fields.get("id").map_or(true, Value::is_null) {
                let id = RawId::derived(&format!("{}/{}", kind, index));
                fields.insert("id".to_string(), Value::String(id.key()));
            }
        }

        match serde_json::from_value(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!(kind, index, error = %e, "Skipping unreadable record");
                *skipped += 1;
            }
        }
    }

    records
}

impl Snapshot {
    /// Create a snapshot from transactions and categories only
    pub fn new(transactions: Vec<Transaction>, categories: Vec<Category>) -> Self {
        Self {
            transactions,
            categories,
            budgets: Vec::new(),
            goals: Vec::new(),
            skipped_records: 0,
        }
    }

    /// Load a snapshot from a JSON or YAML file
    pub fn load(path: impl AsRef<Path>) -> BudgetwiseResult<Self> {
        let path = path.as_ref();
        let snapshot: Snapshot = read_document(path)?;

        info!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            categories = snapshot.categories.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            "Loaded snapshot"
        );

        if snapshot.skipped_records > 0 {
            warn!(
                skipped = snapshot.skipped_records,
                "Some records could not be read and were skipped"
            );
        }

        let undated = snapshot.undated_count();
        if undated > 0 {
            warn!(
                undated,
                "Some transactions have no usable date and will be left out of time-based views"
            );
        }

        Ok(snapshot)
    }

    /// Budgets to evaluate: explicit ones, or ones synthesized from category limits
    pub fn effective_budgets(&self) -> Vec<BudgetDefinition> {
        if self.budgets.is_empty() {
            BudgetDefinition::from_category_limits(&self.categories)
        } else {
            self.budgets.clone()
        }
    }

    /// Number of transactions without a usable date
    pub fn undated_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.date.is_none()).count()
    }
}
