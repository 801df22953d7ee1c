//! Budget definition model
//!
//! A budget caps expense spending over a date window, either for a single
//! category or across all categories. Dates are optional and default to the
//! calendar month containing the reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::period::DateWindow;
use super::transaction::deserialize_lenient_date;

/// A spending limit over a date window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDefinition {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget applies to; `None` applies across all categories
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<CategoryId>,

    /// Spending limit for the window; zero or negative means nothing may be spent
    #[serde(default, alias = "amount", alias = "amountLimit")]
    pub amount_limit: Money,

    #[serde(
        default,
        alias = "startDate",
        deserialize_with = "deserialize_lenient_date"
    )]
    pub start_date: Option<NaiveDate>,

    #[serde(
        default,
        alias = "endDate",
        deserialize_with = "deserialize_lenient_date"
    )]
    pub end_date: Option<NaiveDate>,
}

impl BudgetDefinition {
    /// Create a budget for the default window (the current calendar month)
    pub fn new(category_id: Option<CategoryId>, amount_limit: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            amount_limit,
            start_date: None,
            end_date: None,
        }
    }

    /// Builder-style window setter
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Resolve the effective window against a reference date
    ///
    /// Missing bounds fall back to the first/last day of the month that
    /// contains `now`.
    pub fn window(&self, now: NaiveDate) -> DateWindow {
        let month = DateWindow::month_of(now);
        DateWindow::new(
            self.start_date.unwrap_or(month.start),
            self.end_date.unwrap_or(month.end),
        )
    }

    /// Synthesize one current-month budget per category that has a default limit
    ///
    /// The budget ID is derived from the category ID, so repeated calls over
    /// the same categories agree.
    pub fn from_category_limits(categories: &[Category]) -> Vec<Self> {
        categories
            .iter()
            .filter_map(|category| {
                category.default_limit.map(|limit| Self {
                    id: BudgetId::derived(&format!("category-limit/{}", category.id.raw().key())),
                    ..Self::new(Some(category.id), limit)
                })
            })
            .collect()
    }
}
