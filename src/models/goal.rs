//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;
use crate::error::{BudgetwiseError, BudgetwiseResult};

/// A savings target funded by contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub name: String,

    #[serde(default, alias = "targetAmount")]
    pub target_amount: Money,

    /// Saved so far; only ever grows through [`Goal::contribute`]
    #[serde(default, alias = "currentAmount")]
    pub current_amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
        }
    }

    /// Add a contribution towards the goal
    ///
    /// Negative contributions are rejected so the saved amount never decreases.
    pub fn contribute(&mut self, amount: Money) -> BudgetwiseResult<()> {
        if amount.is_negative() {
            return Err(BudgetwiseError::Validation(format!(
                "Contribution to '{}' must not be negative: {}",
                self.name, amount
            )));
        }
        self.current_amount += amount;
        Ok(())
    }

    /// Progress towards the target, clamped to 0..=100
    pub fn progress_percent(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        self.current_amount
            .percent_of(self.target_amount)
            .clamp(0.0, 100.0)
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        (self.target_amount - self.current_amount).non_negative()
    }

    pub fn is_complete(&self) -> bool {
        self.target_amount.is_positive() && self.current_amount >= self.target_amount
    }
}
