//! Savings goal progress cards

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Goal, GoalId, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCard {
    pub goal_id: GoalId,
    pub name: String,
    pub target: Money,
    pub current: Money,
    pub remaining: Money,
    /// Progress towards the target, 0..=100
    pub progress: f64,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl From<&Goal> for GoalCard {
    fn from(goal: &Goal) -> Self {
        Self {
            goal_id: goal.id,
            name: goal.name.clone(),
            target: goal.target_amount,
            current: goal.current_amount,
            remaining: goal.remaining(),
            progress: goal.progress_percent(),
            complete: goal.is_complete(),
            deadline: goal.deadline,
        }
    }
}

/// One card per goal, in snapshot order
pub fn goal_cards(goals: &[Goal]) -> Vec<GoalCard> {
    goals.iter().map(GoalCard::from).collect()
}
