//! Achievements
//!
//! Milestones earned from the snapshot: how many transactions were
//! recorded, how many savings goals were reached, how many dated budgets
//! were kept within their limit and how long the current run of days with
//! activity is. Nothing is stored; every run recomputes which milestones are
//! unlocked from the snapshot and the reference date.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::budget_progress::spent_within;
use crate::models::{BudgetDefinition, Goal, Transaction};

/// What an achievement counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementKind {
    TransactionCount,
    SavingsGoalCompleted,
    BudgetAdherence,
    Streak,
}

/// A milestone definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    /// Icon name for the presentation layer
    pub icon: &'static str,
    pub kind: AchievementKind,
    pub threshold: u64,
}

/// Milestones every user can earn
pub const CATALOG: &[Achievement] = &[
    Achievement {
        name: "First Steps",
        description: "Create your first transaction",
        icon: "Footprints",
        kind: AchievementKind::TransactionCount,
        threshold: 1,
    },
    Achievement {
        name: "Regular Saver",
        description: "Create 10 transactions",
        icon: "Coins",
        kind: AchievementKind::TransactionCount,
        threshold: 10,
    },
    Achievement {
        name: "Budget Master",
        description: "Create 50 transactions",
        icon: "Trophy",
        kind: AchievementKind::TransactionCount,
        threshold: 50,
    },
    Achievement {
        name: "Century Club",
        description: "Create 100 transactions",
        icon: "Crown",
        kind: AchievementKind::TransactionCount,
        threshold: 100,
    },
];

/// Counters the catalog is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AchievementStats {
    pub transaction_count: u64,
    pub goals_completed: u64,
    /// Budgets with both dates set whose spending stayed within the limit
    pub budgets_kept: u64,
    /// Consecutive days with at least one transaction, ending on `now`
    pub streak_days: u64,
}

impl AchievementStats {
    pub fn measure(
        transactions: &[Transaction],
        budgets: &[BudgetDefinition],
        goals: &[Goal],
        now: NaiveDate,
    ) -> Self {
        Self {
            transaction_count: transactions.len() as u64,
            goals_completed: goals.iter().filter(|g| g.is_complete()).count() as u64,
            budgets_kept: budgets
                .iter()
                .filter(|b| b.start_date.is_some() && b.end_date.is_some())
                .filter(|b| spent_within(b, transactions, b.window(now)) <= b.amount_limit)
                .count() as u64,
            streak_days: activity_streak(transactions, now),
        }
    }

    pub fn value(&self, kind: AchievementKind) -> u64 {
        match kind {
            AchievementKind::TransactionCount => self.transaction_count,
            AchievementKind::SavingsGoalCompleted => self.goals_completed,
            AchievementKind::BudgetAdherence => self.budgets_kept,
            AchievementKind::Streak => self.streak_days,
        }
    }
}

/// Days in a row, counting back from `now`, that have a dated transaction
pub fn activity_streak(transactions: &[Transaction], now: NaiveDate) -> u64 {
    let days: BTreeSet<NaiveDate> = transactions.iter().filter_map(|t| t.date).collect();

    let mut streak = 0;
    let mut day = Some(now);
    while let Some(d) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = d.checked_sub_days(Days::new(1));
    }
    streak
}

/// Presentation-ready state of one achievement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub kind: AchievementKind,
    pub threshold: u64,
    /// Current count, capped at the threshold
    pub progress: u64,
    pub unlocked: bool,
}

/// Cards for `catalog`, in catalog order
pub fn evaluate(catalog: &[Achievement], stats: &AchievementStats) -> Vec<AchievementCard> {
    let cards: Vec<AchievementCard> = catalog
        .iter()
        .map(|achievement| {
            let value = stats.value(achievement.kind);
            AchievementCard {
                name: achievement.name.to_string(),
                description: achievement.description.to_string(),
                icon: achievement.icon.to_string(),
                kind: achievement.kind,
                threshold: achievement.threshold,
                progress: value.min(achievement.threshold),
                unlocked: value >= achievement.threshold,
            }
        })
        .collect();

    debug!(
        unlocked = cards.iter().filter(|c| c.unlocked).count(),
        total = cards.len(),
        "Evaluated achievements"
    );
    cards
}

/// Cards for the built-in catalog
pub fn achievement_cards(
    transactions: &[Transaction],
    budgets: &[BudgetDefinition],
    goals: &[Goal],
    now: NaiveDate,
) -> Vec<AchievementCard> {
    evaluate(CATALOG, &AchievementStats::measure(transactions, budgets, goals, now))
}
