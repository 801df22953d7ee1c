//! Reports module for Budgetwise
//!
//! The analytics engine: pure calculators over a snapshot (bucketing,
//! breakdowns, trends, budget progress, achievements) and the dashboard
//! assembler that composes them.

pub mod achievements;
pub mod breakdown;
pub mod buckets;
pub mod budget_progress;
pub mod dashboard;
pub mod goals;
pub mod summary;
pub mod trend;

pub use achievements::{AchievementCard, AchievementKind, AchievementStats};
pub use breakdown::{Breakdown, CategorySlice, GroupKey};
pub use buckets::{Bucket, Granularity};
pub use budget_progress::{BudgetCard, BudgetStatus};
pub use dashboard::{DashboardParams, DashboardReport};
pub use goals::GoalCard;
pub use summary::{RecentTransaction, Summary};
pub use trend::{TrendDirection, TrendResult, Trends};
