//! Core data models for Budgetwise
//!
//! This module contains the snapshot records handed to the analytics
//! engine: transactions, categories, budget definitions and savings goals,
//! plus the money and date-window types they are built on.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::BudgetDefinition;
pub use category::Category;
pub use goal::Goal;
pub use ids::{BudgetId, CategoryId, GoalId, RawId, TransactionId};
pub use money::Money;
pub use period::{DateWindow, WindowDays};
pub use transaction::{PaymentMethod, Transaction, TransactionType};
