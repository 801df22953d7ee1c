//! Category model
//!
//! Categories label expense transactions and may carry a default monthly
//! budget limit, from which budget definitions can be synthesized.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A spending category (e.g. "Groceries")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Emoji or icon name shown next to the category
    #[serde(default, alias = "emoji")]
    pub icon: String,

    /// Optional display color (hex code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Default monthly budget limit for this category
    #[serde(default, alias = "defaultLimit", skip_serializing_if = "Option::is_none")]
    pub default_limit: Option<Money>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: String::new(),
            color: None,
            default_limit: None,
        }
    }

    /// Builder-style icon setter
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Builder-style default limit setter
    pub fn with_default_limit(mut self, limit: Money) -> Self {
        self.default_limit = Some(limit);
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

/// Find a category by ID
pub fn find_category(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}
