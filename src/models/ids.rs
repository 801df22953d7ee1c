//! Record identifiers
//!
//! The backend numbers its records while other producers use UUIDs, so an
//! identifier holds either. Any other string is hashed into a name-based
//! UUID, which keeps equal strings resolving to the same record across runs.
//! Typed wrappers stop a category ID from being compared with a goal ID.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const ID_NAMESPACE: Uuid = Uuid::from_u128(0x5f0c_2a6e_8d41_4c7b_9b3e_1f6a_0d2c_7e91);

/// The value behind a record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RawId {
    Number(i64),
    Uuid(Uuid),
}

impl RawId {
    /// Name-based identifier; the same name always yields the same ID
    pub fn derived(name: &str) -> Self {
        Self::Uuid(Uuid::new_v5(&ID_NAMESPACE, name.as_bytes()))
    }

    /// Read a textual identifier: an integer, a UUID, or an opaque name
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if let Ok(n) = text.parse::<i64>() {
            return Self::Number(n);
        }
        match Uuid::parse_str(text) {
            Ok(uuid) => Self::Uuid(uuid),
            Err(_) => Self::derived(text),
        }
    }

    /// Full form, suitable as a lookup key
    pub fn key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Uuid(uuid) => uuid.to_string(),
        }
    }

    fn short(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Uuid(uuid) => uuid.simple().to_string()[..8].to_string(),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl Serialize for RawId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::Uuid(uuid) => serializer.collect_str(uuid),
        }
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => Ok(n
                .as_i64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::from_text(&n.to_string()))),
            serde_json::Value::String(s) if !s.trim().is_empty() => Ok(Self::from_text(&s)),
            other => Err(D::Error::custom(format!(
                "expected a numeric or string id, found {}",
                other
            ))),
        }
    }
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(RawId::Uuid(Uuid::new_v4()))
            }

            /// Stable ID for a record that arrived without one
            pub fn derived(name: &str) -> Self {
                Self(RawId::derived(&format!("{}{}", $prefix, name)))
            }

            pub fn raw(&self) -> RawId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0.short())
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(RawId::Number(n))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(RawId::Uuid(uuid))
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Ok(Self(RawId::from_text(s)))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");
define_id!(BudgetId, "bgt-");
define_id!(GoalId, "goal-");
