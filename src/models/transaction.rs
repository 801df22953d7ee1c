//! Transaction model
//!
//! Transactions arrive from the data-access layer and are read-only to the
//! analytics engine. Deserialization is tolerant: a missing or malformed
//! amount becomes zero, a missing or unrecognized payment method becomes
//! [`PaymentMethod::Other`], and an unparsable date becomes `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::{deserialize_magnitude, Money};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// How a transaction was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    DigitalWallet,
    BankTransfer,
    #[default]
    Other,
}

impl PaymentMethod {
    /// Parse a payment method leniently
    ///
    /// Case, surrounding whitespace and space/hyphen separators are ignored
    /// ("credit card", "Credit-Card" and "CREDIT_CARD" all match). Anything
    /// unrecognized is [`PaymentMethod::Other`].
    pub fn parse_lenient(s: &str) -> Self {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "CASH" => Self::Cash,
            "CREDIT_CARD" => Self::CreditCard,
            "DEBIT_CARD" => Self::DebitCard,
            "DIGITAL_WALLET" => Self::DigitalWallet,
            "BANK_TRANSFER" => Self::BankTransfer,
            _ => Self::Other,
        }
    }

    /// Human-readable label used as the breakdown slice name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::DigitalWallet => "Digital Wallet",
            Self::BankTransfer => "Bank Transfer",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(s)) => Self::parse_lenient(&s),
            _ => Self::Other,
        })
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-form description shown in activity lists
    #[serde(default)]
    pub description: String,

    /// Non-negative amount; direction comes from `kind`
    #[serde(default, deserialize_with = "deserialize_magnitude")]
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Calendar date; `None` when missing or unparsable
    #[serde(
        default,
        alias = "transaction_date",
        alias = "transactionDate",
        deserialize_with = "deserialize_lenient_date"
    )]
    pub date: Option<NaiveDate>,

    /// Weak reference to a category; may point at a category that no longer exists
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<CategoryId>,

    #[serde(default, alias = "paymentMethod")]
    pub payment_method: PaymentMethod,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(kind: TransactionType, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: TransactionId::new(),
            description: String::new(),
            amount: amount.abs(),
            kind,
            date: Some(date),
            category_id: None,
            payment_method: PaymentMethod::default(),
        }
    }

    /// Create an income transaction
    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Income, amount, date)
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, date: NaiveDate) -> Self {
        Self::new(TransactionType::Expense, amount, date)
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Builder-style payment method setter
    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Check if this transaction is dated within `[start, end]`
    ///
    /// Undated transactions are never in range.
    pub fn is_dated_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date.is_some_and(|date| date >= start && date <= end)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        let sign = if self.is_income() { "+" } else { "-" };
        write!(f, "{} {} {}{}", date, self.description, sign, self.amount)
    }
}

/// Parse a snapshot date, tolerating ISO datetimes and garbage
///
/// Accepts `YYYY-MM-DD` and any string that starts with one (such as
/// `2025-01-15T09:30:00`). Everything else becomes `None`.
pub fn parse_lenient_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let prefix = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub(crate) fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => parse_lenient_date(&s),
        _ => None,
    })
}
