//! Calendar date windows
//!
//! A [`DateWindow`] is an inclusive range of calendar days. Dashboards use
//! trailing windows ending on the reference date, budgets default to the
//! calendar month containing it, and trend comparison walks back to the
//! immediately preceding window of the same length.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetwiseError;

/// Supported dashboard window lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum WindowDays {
    /// One week, labelled by weekday
    #[default]
    Seven,
    /// Thirty days, labelled "M/D"
    Thirty,
}

impl WindowDays {
    /// Number of calendar days in the window
    pub const fn days(self) -> u32 {
        match self {
            Self::Seven => 7,
            Self::Thirty => 30,
        }
    }
}

impl TryFrom<u32> for WindowDays {
    type Error = BudgetwiseError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::Seven),
            30 => Ok(Self::Thirty),
            other => Err(BudgetwiseError::Validation(format!(
                "Unsupported window length: {} days (expected 7 or 30)",
                other
            ))),
        }
    }
}

impl From<WindowDays> for u32 {
    fn from(window: WindowDays) -> Self {
        window.days()
    }
}

impl fmt::Display for WindowDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window; bounds are swapped if given in reverse order
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The `days` calendar days ending on (and including) `end`
    ///
    /// A length of zero is treated as one day.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end - Duration::days(span),
            end,
        }
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = first_of_month(date);
        let end = start
            .checked_add_months(Months::new(1))
            .map(|next| next - Duration::days(1))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    /// `count` whole calendar months ending with the month containing `date`
    pub fn trailing_months(date: NaiveDate, count: u32) -> Self {
        let current = Self::month_of(date);
        let start = current
            .start
            .checked_sub_months(Months::new(count.max(1) - 1))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start,
            end: current.end,
        }
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Check if a date falls within this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The window of equal length that ends the day before this one starts
    pub fn previous(&self) -> Self {
        let length = self.days();
        let end = self.start - Duration::days(1);
        Self {
            start: end - Duration::days(length - 1),
            end,
        }
    }

    /// Iterate over every day in the window, in order
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
