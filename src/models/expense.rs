//! Expense model
//!
//! A single recorded spending transaction. Expenses are never edited once
//! recorded, so fields are only exposed through accessors.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::dates::{self, DATETIME_FORMAT};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    amount: Money,
    category: String,
    description: String,
    #[serde(with = "dates::datetime_format")]
    date: NaiveDateTime,
}

impl Expense {
    /// Create a new expense
    ///
    /// Neither the sign of `amount` nor the category text is validated here;
    /// front ends check input before calling.
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            // Stored at second precision to match the data file
            date: date.with_nanosecond(0).unwrap_or(date),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Check whether the expense falls in the given calendar month
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }

    /// Timestamp formatted as stored on disk
    pub fn formatted_date(&self) -> String {
        self.date.format(DATETIME_FORMAT).to_string()
    }
}
