//! Savings goal model
//!
//! A goal is a target amount that accumulates contributions over time. Goals
//! are independent of expense categories and budgets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A savings goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Name used to look the goal up when contributing
    pub name: String,

    /// Amount the user wants to save
    pub target_amount: Money,

    /// Amount saved so far; only ever increased through `contribute`
    #[serde(default)]
    current_amount: Money,

    /// Optional date by which the target should be reached
    #[serde(
        default,
        with = "dates::optional_date_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, deadline: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
        }
    }

    pub fn current_amount(&self) -> Money {
        self.current_amount
    }

    /// Add a contribution to the amount saved
    ///
    /// Only positive amounts are accepted; the saved amount never goes down.
    pub fn contribute(&mut self, amount: Money) -> TrackerResult<()> {
        if !amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Contribution must be positive, got {}",
                amount
            )));
        }
        self.current_amount += amount;
        Ok(())
    }

    /// Amount still missing to reach the target (never negative)
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Fraction of the target saved so far, `None` when the target is not positive
    pub fn progress_ratio(&self) -> Option<f64> {
        if !self.target_amount.is_positive() {
            return None;
        }
        self.current_amount.ratio_of(self.target_amount)
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Check whether the deadline has passed without reaching the target
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.deadline {
            Some(deadline) => today > deadline && !self.is_complete(),
            None => false,
        }
    }
}
