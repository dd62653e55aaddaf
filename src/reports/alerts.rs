//! Budget threshold alerts
//!
//! Two checks exist: an "approaching the limit" ratio check and a plain
//! "over the limit" check. `check_budget_alerts` combines them into a single
//! graduated result with at most one alert per budgeted category.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::aggregation::spent_in_category;
use crate::models::{BudgetTable, Expense, Money};

/// Spending ratio at which a category counts as approaching its limit
pub const DEFAULT_NEAR_LIMIT_RATIO: f64 = 0.9;

/// Severity of a budget alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AlertLevel {
    /// Spending has reached the near-limit ratio of the budget
    NearLimit,
    /// Spending is strictly above the budget
    Exceeded,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NearLimit => write!(f, "Near limit"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// A budgeted category whose spending crossed a threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
    pub level: AlertLevel,
}

impl BudgetAlert {
    fn new(category: &str, spent: Money, limit: Money, level: AlertLevel) -> Self {
        Self {
            category: category.to_string(),
            spent,
            limit,
            level,
        }
    }

    /// Share of the limit already spent, `None` for a zero limit
    pub fn ratio(&self) -> Option<f64> {
        self.spent.ratio_of(self.limit)
    }

    /// Human readable one-line message
    pub fn message(&self) -> String {
        match self.level {
            AlertLevel::NearLimit => format!(
                "You are close to your {} budget: spent {} of {}",
                self.category, self.spent, self.limit
            ),
            AlertLevel::Exceeded => format!(
                "You have exceeded your {} budget: spent {} of {}",
                self.category, self.spent, self.limit
            ),
        }
    }
}

/// Ratio check; `None` when the limit is not positive and cannot be used as a divisor
fn reaches_ratio(spent: Money, limit: Money, ratio: f64) -> Option<bool> {
    if !limit.is_positive() {
        return None;
    }
    spent.ratio_of(limit).map(|r| r >= ratio)
}

/// Categories whose spending is at or above `ratio` of their limit
///
/// Categories with a zero or negative limit are skipped.
pub fn alerts_near_limit(
    expenses: &[Expense],
    budgets: &BudgetTable,
    ratio: f64,
) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter_map(|(category, limit)| {
            let spent = spent_in_category(expenses, category);
            match reaches_ratio(spent, limit, ratio) {
                Some(true) => Some(BudgetAlert::new(category, spent, limit, AlertLevel::NearLimit)),
                Some(false) => None,
                None => {
                    debug!(category, limit = %limit, "skipping ratio check for non-positive limit");
                    None
                }
            }
        })
        .collect()
}

/// Categories whose spending is strictly above their limit
pub fn alerts_exceeded(expenses: &[Expense], budgets: &BudgetTable) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter_map(|(category, limit)| {
            let spent = spent_in_category(expenses, category);
            (spent > limit)
                .then(|| BudgetAlert::new(category, spent, limit, AlertLevel::Exceeded))
        })
        .collect()
}

/// Graduated check: `Exceeded` wins over `NearLimit` for the same category
pub fn check_budget_alerts(
    expenses: &[Expense],
    budgets: &BudgetTable,
    ratio: f64,
) -> Vec<BudgetAlert> {
    budgets
        .iter()
        .filter_map(|(category, limit)| {
            let spent = spent_in_category(expenses, category);
            if spent > limit {
                Some(BudgetAlert::new(category, spent, limit, AlertLevel::Exceeded))
            } else if reaches_ratio(spent, limit, ratio) == Some(true) {
                Some(BudgetAlert::new(category, spent, limit, AlertLevel::NearLimit))
            } else {
                None
            }
        })
        .collect()
}
