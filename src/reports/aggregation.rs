//! Spending aggregation over a slice of expenses
//!
//! All functions here are pure: they read expenses and never mutate them.

use indexmap::IndexMap;

use crate::models::{Expense, Money};

/// Category totals in the order each category was first seen
pub type Breakdown = IndexMap<String, Money>;

/// Sum expense amounts per category
///
/// Categories without expenses never appear in the result.
pub fn breakdown_by_category(expenses: &[Expense]) -> Breakdown {
    let mut breakdown = Breakdown::new();
    for expense in expenses {
        *breakdown
            .entry(expense.category().to_string())
            .or_insert_with(Money::zero) += expense.amount();
    }
    breakdown
}

/// Sum of every expense amount
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(Expense::amount).sum()
}

/// Sum of amounts recorded in one category
pub fn spent_in_category(expenses: &[Expense], category: &str) -> Money {
    expenses
        .iter()
        .filter(|e| e.category() == category)
        .map(Expense::amount)
        .sum()
}

/// Sum of amounts whose date falls in `month` (1-12) of `year`
pub fn monthly_spent(expenses: &[Expense], month: u32, year: i32) -> Money {
    expenses
        .iter()
        .filter(|e| e.is_in_month(month, year))
        .map(Expense::amount)
        .sum()
}

/// Check whether total spending is strictly above `limit`
pub fn over_limit(expenses: &[Expense], limit: Money) -> bool {
    total_spent(expenses) > limit
}
