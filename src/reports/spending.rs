//! Spending Report
//!
//! Generates the per-category spending breakdown with each category's share
//! of total spending.

use crate::models::{Expense, Money};

use super::aggregation::{breakdown_by_category, total_spent};

/// Spending for one category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    /// Category name
    pub category: String,
    /// Total spending
    pub total_spending: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories in the order they were first recorded
    pub categories: Vec<SpendingByCategory>,
    /// Total spending across all categories
    pub total_spending: Money,
    /// Total expense count
    pub total_expenses: usize,
}

impl SpendingReport {
    /// Generate a spending report over the given expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let total_spending = total_spent(expenses);

        let categories = breakdown_by_category(expenses)
            .into_iter()
            .map(|(category, spending)| {
                let expense_count = expenses
                    .iter()
                    .filter(|e| e.category() == category)
                    .count();
                let percentage = if total_spending.is_zero() {
                    0.0
                } else {
                    (spending.cents() as f64 / total_spending.cents() as f64) * 100.0
                };

                SpendingByCategory {
                    category,
                    total_spending: spending,
                    expense_count,
                    percentage,
                }
            })
            .collect();

        Self {
            categories,
            total_spending,
            total_expenses: expenses.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded yet.\n".to_string();
        }

        let mut output = String::new();

        output.push_str("Spending Breakdown\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>7} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>7} {:>7.1}%\n",
                category.category,
                category.total_spending.format_with_symbol(currency_symbol),
                category.expense_count,
                category.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>7}\n",
            "TOTAL SPENDING",
            self.total_spending.format_with_symbol(currency_symbol),
            self.total_expenses
        ));

        output
    }

    /// Get top spending categories, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<&SpendingByCategory> {
        let mut all_categories: Vec<_> = self.categories.iter().collect();
        all_categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));
        all_categories.into_iter().take(limit).collect()
    }
}
