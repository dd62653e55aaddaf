//! Expense display formatting

use crate::models::Expense;

/// Format expenses as a table in recorded order
pub fn format_expense_list(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n\nUse 'expense add <amount> <category>' to record one.\n"
            .to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<width$}  {:>12}  {}\n",
        "Date",
        "Category",
        "Amount",
        "Description",
        width = category_width
    ));
    output.push_str(&"-".repeat(19 + category_width + 12 + 6 + 11));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<19}  {:<width$}  {:>12}  {}\n",
            expense.formatted_date(),
            expense.category(),
            expense.amount().format_with_symbol(currency_symbol),
            expense.description(),
            width = category_width
        ));
    }

    output
}

/// Confirmation printed after recording an expense
pub fn format_expense_added(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "Added expense of {} to {} on {}",
        expense.amount().format_with_symbol(currency_symbol),
        expense.category(),
        expense.formatted_date()
    )
}
