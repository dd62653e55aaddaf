//! Savings goal display formatting

use chrono::NaiveDate;

use super::report::{format_bar, format_percentage};
use crate::models::dates::DATE_FORMAT;
use crate::models::Goal;

/// Format goals with a progress bar, remaining amount and deadline
pub fn format_goal_list(goals: &[Goal], currency_symbol: &str, today: NaiveDate) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n\nUse 'expense goal add <name> <target>' to create one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str("Savings Goals:\n");

    for goal in goals {
        let ratio = goal.progress_ratio().unwrap_or(0.0);
        let status = if goal.is_complete() {
            " (reached)".to_string()
        } else if goal.is_overdue(today) {
            " (overdue)".to_string()
        } else {
            String::new()
        };

        output.push_str(&format!("\n{}{}\n", goal.name, status));
        output.push_str(&format!(
            "  {} {}\n",
            format_bar(ratio, 1.0, 20),
            format_percentage(ratio * 100.0)
        ));
        output.push_str(&format!(
            "  Saved {} of {}, {} to go\n",
            goal.current_amount().format_with_symbol(currency_symbol),
            goal.target_amount.format_with_symbol(currency_symbol),
            goal.remaining().format_with_symbol(currency_symbol)
        ));
        if let Some(deadline) = goal.deadline {
            output.push_str(&format!("  Deadline: {}\n", deadline.format(DATE_FORMAT)));
        }
    }

    output
}

/// Confirmation printed after a contribution
pub fn format_contribution(goal: &Goal, currency_symbol: &str) -> String {
    format!(
        "Goal '{}': saved {} of {}",
        goal.name,
        goal.current_amount().format_with_symbol(currency_symbol),
        goal.target_amount.format_with_symbol(currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_format_goal_list() {
        let deadline = NaiveDate::from_ymd_opt(2024, 12, 31);
        let mut goal = Goal::new("Trip", Money::from_cents(50000), deadline);
        goal.contribute(Money::from_cents(12500)).unwrap();

        let output = format_goal_list(&[goal], "$", today());
        assert!(output.contains("Trip"));
        assert!(output.contains("25%"));
        assert!(output.contains("Saved $125.00 of $500.00, $375.00 to go"));
        assert!(output.contains("Deadline: 2024-12-31"));
    }

    #[test]
    fn test_overdue_and_reached_markers() {
        let overdue = Goal::new(
            "Late",
            Money::from_cents(100),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        let mut reached = Goal::new("Done", Money::from_cents(100), None);
        reached.contribute(Money::from_cents(100)).unwrap();

        let output = format_goal_list(&[overdue, reached], "$", today());
        assert!(output.contains("Late (overdue)"));
        assert!(output.contains("Done (reached)"));
    }

    #[test]
    fn test_format_contribution() {
        let mut goal = Goal::new("Trip", Money::from_cents(50000), None);
        goal.contribute(Money::from_cents(2500)).unwrap();
        assert_eq!(
            format_contribution(&goal, "$"),
            "Goal 'Trip': saved $25.00 of $500.00"
        );
    }
}
