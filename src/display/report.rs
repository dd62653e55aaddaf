//! Report formatting utilities for terminal output
//!
//! Formats budgets, alerts and tips.

use crate::models::BudgetTable;
use crate::reports::{AlertLevel, BudgetAlert};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the monthly budget table
pub fn format_budget_list(budgets: &BudgetTable, currency_symbol: &str) -> String {
    if budgets.is_empty() {
        return "No monthly budgets set.\n\nUse 'expense budget set <category> <amount>' to add one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str("Monthly Budgets:\n");
    output.push_str(&format!("{:<30} {:>12}\n", "Category", "Limit"));
    output.push_str(&"-".repeat(43));
    output.push('\n');

    for (category, limit) in budgets.iter() {
        output.push_str(&format!(
            "{:<30} {:>12}\n",
            category,
            limit.format_with_symbol(currency_symbol)
        ));
    }

    output
}

/// Format budget alerts, one per line
pub fn format_alerts(alerts: &[BudgetAlert], currency_symbol: &str) -> String {
    if alerts.is_empty() {
        return "All categories are within budget.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        let marker = match alert.level {
            AlertLevel::NearLimit => "!",
            AlertLevel::Exceeded => "!!",
        };
        let usage = alert
            .ratio()
            .map(|r| format!(" ({})", format_percentage(r * 100.0)))
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<2} {:<11} {}: spent {} of {}{}\n",
            marker,
            alert.level.to_string(),
            alert.category,
            alert.spent.format_with_symbol(currency_symbol),
            alert.limit.format_with_symbol(currency_symbol),
            usage
        ));
    }

    output
}

/// Format tips as a bulleted list under a heading
pub fn format_tips(heading: &str, tips: &[&str]) -> String {
    let mut output = format!("{}\n", heading);
    if tips.is_empty() {
        output.push_str("- Your spending looks balanced. Keep it up!\n");
    }
    for tip in tips {
        output.push_str(&format!("- {}\n", tip));
    }
    output
}
