//! Expense CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::{format_alerts, format_expense_added, format_expense_list};
use crate::error::TrackerResult;
use crate::models::dates::parse_datetime;
use crate::services::ExpenseTracker;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (e.g., Food, Transportation, Shopping)
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date and time (YYYY-MM-DD HH:MM:SS or YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// List recorded expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.as_deref().map(parse_datetime).transpose()?;

            let expense = match date {
                Some(date) => tracker.add_expense_at(amount, category, description, date),
                None => tracker.add_expense(amount, category, description),
            };
            println!("{}", format_expense_added(expense, symbol));
            let category = expense.category().to_string();

            tracker.save()?;

            let alerts: Vec<_> = tracker
                .check_alerts()
                .into_iter()
                .filter(|a| a.category == category)
                .collect();
            if !alerts.is_empty() {
                print!("{}", format_alerts(&alerts, symbol));
            }
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(tracker.ledger().expenses(), symbol));
        }
    }

    Ok(())
}
