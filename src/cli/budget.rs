//! Budget CLI commands
//!
//! Sets and lists monthly category budgets.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::TrackerResult;
use crate::services::ExpenseTracker;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List monthly budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            tracker.set_monthly_budget(category.clone(), amount);
            tracker.save()?;

            println!(
                "Monthly budget for {}: {}",
                category,
                amount.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(tracker.budgets(), symbol));
        }
    }

    Ok(())
}
