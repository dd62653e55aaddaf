//! Savings goal CLI commands

use chrono::Local;
use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::{format_contribution, format_goal_list};
use crate::error::TrackerResult;
use crate::models::dates::parse_date;
use crate::services::ExpenseTracker;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Add money to a goal
    Contribute {
        /// Goal name (exact match)
        name: String,
        /// Amount to add (must be positive)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List savings goals and their progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let deadline = deadline.as_deref().map(parse_date).transpose()?;

            let goal = tracker.add_goal(name, target, deadline);
            println!(
                "Created goal '{}' with target {}",
                goal.name,
                goal.target_amount.format_with_symbol(symbol)
            );
            tracker.save()?;
        }

        GoalCommands::Contribute { name, amount } => {
            let amount = parse_amount(&amount)?;
            let goal = tracker.contribute_to_goal(&name, amount)?;
            println!("{}", format_contribution(goal, symbol));
            tracker.save()?;
        }

        GoalCommands::List => {
            let today = Local::now().date_naive();
            print!("{}", format_goal_list(tracker.ledger().goals(), symbol, today));
        }
    }

    Ok(())
}
