//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the tracker service. Input is validated here;
//! the service never sees unparsed text.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Parse a user-entered amount such as "12.50" or "$12.50"
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Validation(format!("Invalid amount: {}", e)))
}
