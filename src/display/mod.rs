//! Display formatting for terminal output
//!
//! Turns models and report results into text; nothing here touches the
//! ledger or the data file.

pub mod expense;
pub mod goal;
pub mod report;

pub use expense::{format_expense_added, format_expense_list};
pub use goal::{format_contribution, format_goal_list};
pub use report::{format_alerts, format_budget_list, format_tips};
