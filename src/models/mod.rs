//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! amounts, expenses, savings goals, the ledger that owns them and the
//! monthly budget table.

pub mod budget;
pub mod dates;
pub mod expense;
pub mod goal;
pub mod ledger;
pub mod money;

pub use budget::BudgetTable;
pub use expense::Expense;
pub use goal::Goal;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
