//! Expense Tracker - personal expense tracking and budgeting
//!
//! This library provides the core of the expense tracker: an in-memory
//! ledger of expenses and savings goals, per-category monthly budgets, pure
//! aggregation and alert reports, rule-based savings tips and a JSON data
//! file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, goals, the ledger and the budget table
//! - `reports`: Breakdowns, totals, budget alerts and tips
//! - `storage`: JSON data file
//! - `services`: The `ExpenseTracker` facade
//! - `cli` / `display`: Command line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseTracker;
//!
//! let mut tracker = ExpenseTracker::open("expenses_data.json")?;
//! tracker.add_expense(Money::from_cents(1250), "Food", "Lunch");
//! tracker.set_monthly_budget("Food", Money::from_cents(30000));
//! tracker.save()?;
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
