//! Service layer for the expense tracker
//!
//! Services compose the models, reports and storage into the operations the
//! command line calls.

pub mod tracker;

pub use tracker::ExpenseTracker;
