//! In-memory ledger of expenses and savings goals
//!
//! Insertion order is preserved and is the order every report iterates in.

use chrono::{NaiveDate, NaiveDateTime};

use super::expense::Expense;
use super::goal::Goal;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Owner of all expense and goal records for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously stored records
    pub fn from_parts(expenses: Vec<Expense>, goals: Vec<Goal>) -> Self {
        Self { expenses, goals }
    }

    /// Record a new expense
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> &Expense {
        self.expenses
            .push(Expense::new(amount, category, description, date));
        &self.expenses[self.expenses.len() - 1]
    }

    /// Create a savings goal
    ///
    /// Duplicate names are accepted; contributions go to the first goal with
    /// a matching name.
    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> &Goal {
        self.goals.push(Goal::new(name, target_amount, deadline));
        &self.goals[self.goals.len() - 1]
    }

    /// Add `amount` to the first goal named exactly `name`
    ///
    /// Fails with a validation error for zero or negative amounts and with
    /// `NotFound` for an unknown name; nothing changes in either case.
    pub fn contribute_to_goal(&mut self, name: &str, amount: Money) -> TrackerResult<&Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| TrackerError::goal_not_found(name))?;

        goal.contribute(amount)?;
        Ok(&*goal)
    }

    pub fn find_goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Check if no expenses have been recorded
    pub fn has_no_expenses(&self) -> bool {
        self.expenses.is_empty()
    }
}
