//! Expense tracker service
//!
//! The single entry point front ends use: it owns the ledger and budget
//! table, stamps new expenses with the clock, answers report queries and
//! loads/saves the data file on request. Mutations are never persisted
//! implicitly; callers save when they choose to.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::TrackerResult;
use crate::models::{BudgetTable, Expense, Goal, Ledger, Money};
use crate::reports::{self, BudgetAlert, Breakdown, SpendingReport, TipMode};
use crate::storage::{self, LoadStatus};

/// Application facade over the ledger, budgets and reports
pub struct ExpenseTracker {
    ledger: Ledger,
    budgets: BudgetTable,
    clock: Box<dyn Clock>,
    path: PathBuf,
    near_limit_ratio: f64,
}

impl ExpenseTracker {
    /// Create an empty tracker bound to `path`, using the system clock
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Box::new(SystemClock))
    }

    /// Create an empty tracker with a custom clock
    pub fn with_clock(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: Ledger::new(),
            budgets: BudgetTable::new(),
            clock,
            path: path.into(),
            near_limit_ratio: reports::DEFAULT_NEAR_LIMIT_RATIO,
        }
    }

    /// Override the share of a budget at which near-limit alerts fire
    pub fn with_near_limit_ratio(mut self, ratio: f64) -> Self {
        self.near_limit_ratio = ratio;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    /// Default data file used by `save` and `load`
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn near_limit_ratio(&self) -> f64 {
        self.near_limit_ratio
    }

    /// Record an expense dated now
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> &Expense {
        let now = self.clock.now();
        self.add_expense_at(amount, category, description, now)
    }

    /// Record an expense with an explicit date
    pub fn add_expense_at(
        &mut self,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> &Expense {
        let expense = self.ledger.add_expense(amount, category, description, date);
        debug!(
            amount = %expense.amount(),
            category = expense.category(),
            date = %expense.formatted_date(),
            "added expense"
        );
        expense
    }

    /// Set the monthly limit for a category
    pub fn set_monthly_budget(&mut self, category: impl Into<String>, amount: Money) {
        let category = category.into();
        let previous = self.budgets.set_budget(category.clone(), amount);
        debug!(
            category = %category,
            amount = %amount,
            replaced = previous.is_some(),
            "set monthly budget"
        );
    }

    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> &Goal {
        let goal = self.ledger.add_goal(name, target_amount, deadline);
        debug!(name = %goal.name, target = %goal.target_amount, "added goal");
        goal
    }

    /// Contribute to the first goal named `name`
    ///
    /// # Errors
    ///
    /// Returns a not-found error, without changing any goal, if no goal has that name.
    pub fn contribute_to_goal(&mut self, name: &str, amount: Money) -> TrackerResult<&Goal> {
        let goal = self.ledger.contribute_to_goal(name, amount)?;
        debug!(name, amount = %amount, saved = %goal.current_amount(), "contributed to goal");
        Ok(goal)
    }

    /// Spending per category in first-seen order
    pub fn breakdown(&self) -> Breakdown {
        reports::breakdown_by_category(self.ledger.expenses())
    }

    pub fn total_spent(&self) -> Money {
        reports::total_spent(self.ledger.expenses())
    }

    pub fn monthly_spent(&self, month: u32, year: i32) -> Money {
        reports::monthly_spent(self.ledger.expenses(), month, year)
    }

    /// Check whether total spending is strictly above `limit`
    pub fn over_limit(&self, limit: Money) -> bool {
        reports::over_limit(self.ledger.expenses(), limit)
    }

    /// Graduated alerts for every budgeted category
    pub fn check_alerts(&self) -> Vec<BudgetAlert> {
        reports::check_budget_alerts(self.ledger.expenses(), &self.budgets, self.near_limit_ratio)
    }

    pub fn alerts_near_limit(&self) -> Vec<BudgetAlert> {
        reports::alerts_near_limit(self.ledger.expenses(), &self.budgets, self.near_limit_ratio)
    }

    pub fn alerts_exceeded(&self) -> Vec<BudgetAlert> {
        reports::alerts_exceeded(self.ledger.expenses(), &self.budgets)
    }

    /// Personalized tips, or the generic list when nothing has been spent yet
    pub fn tips(&self) -> Vec<&'static str> {
        let mode = if self.ledger.has_no_expenses() {
            TipMode::Generic
        } else {
            TipMode::Personalized
        };
        reports::tips_for(mode, &self.breakdown())
    }

    pub fn generic_tips(&self) -> Vec<&'static str> {
        reports::tips_for(TipMode::Generic, &self.breakdown())
    }

    pub fn spending_report(&self) -> SpendingReport {
        SpendingReport::generate(self.ledger.expenses())
    }

    /// Save to the tracker's data file
    pub fn save(&self) -> TrackerResult<()> {
        self.save_to(&self.path)
    }

    pub fn save_to(&self, path: &Path) -> TrackerResult<()> {
        storage::save_document(path, &self.ledger, &self.budgets)
    }

    /// Replace in-memory state with the tracker's data file
    pub fn load(&mut self) -> TrackerResult<LoadStatus> {
        let path = self.path.clone();
        self.load_from(&path)
    }

    /// Replace in-memory state with the document at `path`
    ///
    /// A missing file yields [`LoadStatus::StartingFresh`] with empty state.
    /// On error the current state is left untouched.
    pub fn load_from(&mut self, path: &Path) -> TrackerResult<LoadStatus> {
        let outcome = storage::load_document(path)?;
        let status = outcome.status();
        let (ledger, budgets) = outcome.into_parts();
        self.ledger = ledger;
        self.budgets = budgets;
        if status == LoadStatus::Loaded {
            info!(expenses = self.ledger.expense_count(), "tracker state loaded");
        }
        Ok(status)
    }

    /// Open the tracker stored at `path`, starting fresh if it doesn't exist
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let mut tracker = Self::new(path);
        tracker.load()?;
        Ok(tracker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::reports::AlertLevel;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn tracker(dir: &TempDir) -> ExpenseTracker {
        ExpenseTracker::with_clock(
            dir.path().join("expenses_data.json"),
            Box::new(FixedClock(at(2024, 1, 15))),
        )
    }

    #[test]
    fn test_add_expense_uses_clock() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);

        let expense = tracker.add_expense(Money::from_cents(1250), "Food", "Lunch");
        assert_eq!(expense.formatted_date(), "2024-01-15 14:05:09");
        assert_eq!(tracker.ledger().expense_count(), 1);
    }

    #[test]
    fn test_monthly_spent() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.add_expense_at(Money::from_cents(5000), "Food", "", at(2024, 1, 15));
        tracker.add_expense_at(Money::from_cents(3000), "Food", "", at(2024, 2, 1));

        assert_eq!(tracker.monthly_spent(1, 2024).cents(), 5000);
        assert_eq!(tracker.monthly_spent(2, 2024).cents(), 3000);
        assert_eq!(tracker.total_spent().cents(), 8000);
    }

    #[test]
    fn test_over_limit() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.add_expense(Money::from_cents(15000), "Shopping", "Shoes");

        assert!(!tracker.over_limit(Money::from_cents(15000)));
        assert!(tracker.over_limit(Money::from_cents(14999)));
    }

    #[test]
    fn test_alerts_after_mutations() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.set_monthly_budget("Food", Money::from_cents(10000));

        tracker.add_expense(Money::from_cents(9500), "Food", "Groceries");
        let alerts = tracker.check_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::NearLimit);
        assert!(tracker.alerts_exceeded().is_empty());

        tracker.add_expense(Money::from_cents(600), "Food", "Snacks");
        let alerts = tracker.check_alerts();
        assert_eq!(alerts[0].level, AlertLevel::Exceeded);
        assert_eq!(tracker.alerts_exceeded().len(), 1);
        assert_eq!(tracker.alerts_near_limit().len(), 1);
    }

    #[test]
    fn test_custom_near_limit_ratio() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir).with_near_limit_ratio(0.5);
        tracker.set_monthly_budget("Food", Money::from_cents(10000));
        tracker.add_expense(Money::from_cents(5000), "Food", "");

        assert_eq!(tracker.check_alerts()[0].level, AlertLevel::NearLimit);
    }

    #[test]
    fn test_tips_fall_back_to_generic() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        assert_eq!(tracker.tips().len(), 6);

        tracker.add_expense(Money::from_cents(4000), "Food", "");
        tracker.add_expense(Money::from_cents(6000), "Transportation", "");
        assert_eq!(tracker.tips().len(), 2);
        assert_eq!(tracker.generic_tips().len(), 6);
    }

    #[test]
    fn test_contribute_to_unknown_goal() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.add_goal("Trip", Money::from_cents(50000), None);

        let err = tracker
            .contribute_to_goal("Car", Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tracker.ledger().goals()[0].current_amount(), Money::zero());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.add_expense(Money::from_cents(1250), "Food", "Lunch");
        tracker.set_monthly_budget("Food", Money::from_cents(10000));
        let deadline = NaiveDate::from_ymd_opt(2024, 12, 31);
        tracker.add_goal("Trip", Money::from_cents(50000), deadline);
        tracker
            .contribute_to_goal("Trip", Money::from_cents(2500))
            .unwrap();
        tracker.save().unwrap();

        let mut reloaded = ExpenseTracker::new(tracker.path());
        assert_eq!(reloaded.load().unwrap(), LoadStatus::Loaded);
        assert_eq!(reloaded.ledger(), tracker.ledger());
        assert_eq!(reloaded.budgets(), tracker.budgets());
    }

    #[test]
    fn test_load_missing_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let tracker = ExpenseTracker::open(dir.path().join("none.json")).unwrap();
        assert!(tracker.ledger().has_no_expenses());
        assert!(tracker.budgets().is_empty());

        let mut tracker = tracker;
        tracker.add_expense(Money::from_cents(100), "Food", "");
        assert_eq!(tracker.load().unwrap(), LoadStatus::StartingFresh);
        assert!(tracker.ledger().has_no_expenses());
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker(&dir);
        tracker.add_expense(Money::from_cents(100), "Food", "");

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"expenses": "nope"}"#).unwrap();

        assert!(tracker.load_from(&bad).unwrap_err().is_malformed());
        assert_eq!(tracker.ledger().expense_count(), 1);
    }
}
