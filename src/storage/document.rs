//! The tracker's data document
//!
//! One JSON file holds everything:
//!
//! ```text
//! {
//!   "expenses": [{"amount": 12.5, "category": "Food", "description": "", "date": "2024-01-15 12:00:00"}],
//!   "monthly_budgets": {"Food": 100.0},
//!   "goals": [{"name": "Trip", "target_amount": 500.0, "current_amount": 50.0, "deadline": "2024-12-31"}]
//! }
//! ```
//!
//! `expenses` and `monthly_budgets` are required when reading; `goals` may be
//! absent in files written before goals were stored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::file_io::{read_json, write_json_atomic};
use crate::error::TrackerResult;
use crate::models::{BudgetTable, Expense, Goal, Ledger};

/// Default name of the data file
pub const DEFAULT_DATA_FILE: &str = "expenses_data.json";

#[derive(Debug, Deserialize)]
struct StoredDocument {
    expenses: Vec<Expense>,
    monthly_budgets: BudgetTable,
    #[serde(default)]
    goals: Vec<Goal>,
}

#[derive(Serialize)]
struct StoredDocumentRef<'a> {
    expenses: &'a [Expense],
    monthly_budgets: &'a BudgetTable,
    goals: &'a [Goal],
}

/// Result of reading the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and was parsed
    Loaded { ledger: Ledger, budgets: BudgetTable },
    /// No file yet; the caller starts from empty state
    StartingFresh,
}

/// Which way a load went, without the loaded records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    StartingFresh,
}

impl LoadOutcome {
    pub fn status(&self) -> LoadStatus {
        match self {
            Self::Loaded { .. } => LoadStatus::Loaded,
            Self::StartingFresh => LoadStatus::StartingFresh,
        }
    }

    /// Ledger and budgets, empty when starting fresh
    pub fn into_parts(self) -> (Ledger, BudgetTable) {
        match self {
            Self::Loaded { ledger, budgets } => (ledger, budgets),
            Self::StartingFresh => (Ledger::new(), BudgetTable::new()),
        }
    }
}

/// Write the full document, replacing the previous file
pub fn save_document(path: &Path, ledger: &Ledger, budgets: &BudgetTable) -> TrackerResult<()> {
    let document = StoredDocumentRef {
        expenses: ledger.expenses(),
        monthly_budgets: budgets,
        goals: ledger.goals(),
    };

    write_json_atomic(path, &document)?;

    debug!(
        path = %path.display(),
        expenses = ledger.expense_count(),
        goals = ledger.goals().len(),
        budgets = budgets.len(),
        "saved data file"
    );
    Ok(())
}

/// Read the document at `path`
///
/// A missing file is not an error: it yields [`LoadOutcome::StartingFresh`].
pub fn load_document(path: &Path) -> TrackerResult<LoadOutcome> {
    let Some(document) = read_json::<StoredDocument, _>(path)? else {
        info!(path = %path.display(), "No previous data found. Starting fresh.");
        return Ok(LoadOutcome::StartingFresh);
    };

    info!(
        path = %path.display(),
        expenses = document.expenses.len(),
        goals = document.goals.len(),
        budgets = document.monthly_budgets.len(),
        "loaded data file"
    );

    Ok(LoadOutcome::Loaded {
        ledger: Ledger::from_parts(document.expenses, document.goals),
        budgets: document.monthly_budgets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn sample() -> (Ledger, BudgetTable) {
        let mut ledger = Ledger::new();
        ledger.add_expense(Money::from_cents(1250), "Food", "Lunch", at(2024, 1, 15, 12, 30, 45));
        ledger.add_expense(Money::from_cents(4000), "Transportation", "", at(2024, 2, 1, 8, 0, 0));
        ledger.add_goal("Trip", Money::from_cents(50000), NaiveDate::from_ymd_opt(2024, 12, 31));
        ledger
            .contribute_to_goal("Trip", Money::from_cents(5000))
            .unwrap();
        ledger.add_goal("Cushion", Money::from_cents(100000), None);

        let mut budgets = BudgetTable::new();
        budgets.set_budget("Food", Money::from_cents(10000));
        budgets.set_budget("Shopping", Money::from_cents(7550));

        (ledger, budgets)
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_DATA_FILE);
        let (ledger, budgets) = sample();

        save_document(&path, &ledger, &budgets).unwrap();
        let (loaded_ledger, loaded_budgets) = load_document(&path).unwrap().into_parts();

        assert_eq!(loaded_ledger, ledger);
        assert_eq!(loaded_budgets, budgets);
        assert_eq!(
            loaded_ledger.expenses()[0].formatted_date(),
            "2024-01-15 12:30:45"
        );
    }

    #[test]
    fn test_missing_file_starts_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = load_document(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(outcome.status(), LoadStatus::StartingFresh);

        let (ledger, budgets) = outcome.into_parts();
        assert!(ledger.has_no_expenses());
        assert!(budgets.is_empty());
    }

    #[test]
    fn test_document_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_DATA_FILE);
        let (ledger, budgets) = sample();
        save_document(&path, &ledger, &budgets).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["expenses"][0]["amount"], serde_json::json!(12.5));
        assert_eq!(raw["expenses"][0]["date"], "2024-01-15 12:30:45");
        assert_eq!(raw["monthly_budgets"]["Shopping"], serde_json::json!(75.5));
        assert_eq!(raw["goals"][0]["deadline"], "2024-12-31");
        assert_eq!(raw["goals"][0]["current_amount"], serde_json::json!(50.0));
    }

    #[test]
    fn test_file_without_goals_section() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_DATA_FILE);
        fs::write(
            &path,
            r#"{
                "expenses": [
                    {"amount": 50, "category": "Food", "description": "Groceries", "date": "2024-01-15 10:00:00"}
                ],
                "monthly_budgets": {"Food": 100}
            }"#,
        )
        .unwrap();

        let (ledger, budgets) = load_document(&path).unwrap().into_parts();
        assert_eq!(ledger.expenses()[0].amount().cents(), 5000);
        assert!(ledger.goals().is_empty());
        assert_eq!(budgets.get_budget("Food"), Some(Money::from_cents(10000)));
    }

    #[test]
    fn test_huge_amounts_load_and_aggregate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_data.json");
        fs::write(
            &path,
            r#"{
                "expenses": [
                    {"amount": 5e16, "category": "Food", "description": "", "date": "2024-01-01 00:00:00"},
                    {"amount": 5e16, "category": "Food", "description": "", "date": "2024-01-02 00:00:00"},
                    {"amount": 1e17, "category": "Rent", "description": "", "date": "2024-01-03 00:00:00"}
                ],
                "monthly_budgets": {"Food": 100.0}
            }"#,
        )
        .unwrap();

        let (ledger, _) = load_document(&path).unwrap().into_parts();
        assert_eq!(ledger.expenses()[2].amount().cents(), i64::MAX);

        let max = Money::from_cents(i64::MAX);
        assert_eq!(crate::reports::total_spent(ledger.expenses()), max);
        let breakdown = crate::reports::breakdown_by_category(ledger.expenses());
        assert_eq!(breakdown["Food"], max);
        assert_eq!(breakdown["Rent"], max);
    }

    #[test]
    fn test_malformed_documents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_DATA_FILE);

        let cases = [
            r#"{"monthly_budgets": {}}"#,
            r#"{"expenses": []}"#,
            r#"{"expenses": [{"amount": 1, "category": "Food", "description": "", "date": "15/01/2024"}], "monthly_budgets": {}}"#,
            r#"{"expenses": [{"amount": "1", "category": "Food", "description": "", "date": "2024-01-15 10:00:00"}], "monthly_budgets": {}}"#,
            "[1, 2, 3]",
        ];

        for case in cases {
            fs::write(&path, case).unwrap();
            let err = load_document(&path).unwrap_err();
            assert!(err.is_malformed(), "expected malformed for {}", case);
        }
    }
}
