//! Monthly budget ceilings per category
//!
//! Budget categories are free text and are not checked against the
//! categories used by expenses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Category-keyed table of monthly spending limits, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetTable {
    limits: IndexMap<String, Money>,
}

impl BudgetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monthly limit for a category, replacing any existing one
    ///
    /// Returns the previous limit if there was one.
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) -> Option<Money> {
        self.limits.insert(category.into(), amount)
    }

    pub fn get_budget(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    /// Iterate over `(category, limit)` pairs in the order categories were first set
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.limits.iter().map(|(c, m)| (c.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut budgets = BudgetTable::new();
        assert_eq!(budgets.set_budget("Food", Money::from_cents(10000)), None);
        assert_eq!(budgets.get_budget("Food"), Some(Money::from_cents(10000)));
        assert_eq!(budgets.get_budget("food"), None);
    }

    #[test]
    fn test_last_write_wins_and_keeps_position() {
        let mut budgets = BudgetTable::new();
        budgets.set_budget("Food", Money::from_cents(10000));
        budgets.set_budget("Shopping", Money::from_cents(5000));
        let previous = budgets.set_budget("Food", Money::from_cents(12000));

        assert_eq!(previous, Some(Money::from_cents(10000)));
        assert_eq!(budgets.len(), 2);

        let entries: Vec<_> = budgets.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Food", Money::from_cents(12000)),
                ("Shopping", Money::from_cents(5000)),
            ]
        );
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut budgets = BudgetTable::new();
        budgets.set_budget("Food", Money::from_cents(10000));
        budgets.set_budget("Utilities", Money::from_cents(7550));

        let json = serde_json::to_string(&budgets).unwrap();
        assert_eq!(json, r#"{"Food":100.0,"Utilities":75.5}"#);

        let back: BudgetTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budgets);
    }
}
