//! Savings tips
//!
//! Personalized tips compare each well-known category's share of total
//! spending against a fixed threshold. Generic tips are a static list used
//! when there is no spending to look at.

use super::aggregation::Breakdown;
use crate::models::Money;

/// A category with a spending share threshold and the advice shown past it
#[derive(Debug, Clone, Copy)]
pub struct TipRule {
    pub category: &'static str,
    pub threshold: f64,
    pub advice: &'static str,
}

/// Rules in the order their tips are emitted
pub const TIP_RULES: [TipRule; 7] = [
    TipRule {
        category: "Food",
        threshold: 0.3,
        advice: "Consider reducing your spending on food. Try cooking at home more often.",
    },
    TipRule {
        category: "Transportation",
        threshold: 0.2,
        advice: "Look for cheaper transportation options or consider carpooling.",
    },
    TipRule {
        category: "Entertainment",
        threshold: 0.1,
        advice: "Be mindful of your entertainment expenses. Consider free or low-cost activities.",
    },
    TipRule {
        category: "Shopping",
        threshold: 0.2,
        advice: "Avoid impulse purchases and stick to your shopping list to save money.",
    },
    TipRule {
        category: "Utilities",
        threshold: 0.1,
        advice: "Try to reduce your utility bills by being more energy-efficient.",
    },
    TipRule {
        category: "Healthcare",
        threshold: 0.1,
        advice: "Review your healthcare expenses and see if there are ways to save on medical costs.",
    },
    TipRule {
        category: "Other",
        threshold: 0.1,
        advice: "Keep track of miscellaneous expenses to ensure they don't add up.",
    },
];

/// Advice that does not depend on spending data
pub const GENERIC_TIPS: [&str; 6] = [
    "Track your expenses regularly.",
    "Try to allocate your budget wisely.",
    "Look for discounts and deals when shopping.",
    "Consider saving a portion of your income for emergencies.",
    "Avoid unnecessary impulse purchases.",
    "Consider investing for long-term financial goals.",
];

/// Which kind of tips to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipMode {
    /// Based on the spending breakdown
    #[default]
    Personalized,
    /// Static advice
    Generic,
}

/// Tips for every rule whose category takes more than its share of total spending
///
/// An empty breakdown, or one whose total is not positive, yields no tips.
pub fn personalized_tips(breakdown: &Breakdown) -> Vec<&'static str> {
    let total: Money = breakdown.values().sum();
    if !total.is_positive() {
        return Vec::new();
    }

    TIP_RULES
        .iter()
        .filter(|rule| {
            let spent = breakdown.get(rule.category).copied().unwrap_or_default();
            spent.as_f64() > rule.threshold * total.as_f64()
        })
        .map(|rule| rule.advice)
        .collect()
}

pub fn generic_tips() -> &'static [&'static str] {
    &GENERIC_TIPS
}

/// Tips for the requested mode
pub fn tips_for(mode: TipMode, breakdown: &Breakdown) -> Vec<&'static str> {
    match mode {
        TipMode::Personalized => personalized_tips(breakdown),
        TipMode::Generic => generic_tips().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(items: &[(&str, i64)]) -> Breakdown {
        items
            .iter()
            .map(|(c, cents)| (c.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_empty_breakdown_has_no_tips() {
        assert!(personalized_tips(&Breakdown::new()).is_empty());
    }

    #[test]
    fn test_zero_total_has_no_tips() {
        let data = breakdown(&[("Food", 0), ("Other", 0)]);
        assert!(personalized_tips(&data).is_empty());
    }

    #[test]
    fn test_food_and_transportation() {
        let data = breakdown(&[("Food", 4000), ("Transportation", 6000)]);
        let tips = personalized_tips(&data);
        assert_eq!(tips, vec![TIP_RULES[0].advice, TIP_RULES[1].advice]);
    }

    #[test]
    fn test_order_follows_rule_list() {
        let data = breakdown(&[("Other", 5000), ("Food", 5000)]);
        let tips = personalized_tips(&data);
        assert_eq!(tips, vec![TIP_RULES[0].advice, TIP_RULES[6].advice]);
    }

    #[test]
    fn test_share_at_threshold_is_not_flagged() {
        // Food at exactly 30% does not trigger; Rent is not a known category
        let data = breakdown(&[("Food", 3000), ("Rent", 7000)]);
        assert!(personalized_tips(&data).is_empty());
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let data = breakdown(&[("food", 10000)]);
        assert!(personalized_tips(&data).is_empty());
    }

    #[test]
    fn test_generic_tips() {
        assert_eq!(generic_tips().len(), 6);
        assert_eq!(generic_tips()[0], "Track your expenses regularly.");

        let data = breakdown(&[("Food", 10000)]);
        assert_eq!(tips_for(TipMode::Generic, &data).len(), 6);
        assert_eq!(tips_for(TipMode::Personalized, &data), vec![TIP_RULES[0].advice]);
    }
}
