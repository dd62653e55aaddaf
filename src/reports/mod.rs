//! Reports module for the expense tracker
//!
//! Pure read-only computations over the ledger: category breakdowns and
//! totals, budget alerts, savings tips and the formatted spending report.

pub mod aggregation;
pub mod alerts;
pub mod spending;
pub mod tips;

pub use aggregation::{
    breakdown_by_category, monthly_spent, over_limit, spent_in_category, total_spent, Breakdown,
};
pub use alerts::{
    alerts_exceeded, alerts_near_limit, check_budget_alerts, AlertLevel, BudgetAlert,
    DEFAULT_NEAR_LIMIT_RATIO,
};
pub use spending::{SpendingByCategory, SpendingReport};
pub use tips::{
    generic_tips, personalized_tips, tips_for, TipMode, TipRule, GENERIC_TIPS, TIP_RULES,
};
