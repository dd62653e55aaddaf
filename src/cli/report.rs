//! CLI commands for reports
//!
//! Spending breakdown, monthly totals, the overall limit check, budget
//! alerts and savings tips.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::report::format_percentage;
use crate::display::{format_alerts, format_tips};
use crate::error::{TrackerError, TrackerResult};
use crate::models::dates::month_label;
use crate::services::ExpenseTracker;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show spending by category
    Breakdown {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show the total spent in a month
    Monthly {
        /// Month (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        /// Four digit year
        #[arg(value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: i32,
    },

    /// Check total spending against an overall limit
    Limit {
        /// Limit to check against; defaults to `spending_limit` from the settings
        amount: Option<String>,
    },

    /// Show budget alerts
    Alerts {
        /// Only categories that went over budget
        #[arg(long, conflicts_with = "near")]
        exceeded: bool,
        /// Only the near-limit check, including categories already over
        #[arg(long)]
        near: bool,
    },

    /// Get savings tips
    Tips {
        /// Show general advice instead of tips based on your spending
        #[arg(long)]
        generic: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    tracker: &ExpenseTracker,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Breakdown { top } => {
            let report = tracker.spending_report();
            match top {
                Some(n) => {
                    println!("Top {} categories:", n);
                    for category in report.top_categories(n) {
                        println!(
                            "  {:<28} {:>12} {:>7}",
                            category.category,
                            category.total_spending.format_with_symbol(symbol),
                            format_percentage(category.percentage)
                        );
                    }
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Monthly { month, year } => {
            let label = month_label(month, year).ok_or_else(|| {
                TrackerError::Validation(format!("Invalid month: {}/{}", month, year))
            })?;
            let spent = tracker.monthly_spent(month, year);
            println!("Total spent in {}: {}", label, spent.format_with_symbol(symbol));
        }

        ReportCommands::Limit { amount } => {
            let limit = match amount {
                Some(amount) => parse_amount(&amount)?,
                None => settings.spending_limit.ok_or_else(|| {
                    TrackerError::Validation(
                        "No limit given and no spending_limit configured".to_string(),
                    )
                })?,
            };

            let total = tracker.total_spent().format_with_symbol(symbol);
            if tracker.over_limit(limit) {
                println!("You have exceeded your spending limit!");
                println!(
                    "Total spent {} is over the limit of {}",
                    total,
                    limit.format_with_symbol(symbol)
                );
            } else {
                println!(
                    "Total spent {} is within the limit of {}",
                    total,
                    limit.format_with_symbol(symbol)
                );
            }
        }

        ReportCommands::Alerts { exceeded, near } => {
            let alerts = if exceeded {
                tracker.alerts_exceeded()
            } else if near {
                tracker.alerts_near_limit()
            } else {
                tracker.check_alerts()
            };
            print!("{}", format_alerts(&alerts, symbol));
        }

        ReportCommands::Tips { generic } => {
            if generic || tracker.ledger().has_no_expenses() {
                print!(
                    "{}",
                    format_tips("Here are some financial tips:", &tracker.generic_tips())
                );
            } else {
                print!(
                    "{}",
                    format_tips(
                        "Here are some financial tips based on your spending patterns:",
                        &tracker.tips()
                    )
                );
            }
        }
    }

    Ok(())
}
