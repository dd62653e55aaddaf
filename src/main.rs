use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_goal_command, handle_report_command,
    BudgetCommands, ExpenseCommands, GoalCommands, ReportCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::services::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracking and monthly budgeting",
    long_about = "Record expenses, see where your money goes by category, set monthly \
                  budgets with alerts, track savings goals and get savings tips."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Log informational messages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings (defaults on first run) to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = settings.resolve_data_file(&paths, cli.file);

    let mut tracker = ExpenseTracker::open(&data_file)?
        .with_near_limit_ratio(settings.near_limit_ratio);

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&tracker, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&mut tracker, &settings, cmd)?,
        Some(Commands::Config { init: true }) => {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        Some(Commands::Config { init: false }) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", tracker.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Near-limit ratio: {}", settings.near_limit_ratio);
            match settings.spending_limit {
                Some(limit) => println!(
                    "  Spending limit:   {}",
                    limit.format_with_symbol(&settings.currency_symbol)
                ),
                None => println!("  Spending limit:   (not set)"),
            }
        }
        None => {
            println!("Expense Tracker - personal expenses and monthly budgets");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add <amount> <category>' to record an expense.");
        }
    }

    Ok(())
}
