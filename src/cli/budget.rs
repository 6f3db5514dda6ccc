//! Budget CLI commands
//!
//! Implements CLI commands for per-category monthly budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_progress, format_budget_table};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_amount, resolve_range, today};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category (0 clears it)
    Set {
        /// Category name
        category: String,
        /// Monthly budget amount
        amount: String,
    },
    /// Show budgets for every category
    List,
    /// Show this month's spending against each budget
    Progress {
        /// Start date (inclusive, default: first expense)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive, default: last expense)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let row = service.set(&category, parse_amount(&amount)?)?;
            println!(
                "Budget for {} set to {}",
                row.category,
                row.budget.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            println!("{}", format_budget_table(&service.list()?, symbol));
        }

        BudgetCommands::Progress { from, to } => {
            let (start, end) = resolve_range(
                storage,
                from.as_deref(),
                to.as_deref(),
                &settings.date_format,
            )?;
            let progress = service.progress(start, end, today())?;
            print!("{}", format_budget_progress(&progress, symbol));
        }
    }

    Ok(())
}
