//! Recurring expense CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_materialize_outcome, format_rule_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{NewRecurringRule, RuleId};
use crate::services::RecurringService;
use crate::storage::Storage;

use super::{parse_amount, parse_month, today};

/// Recurring subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a monthly recurring expense
    Add {
        /// Name of the charge (e.g., "Rent")
        name: String,
        /// Amount charged each month
        amount: String,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Day of month it falls on (1-31)
        #[arg(short, long)]
        day: u32,
    },
    /// List recurring expenses
    List,
    /// Delete a recurring expense
    Delete {
        /// Rule ID (e.g., 3 or rec-3)
        id: String,
    },
    /// Add this month's recurring expenses to the ledger
    Apply {
        /// Month to apply (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> TrackerResult<()> {
    let service = RecurringService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecurringCommands::Add {
            name,
            amount,
            category,
            day,
        } => {
            let rule = service.add(NewRecurringRule::new(
                name,
                category,
                parse_amount(&amount)?,
                day,
            ))?;
            println!(
                "Added {}: {} {} on day {}",
                rule.id,
                rule.name,
                rule.amount.format_with_symbol(symbol),
                rule.day_of_month
            );
        }

        RecurringCommands::List => {
            println!("{}", format_rule_table(&service.list()?, symbol));
        }

        RecurringCommands::Delete { id } => {
            let id: RuleId = id
                .trim()
                .parse()
                .map_err(|_| TrackerError::Validation(format!("Invalid rule ID: {}", id)))?;
            if service.delete(id)? {
                println!("Deleted {}", id);
            } else {
                println!("No recurring expense with ID {}; nothing deleted.", id);
            }
        }

        RecurringCommands::Apply { month } => {
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => {
                    let now = today();
                    (now.year(), now.month())
                }
            };
            let outcome = service.apply_month(year, month)?;
            print!("{}", format_materialize_outcome(&outcome, symbol));
        }
    }

    Ok(())
}
