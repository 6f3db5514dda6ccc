//! Expense CLI commands
//!
//! Implements CLI commands for recording and browsing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, ExpenseId, NewExpense};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::{parse_amount, parse_date, today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "250" or "12.50")
        amount: String,
        /// Category (Food, Home, Work, Fun, Misc, Transport, Utilities, Healthcare)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes or tags
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum rows to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
    /// Show one expense
    Show {
        /// Expense ID (e.g., 12 or exp-12)
        id: String,
    },
    /// Change fields of an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

fn parse_id(s: &str) -> TrackerResult<ExpenseId> {
    s.trim()
        .parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid expense ID: {}", s)))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();
    let format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
            notes,
        } => {
            let date = match date {
                Some(d) => parse_date(&d, format)?,
                None => today(),
            };
            let input = NewExpense::new(name, category, parse_amount(&amount)?, date)
                .with_notes(notes.unwrap_or_default());

            let expense = service.add(input)?;
            println!(
                "Added {}: {} {}",
                expense.id,
                expense,
                Category::display_label(&expense.category)
            );
        }

        ExpenseCommands::List {
            from,
            to,
            category,
            limit,
        } => {
            let mut filter = ExpenseFilter {
                from: from.map(|s| parse_date(&s, format)).transpose()?,
                to: to.map(|s| parse_date(&s, format)).transpose()?,
                ..ExpenseFilter::default()
            }
            .with_limit(limit);
            if let Some(c) = category {
                filter = filter.with_category(
                    c.parse::<Category>()
                        .map_err(|e| TrackerError::Validation(e.to_string()))?,
                );
            }

            let expenses = service.list(&filter)?;
            println!("{}", format_expense_table(&expenses, symbol));
            if !expenses.is_empty() {
                let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
                println!(
                    "{} expense(s), total {}",
                    expenses.len(),
                    total.format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::Show { id } => match service.get(parse_id(&id)?)? {
            Some(expense) => print!("{}", format_expense_details(&expense, symbol)),
            None => println!("No expense with ID {}", id),
        },

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            category,
            date,
            notes,
        } => {
            let id = parse_id(&id)?;
            let Some(current) = service.get(id)? else {
                println!("No expense with ID {}; nothing changed.", id);
                return Ok(());
            };

            let input = NewExpense {
                name: name.unwrap_or(current.name),
                category: category.unwrap_or(current.category),
                amount: match amount {
                    Some(a) => parse_amount(&a)?,
                    None => current.amount,
                },
                date: match date {
                    Some(d) => parse_date(&d, format)?,
                    None => current.date,
                },
                notes: notes.unwrap_or(current.notes),
            };

            if service.update(id, input)? {
                println!("Updated {}", id);
            } else {
                println!("No expense with ID {}; nothing changed.", id);
            }
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            if service.delete(id)? {
                println!("Deleted {}", id);
            } else {
                println!("No expense with ID {}; nothing deleted.", id);
            }
        }
    }

    Ok(())
}
