//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod recurring;
pub mod report;

pub use audit::{handle_audit_command, AuditArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportArgs};

use chrono::{Datelike, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::reports::aggregate::date_bounds;
use crate::storage::{LedgerStore, Storage};

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date in the configured format, falling back to YYYY-MM-DD
pub(crate) fn parse_date(s: &str, format: &str) -> TrackerResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| TrackerError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", s)))
}

pub(crate) fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| TrackerError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse `YYYY-MM` into a year and month
pub(crate) fn parse_month(s: &str) -> TrackerResult<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| TrackerError::Validation(format!("Invalid month: {}. Use YYYY-MM", s)))
}

/// Range from optional `--from`/`--to`, defaulting to the ledger's first and
/// last expense dates (or today when the ledger is empty)
pub(crate) fn resolve_range(
    storage: &Storage,
    from: Option<&str>,
    to: Option<&str>,
    format: &str,
) -> TrackerResult<(NaiveDate, NaiveDate)> {
    let from = from.map(|s| parse_date(s, format)).transpose()?;
    let to = to.map(|s| parse_date(s, format)).transpose()?;

    if let (Some(from), Some(to)) = (from, to) {
        return Ok((from, to));
    }

    let ledger = storage.ledger().list()?;
    let (min, max) = date_bounds(&ledger).unwrap_or_else(|| (today(), today()));
    Ok((from.unwrap_or(min), to.unwrap_or(max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(parse_date("2025-03-09", "%d/%m/%Y").unwrap(), expected);
        assert_eq!(parse_date("09/03/2025", "%d/%m/%Y").unwrap(), expected);
        assert!(parse_date("yesterday", "%Y-%m-%d").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-02").unwrap(), (2025, 2));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("feb").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("₹1,250.50").unwrap(), Money::from_cents(125050));
        assert!(parse_amount("lots").unwrap_err().is_validation());
    }
}
