//! CSV export of expense records

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Column order: date,name,category,amount,notes
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: String,
    name: &'a str,
    category: &'a str,
    /// Two decimals, no currency symbol
    amount: String,
    notes: &'a str,
}

impl<'a> From<&'a Expense> for ExportRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            name: &expense.name,
            category: &expense.category,
            amount: expense.amount.to_string(),
            notes: &expense.notes,
        }
    }
}

/// Write expenses as CSV with a header row
///
/// An empty slice still produces the header.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["date", "name", "category", "amount", "notes"])?;
    for expense in expenses {
        csv_writer.serialize(ExportRow::from(expense))?;
    }
    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// `expenses_<start>_to_<end>.csv`
pub fn default_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "expenses_{}_to_{}.csv",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_rows() {
        let expenses = vec![
            Expense::from_new(
                ExpenseId::new(1),
                NewExpense::new("Coffee", "Food", Money::from_cents(350), date(2025, 1, 15)),
            ),
            Expense::from_new(
                ExpenseId::new(2),
                NewExpense::new("Dinner, late", "Food", Money::from_cents(2000), date(2025, 1, 16))
                    .with_notes("#friends"),
            ),
        ];

        let mut buffer = Vec::new();
        let written = export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(written, 2);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "date,name,category,amount,notes");
        assert_eq!(lines[1], "2025-01-15,Coffee,Food,3.50,");
        assert_eq!(lines[2], "2025-01-16,\"Dinner, late\",Food,20.00,#friends");
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "date,name,category,amount,notes\n");
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(date(2025, 1, 1), date(2025, 3, 31)),
            "expenses_2025-01-01_to_2025-03-31.csv"
        );
    }
}
