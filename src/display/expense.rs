//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format("%Y-%m-%d").to_string(),
        name: e.name.clone(),
        category: Category::display_label(&e.category),
        amount: e.amount.format_with_symbol(symbol),
        notes: e.notes.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!(
        "Category: {}\n",
        Category::display_label(&expense.category)
    ));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));

    if !expense.notes.is_empty() {
        output.push_str(&format!("Notes:    {}\n", expense.notes));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense::from_new(
            ExpenseId::new(3),
            NewExpense::new(
                "Coffee",
                "Food",
                Money::from_cents(123456),
                NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            )
            .with_notes("#work"),
        )
    }

    #[test]
    fn test_table_contains_fields() {
        let table = format_expense_table(&[coffee()], "$");
        assert!(table.contains("exp-3"));
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("$1,234.56"));
        assert!(table.contains("#work"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_details() {
        let details = format_expense_details(&coffee(), "₹");
        assert!(details.contains("Name:     Coffee"));
        assert!(details.contains("₹1,234.56"));
        assert!(details.contains("Notes:    #work"));
    }
}
