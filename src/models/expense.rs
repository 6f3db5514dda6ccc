//! Expense model
//!
//! A single dated spending record in the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Notes attached to expenses created from recurring rules
pub const RECURRING_NOTE: &str = "Recurring Expense";

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the ledger
    pub id: ExpenseId,

    /// Short label, e.g. "Coffee"
    pub name: String,

    /// Category tag (one of the known categories when entered through services)
    pub category: String,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form notes or tags
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    /// Build a stored record from an id and its field values
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            amount: new.amount,
            date: new.date,
            notes: new.notes,
        }
    }

    /// Replace every field except the id
    pub fn replace_fields(&mut self, new: NewExpense) {
        self.name = new.name;
        self.category = new.category;
        self.amount = new.amount;
        self.date = new.date;
        self.notes = new.notes;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}

/// Field values for an expense that has no id yet (add) or whose fields are
/// being replaced (update)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            date,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Entry-path checks: non-empty name, positive amount, known category
    ///
    /// Trims the name and normalizes the category to its stored name.
    pub fn validate(&mut self) -> Result<(), ExpenseValidationError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        let category = Category::from_str(&self.category)
            .map_err(|e| ExpenseValidationError::UnknownCategory(e.0))?;
        self.category = category.name().to_string();
        Ok(())
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    UnknownCategory(String),
    DayOutOfRange(u32),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::UnknownCategory(category) => write!(
                f,
                "{}",
                super::category::CategoryParseError(category.clone())
            ),
            Self::DayOutOfRange(day) => {
                write!(f, "Day of month must be between 1 and 31 (got {})", day)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_new() {
        let new = NewExpense::new("Coffee", "Food", Money::from_cents(350), date(2025, 1, 15))
            .with_notes("#morning");
        let expense = Expense::from_new(ExpenseId::new(1), new);

        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.notes, "#morning");
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let mut expense = Expense::from_new(
            ExpenseId::new(5),
            NewExpense::new("Taxi", "Transport", Money::from_cents(1200), date(2025, 2, 1)),
        );
        expense.replace_fields(
            NewExpense::new("Rent", "Home", Money::from_cents(90000), date(2025, 2, 3))
                .with_notes(RECURRING_NOTE),
        );

        assert_eq!(expense.id, ExpenseId::new(5));
        assert_eq!(expense.category, "Home");
        assert_eq!(expense.notes, RECURRING_NOTE);
    }

    #[test]
    fn test_validate_normalizes() {
        let mut new = NewExpense::new("  Coffee ", "🍔 food", Money::from_cents(350), date(2025, 1, 1));
        new.validate().unwrap();
        assert_eq!(new.name, "Coffee");
        assert_eq!(new.category, "Food");
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let on = date(2025, 1, 1);

        let mut empty = NewExpense::new("   ", "Food", Money::from_cents(1), on);
        assert_eq!(empty.validate(), Err(ExpenseValidationError::EmptyName));

        let mut zero = NewExpense::new("Tea", "Food", Money::zero(), on);
        assert_eq!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut unknown = NewExpense::new("Tea", "Drinks", Money::from_cents(1), on);
        assert_eq!(
            unknown.validate(),
            Err(ExpenseValidationError::UnknownCategory("Drinks".into()))
        );
    }

    #[test]
    fn test_display() {
        let expense = Expense::from_new(
            ExpenseId::new(2),
            NewExpense::new("Lunch", "Food", Money::from_cents(1250), date(2025, 3, 9)),
        );
        assert_eq!(expense.to_string(), "2025-03-09 - Lunch (12.50)");
    }

    #[test]
    fn test_notes_default_when_missing() {
        let json = r#"{"id":1,"name":"Tea","category":"Food","amount":100,"date":"2025-01-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.notes, "");
    }
}
