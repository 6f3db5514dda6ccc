//! Recurring rule model
//!
//! A template for a charge that repeats on the same day every month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::ExpenseValidationError;
use super::ids::RuleId;
use super::money::Money;
use super::category::Category;

/// A recurring monthly charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringRule {
    pub id: RuleId,
    pub name: String,
    pub category: String,
    pub amount: Money,

    /// Day of month (1-31); may not exist in every month
    pub day_of_month: u32,
}

impl RecurringRule {
    pub fn from_new(id: RuleId, new: NewRecurringRule) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            amount: new.amount,
            day_of_month: new.day_of_month,
        }
    }

    /// The date this rule falls on in the given month, if that day exists
    pub fn date_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, self.day_of_month)
    }
}

/// Field values for a rule that has no id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecurringRule {
    pub name: String,
    pub category: String,
    pub amount: Money,
    pub day_of_month: u32,
}

impl NewRecurringRule {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        day_of_month: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            day_of_month,
        }
    }

    /// Same checks as an expense, plus a day of month in 1..=31
    pub fn validate(&mut self) -> Result<(), ExpenseValidationError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(ExpenseValidationError::DayOutOfRange(self.day_of_month));
        }
        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| ExpenseValidationError::UnknownCategory(e.0))?;
        self.category = category.name().to_string();
        Ok(())
    }
}
