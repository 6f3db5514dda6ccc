//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the tracking
//! domain: expenses, recurring rules, category budgets and money amounts.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod recurring;

pub use budget::CategoryBudget;
pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError, NewExpense, RECURRING_NOTE};
pub use ids::{ExpenseId, RuleId};
pub use money::{Money, MoneyParseError};
pub use recurring::{NewRecurringRule, RecurringRule};
