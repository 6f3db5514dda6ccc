//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars and the dashboard.

pub mod budget;
pub mod expense;
pub mod recurring;
pub mod report;

pub use budget::{format_budget_progress, format_budget_table};
pub use expense::{format_expense_details, format_expense_table};
pub use recurring::{format_materialize_outcome, format_rule_table};
pub use report::format_dashboard;
