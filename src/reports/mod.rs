//! Reports module for the expense tracker
//!
//! Aggregation functions over expense records and the dashboard built
//! from them.

pub mod aggregate;
pub mod summary;

pub use aggregate::{BudgetProgress, MonthlyTotal};
pub use summary::{CategorySpending, DashboardReport};
