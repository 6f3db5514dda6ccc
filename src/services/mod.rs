//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and audit logging before anything is written.

pub mod budget;
pub mod expense;
pub mod recurring;

pub use budget::BudgetService;
pub use expense::{ExpenseFilter, ExpenseService};
pub use recurring::{materialize_for_month, MaterializeOutcome, RecurringService, SkippedRule};
