//! Storage initialization
//!
//! Creates the directory layout and empty data files on first run. Running
//! it again leaves existing data untouched.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::{BudgetRepository, ExpenseRepository, RecurringRepository};

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    if !paths.expenses_file().exists() {
        ExpenseRepository::new(paths.expenses_file()).save()?;
    }
    if !paths.recurring_file().exists() {
        RecurringRepository::new(paths.recurring_file()).save()?;
    }
    if !paths.budgets_file().exists() {
        BudgetRepository::new(paths.budgets_file()).save()?;
    }

    Ok(())
}
