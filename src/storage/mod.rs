//! Storage layer for the expense tracker
//!
//! JSON file storage with atomic writes. Each repository keeps its table in
//! memory behind an `RwLock` and rewrites its file on every mutation, so each
//! call is its own durable unit.
//!
//! `Storage` is opened once at process start and handed by reference to the
//! services and reports that need it.

pub mod audited;
pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod init;
pub mod recurring;

pub use audited::AuditedLedger;
pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use init::initialize_storage;
pub use recurring::RecurringRepository;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::audit::{AuditLogger, Audited, Change};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, NewExpense};

/// The ledger contract: durable expense records addressed by id
///
/// `update` and `delete` on an unknown id succeed without effect and return
/// `false`.
pub trait LedgerStore {
    /// Append a new expense with a freshly assigned id
    fn add(&self, new: NewExpense) -> Result<Expense, TrackerError>;

    /// All expenses; callers sort and filter as needed
    fn list(&self) -> Result<Vec<Expense>, TrackerError>;

    /// Replace every field of the expense with this id
    fn update(&self, id: ExpenseId, new: NewExpense) -> Result<bool, TrackerError>;

    /// Remove the expense with this id
    fn delete(&self, id: ExpenseId) -> Result<bool, TrackerError>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub recurring: RecurringRepository,
    pub budgets: BudgetRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance (nothing is loaded yet)
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Create the storage and load every table from disk
    pub fn open(paths: TrackerPaths) -> Result<Self, TrackerError> {
        let mut storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Turn audit logging on or off (see `Settings::audit_enabled`)
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit.set_enabled(enabled);
        self
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// The ledger as a `LedgerStore` that audits each change
    pub fn ledger(&self) -> AuditedLedger<'_> {
        AuditedLedger::new(self)
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load()?;
        self.recurring.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Log a change that has already been committed to its table
    pub fn record<T: Audited>(&self, change: Change<'_, T>) -> Result<(), TrackerError> {
        self.audit.record(change)
    }
}

pub(crate) fn read_guard<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, TrackerError> {
    lock.read()
        .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_guard<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, TrackerError> {
    lock.write()
        .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    fn coffee(id: u64) -> Expense {
        Expense::from_new(
            ExpenseId::new(id),
            NewExpense::new(
                "Coffee",
                "Food",
                Money::from_cents(350),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ),
        )
    }

    #[test]
    fn test_audit_toggle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let expense = coffee(1);

        let storage = Storage::open(paths.clone()).unwrap().with_audit(false);
        storage.record(Change::Created(&expense)).unwrap();
        assert!(storage.audit().read_all().unwrap().is_empty());

        let storage = Storage::open(paths).unwrap();
        storage.record(Change::Created(&expense)).unwrap();
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_record_update_keeps_diff() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        let before = coffee(1);
        let mut after = before.clone();
        after.amount = Money::from_cents(400);

        storage
            .record(Change::Updated {
                before: &before,
                after: &after,
            })
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].entity_id, "exp-1");
        assert_eq!(entries[0].diff_summary.as_deref(), Some("amount: 350 -> 400"));
    }
}
