//! Ledger handle that records every mutation in the audit log

use crate::audit::Change;
use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, NewExpense};

use super::{LedgerStore, Storage};

/// `LedgerStore` over the storage's expense repository that writes one
/// audit entry per successful change
///
/// The repository commits first. If the audit append then fails the call
/// returns `TrackerError::AuditWrite`, which states that the row was saved;
/// callers must not retry it as a failed write.
pub struct AuditedLedger<'a> {
    storage: &'a Storage,
}

impl<'a> AuditedLedger<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }
}

impl LedgerStore for AuditedLedger<'_> {
    fn add(&self, new: NewExpense) -> Result<Expense, TrackerError> {
        let expense = self.storage.expenses.add(new)?;
        self.storage.record(Change::Created(&expense))?;
        Ok(expense)
    }

    fn list(&self) -> Result<Vec<Expense>, TrackerError> {
        self.storage.expenses.list()
    }

    fn update(&self, id: ExpenseId, new: NewExpense) -> Result<bool, TrackerError> {
        let Some(before) = self.storage.expenses.get(id)? else {
            return Ok(false);
        };
        if !self.storage.expenses.update(id, new)? {
            return Ok(false);
        }
        if let Some(after) = self.storage.expenses.get(id)? {
            self.storage.record(Change::Updated {
                before: &before,
                after: &after,
            })?;
        }
        Ok(true)
    }

    fn delete(&self, id: ExpenseId) -> Result<bool, TrackerError> {
        let Some(before) = self.storage.expenses.get(id)? else {
            return Ok(false);
        };
        if !self.storage.expenses.delete(id)? {
            return Ok(false);
        }
        self.storage.record(Change::Deleted(&before))?;
        Ok(true)
    }
}
