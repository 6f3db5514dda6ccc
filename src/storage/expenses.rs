//! Expense repository for JSON storage
//!
//! Manages the ledger in expenses.json. Every mutation is written to disk
//! before the call returns.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard, LedgerStore};

/// Serializable ledger file layout
///
/// Both fields default, so a file written by hand with only an `expenses`
/// array still loads; `load` then derives the counter from the rows.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct ExpenseData {
    /// Next id to hand out; never decreases, so deleted ids are not reused
    next_id: ExpenseId,
    expenses: Vec<Expense>,
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            next_id: ExpenseId::new(1),
            expenses: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct LedgerState {
    next_id: ExpenseId,
    expenses: BTreeMap<ExpenseId, Expense>,
}

impl LedgerState {
    fn to_file_data(&self) -> ExpenseData {
        ExpenseData {
            next_id: self.next_id,
            expenses: self.expenses.values().cloned().collect(),
        }
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    state: RwLock<LedgerState>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(LedgerState {
                next_id: ExpenseId::new(1),
                expenses: BTreeMap::new(),
            }),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: ExpenseData = read_json(&self.path)?;
        let mut state = write_guard(&self.state)?;

        state.expenses = file_data
            .expenses
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        // Guard against a hand-edited file whose counter lags behind its rows
        let after_max = state
            .expenses
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(ExpenseId::new(1));
        state.next_id = file_data.next_id.max(after_max);

        Ok(())
    }

    /// Write the current ledger to disk, creating the file if absent
    pub fn save(&self) -> Result<(), TrackerError> {
        let state = read_guard(&self.state)?;
        write_json_atomic(&self.path, &state.to_file_data())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.expenses.get(&id).cloned())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.expenses.len())
    }
}

impl LedgerStore for ExpenseRepository {
    fn add(&self, new: NewExpense) -> Result<Expense, TrackerError> {
        let mut state = write_guard(&self.state)?;

        let id = state.next_id;
        let expense = Expense::from_new(id, new);
        state.expenses.insert(id, expense.clone());
        state.next_id = id.next();

        if let Err(e) = write_json_atomic(&self.path, &state.to_file_data()) {
            state.expenses.remove(&id);
            state.next_id = id;
            return Err(e);
        }

        Ok(expense)
    }

    /// Records are returned in id order
    fn list(&self) -> Result<Vec<Expense>, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.expenses.values().cloned().collect())
    }

    fn update(&self, id: ExpenseId, new: NewExpense) -> Result<bool, TrackerError> {
        let mut state = write_guard(&self.state)?;

        let Some(existing) = state.expenses.get_mut(&id) else {
            return Ok(false);
        };
        let previous = existing.clone();
        existing.replace_fields(new);

        if let Err(e) = write_json_atomic(&self.path, &state.to_file_data()) {
            state.expenses.insert(id, previous);
            return Err(e);
        }

        Ok(true)
    }

    fn delete(&self, id: ExpenseId) -> Result<bool, TrackerError> {
        let mut state = write_guard(&self.state)?;

        let Some(removed) = state.expenses.remove(&id) else {
            return Ok(false);
        };

        if let Err(e) = write_json_atomic(&self.path, &state.to_file_data()) {
            state.expenses.insert(id, removed);
            return Err(e);
        }

        Ok(true)
    }
}
