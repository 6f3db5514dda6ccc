//! Category budget repository for JSON storage
//!
//! Holds at most one budget per category in budgets.json. Saving a budget
//! replaces any earlier value for that category.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{CategoryBudget, Money};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<CategoryBudget>,
}

/// Repository for category budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<BTreeMap<String, Money>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: BudgetData = read_json(&self.path)?;
        let mut budgets = write_guard(&self.budgets)?;

        budgets.clear();
        for row in file_data.budgets {
            budgets.insert(row.category, row.budget);
        }

        Ok(())
    }

    /// Write the current budgets to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let budgets = read_guard(&self.budgets)?;
        write_json_atomic(&self.path, &to_file_data(&budgets))
    }

    /// Insert or replace the budget for a category
    pub fn set(&self, category: &str, budget: Money) -> Result<(), TrackerError> {
        let mut budgets = write_guard(&self.budgets)?;

        let previous = budgets.insert(category.to_string(), budget);

        if let Err(e) = write_json_atomic(&self.path, &to_file_data(&budgets)) {
            match previous {
                Some(old) => budgets.insert(category.to_string(), old),
                None => budgets.remove(category),
            };
            return Err(e);
        }

        Ok(())
    }

    pub fn get(&self, category: &str) -> Result<Option<Money>, TrackerError> {
        let budgets = read_guard(&self.budgets)?;
        Ok(budgets.get(category).copied())
    }

    /// Every stored budget, keyed by category
    pub fn get_all(&self) -> Result<BTreeMap<String, Money>, TrackerError> {
        let budgets = read_guard(&self.budgets)?;
        Ok(budgets.clone())
    }
}

fn to_file_data(budgets: &BTreeMap<String, Money>) -> BudgetData {
    BudgetData {
        budgets: budgets
            .iter()
            .map(|(category, budget)| CategoryBudget::new(category.clone(), *budget))
            .collect(),
    }
}
