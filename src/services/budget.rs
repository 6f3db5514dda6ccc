//! Budget service
//!
//! Per-category monthly limits and how much of each has been spent.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::audit::Change;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryBudget, Money};
use crate::reports::aggregate::{budget_progress, budget_spending, BudgetProgress};
use crate::storage::{LedgerStore, Storage};

use super::expense::validate_range;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a category, replacing any earlier value
    ///
    /// Setting zero clears the budget.
    pub fn set(&self, category: &str, amount: Money) -> TrackerResult<CategoryBudget> {
        let category = category
            .parse::<Category>()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Budget cannot be negative (got {})",
                amount
            )));
        }

        let name = category.name();
        let previous = self.storage.budgets.get(name)?;
        self.storage.budgets.set(name, amount)?;

        let row = CategoryBudget::new(name, amount);
        match previous {
            Some(old) => self.storage.record(Change::Updated {
                before: &CategoryBudget::new(name, old),
                after: &row,
            })?,
            None => self.storage.record(Change::Created(&row))?,
        }

        Ok(row)
    }

    /// One row per known category, zero where no budget has been set
    pub fn list(&self) -> TrackerResult<Vec<CategoryBudget>> {
        let stored = self.storage.budgets.get_all()?;
        Ok(Category::all()
            .iter()
            .map(|c| {
                let amount = stored.get(c.name()).copied().unwrap_or_default();
                CategoryBudget::new(c.name(), amount)
            })
            .collect())
    }

    /// Budget use per budgeted category for expenses in `start..=end` that
    /// also fall in `today`'s month
    pub fn progress(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        today: NaiveDate,
    ) -> TrackerResult<BTreeMap<String, BudgetProgress>> {
        validate_range(start, end)?;
        let ledger = self.storage.ledger().list()?;
        let spent = budget_spending(&ledger, start, end, today);
        let budgets = self.storage.budgets.get_all()?;
        Ok(budget_progress(&spent, &budgets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::NewExpense;
    use crate::services::ExpenseService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_set_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("food", Money::from_cents(50000)).unwrap();
        service.set("Food", Money::from_cents(60000)).unwrap();

        let rows = service.list().unwrap();
        assert_eq!(rows.len(), Category::all().len());
        let food = rows.iter().find(|r| r.category == "Food").unwrap();
        assert_eq!(food.budget, Money::from_cents(60000));
        let fun = rows.iter().find(|r| r.category == "Fun").unwrap();
        assert!(fun.budget.is_zero());
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert!(service.set("Snacks", Money::from_cents(100)).unwrap_err().is_validation());
        assert!(service.set("Food", Money::from_cents(-1)).unwrap_err().is_validation());
        assert!(storage.budgets.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_set_audits_create_then_update() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set("Fun", Money::from_cents(1000)).unwrap();
        service.set("Fun", Money::from_cents(2000)).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].entity_id, "Fun");
        assert!(entries[1].diff_summary.is_some());
    }

    #[test]
    fn test_progress_uses_current_month_only() {
        let (_temp_dir, storage) = create_test_storage();
        let expenses = ExpenseService::new(&storage);
        let service = BudgetService::new(&storage);

        service.set("Food", Money::from_cents(10000)).unwrap();
        expenses
            .add(NewExpense::new("Groceries", "Food", Money::from_cents(15000), date(2025, 6, 3)))
            .unwrap();
        expenses
            .add(NewExpense::new("Snack", "Food", Money::from_cents(500), date(2025, 5, 20)))
            .unwrap();

        let progress = service
            .progress(date(2025, 5, 1), date(2025, 6, 30), date(2025, 6, 15))
            .unwrap();

        let food = &progress["Food"];
        assert_eq!(food.spent, Money::from_cents(15000));
        assert_eq!(food.ratio, 1.0);
        assert!(food.is_over());
        assert_eq!(progress.len(), 1);
    }
}
