//! Expense service
//!
//! Entry path for expenses: validates user input before anything reaches the
//! ledger, and records each change in the audit log.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, ExpenseId, NewExpense};
use crate::reports::aggregate::filter_by_date_range;
use crate::storage::{LedgerStore, Storage};

/// Which expenses to list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Inclusive start date
    pub from: Option<NaiveDate>,
    /// Inclusive end date
    pub to: Option<NaiveDate>,
    pub category: Option<Category>,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Reject a range whose end comes before its start
pub fn validate_range(from: NaiveDate, to: NaiveDate) -> TrackerResult<()> {
    if to < from {
        return Err(TrackerError::Validation(format!(
            "End date {} is before start date {}",
            to, from
        )));
    }
    Ok(())
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense
    pub fn add(&self, mut input: NewExpense) -> TrackerResult<Expense> {
        input
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.ledger().add(input)
    }

    /// Expenses matching the filter, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> TrackerResult<Vec<Expense>> {
        let mut expenses = self.storage.ledger().list()?;

        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            validate_range(from, to)?;
            expenses = filter_by_date_range(&expenses, from, to);
        } else if let Some(from) = filter.from {
            expenses.retain(|e| e.date >= from);
        } else if let Some(to) = filter.to {
            expenses.retain(|e| e.date <= to);
        }

        if let Some(category) = filter.category {
            expenses.retain(|e| e.category == category.name());
        }

        // Newest first; ties keep entry order
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Replace every field of an expense
    ///
    /// Returns `false` when no expense has this id; nothing is changed then.
    pub fn update(&self, id: ExpenseId, mut input: NewExpense) -> TrackerResult<bool> {
        input
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.ledger().update(id, input)
    }

    /// Delete an expense; `false` when the id is unknown
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<bool> {
        self.storage.ledger().delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::Money;
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
    fn test_add_normalizes_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(NewExpense::new(" Coffee ", "food", Money::from_cents(350), date(2025, 1, 5)))
            .unwrap();

        assert_eq!(expense.name, "Coffee");
        assert_eq!(expense.category, "Food");
        assert_eq!(service.list(&ExpenseFilter::default()).unwrap(), vec![expense]);
    }

    #[test]
    fn test_add_rejects_invalid_without_writing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add(NewExpense::new("Tea", "Food", Money::zero(), date(2025, 1, 5)))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .add(NewExpense::new("Tea", "Snacks", Money::from_cents(100), date(2025, 1, 5)))
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for (name, category, day) in [("Lunch", "Food", 1), ("Movie", "Fun", 10), ("Dinner", "Food", 20)] {
            service
                .add(NewExpense::new(name, category, Money::from_cents(1000), date(2025, 3, day)))
                .unwrap();
        }

        let range = service
            .list(&ExpenseFilter::between(date(2025, 3, 1), date(2025, 3, 10)))
            .unwrap();
        let names: Vec<_> = range.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Movie", "Lunch"]);

        let food = service
            .list(&ExpenseFilter::default().with_category(Category::Food))
            .unwrap();
        assert_eq!(food.len(), 2);

        let limited = service.list(&ExpenseFilter::default().with_limit(1)).unwrap();
        assert_eq!(limited[0].name, "Dinner");
    }

    #[test]
    fn test_list_rejects_reversed_range() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .list(&ExpenseFilter::between(date(2025, 3, 10), date(2025, 3, 1)))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .add(NewExpense::new("Taxi", "Transport", Money::from_cents(1500), date(2025, 4, 2)))
            .unwrap();

        let updated = service
            .update(
                expense.id,
                NewExpense::new("Taxi home", "Transport", Money::from_cents(1800), date(2025, 4, 2)),
            )
            .unwrap();
        assert!(updated);
        assert_eq!(service.get(expense.id).unwrap().unwrap().amount, Money::from_cents(1800));

        let missing = service
            .update(
                ExpenseId::new(99),
                NewExpense::new("Ghost", "Misc", Money::from_cents(1), date(2025, 4, 2)),
            )
            .unwrap();
        assert!(!missing);

        assert!(service.delete(expense.id).unwrap());
        assert!(!service.delete(expense.id).unwrap());
        assert!(service.get(expense.id).unwrap().is_none());
    }
}
