//! Recurring rule service and the monthly materializer
//!
//! Rules are templates; applying a month turns each rule into a concrete
//! expense dated on the rule's day in that month.

use chrono::NaiveDate;

use crate::audit::Change;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, NewExpense, NewRecurringRule, RecurringRule, RuleId, RECURRING_NOTE};
use crate::storage::{LedgerStore, Storage};

/// A rule that produced no expense, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRule {
    pub rule: RecurringRule,
    pub reason: String,
}

/// Result of applying recurring rules to one month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOutcome {
    pub appended: Vec<Expense>,
    pub skipped: Vec<SkippedRule>,
}

fn rule_date(rule: &RecurringRule, year: i32, month: u32) -> TrackerResult<NaiveDate> {
    rule.date_in(year, month).ok_or(TrackerError::InvalidDate {
        year,
        month,
        day: rule.day_of_month,
    })
}

/// Append one expense per rule for the given month
///
/// Rules whose day does not exist in the month are skipped. Running the same
/// month twice appends the rows again. Each append is committed on its own,
/// so a storage error stops the batch but keeps the rows already written.
pub fn materialize_for_month<S: LedgerStore + ?Sized>(
    store: &S,
    rules: &[RecurringRule],
    year: i32,
    month: u32,
) -> TrackerResult<MaterializeOutcome> {
    let mut outcome = MaterializeOutcome::default();

    for rule in rules {
        let date = match rule_date(rule, year, month) {
            Ok(date) => date,
            Err(TrackerError::InvalidDate { .. }) => {
                outcome.skipped.push(SkippedRule {
                    rule: rule.clone(),
                    reason: "invalid day for month".to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let new = NewExpense::new(rule.name.clone(), rule.category.clone(), rule.amount, date)
            .with_notes(RECURRING_NOTE);
        outcome.appended.push(store.add(new)?);
    }

    Ok(outcome)
}

/// Service for recurring rule management
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new rule
    pub fn add(&self, mut input: NewRecurringRule) -> TrackerResult<RecurringRule> {
        input
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let rule = self.storage.recurring.add(input)?;

        self.storage.record(Change::Created(&rule))?;

        Ok(rule)
    }

    /// All rules, in creation order
    pub fn list(&self) -> TrackerResult<Vec<RecurringRule>> {
        self.storage.recurring.list()
    }

    /// Delete a rule; `false` when the id is unknown
    pub fn delete(&self, id: RuleId) -> TrackerResult<bool> {
        let Some(rule) = self.storage.recurring.get(id)? else {
            return Ok(false);
        };
        if !self.storage.recurring.delete(id)? {
            return Ok(false);
        }

        self.storage.record(Change::Deleted(&rule))?;

        Ok(true)
    }

    /// Materialize every stored rule into the given month
    pub fn apply_month(&self, year: i32, month: u32) -> TrackerResult<MaterializeOutcome> {
        if !(1..=12).contains(&month) {
            return Err(TrackerError::Validation(format!(
                "Month must be between 1 and 12 (got {})",
                month
            )));
        }
        let rules = self.list()?;
        materialize_for_month(&self.storage.ledger(), &rules, year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::EntityType;
    use crate::config::paths::TrackerPaths;
    use crate::models::{ExpenseId, Money};
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn rule(id: u64, name: &str, day: u32) -> RecurringRule {
        RecurringRule::from_new(
            RuleId::new(id),
            NewRecurringRule::new(name, "Home", Money::from_cents(10000), day),
        )
    }

    /// In-memory ledger that fails once it holds `capacity` rows
    struct FlakyLedger {
        rows: RefCell<Vec<Expense>>,
        capacity: usize,
    }

    impl LedgerStore for FlakyLedger {
        fn add(&self, new: NewExpense) -> TrackerResult<Expense> {
            let mut rows = self.rows.borrow_mut();
            if rows.len() >= self.capacity {
                return Err(TrackerError::Storage("disk full".into()));
            }
            let expense = Expense::from_new(ExpenseId::new(rows.len() as u64 + 1), new);
            rows.push(expense.clone());
            Ok(expense)
        }

        fn list(&self) -> TrackerResult<Vec<Expense>> {
            Ok(self.rows.borrow().clone())
        }

        fn update(&self, _id: ExpenseId, _new: NewExpense) -> TrackerResult<bool> {
            Ok(false)
        }

        fn delete(&self, _id: ExpenseId) -> TrackerResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_day_31_skipped_in_february() {
        let (_temp_dir, storage) = create_test_storage();

        let outcome = materialize_for_month(&storage.ledger(), &[rule(1, "Rent", 31)], 2025, 2).unwrap();

        assert!(outcome.appended.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].reason, "invalid day for month");
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_day_31_appended_in_january() {
        let (_temp_dir, storage) = create_test_storage();

        let outcome = materialize_for_month(&storage.ledger(), &[rule(1, "Rent", 31)], 2025, 1).unwrap();

        assert_eq!(outcome.appended.len(), 1);
        let expense = &outcome.appended[0];
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(expense.name, "Rent");
        assert_eq!(expense.category, "Home");
        assert_eq!(expense.amount, Money::from_cents(10000));
        assert_eq!(expense.notes, RECURRING_NOTE);
    }

    #[test]
    fn test_running_twice_duplicates() {
        let (_temp_dir, storage) = create_test_storage();
        let rules = [rule(1, "Rent", 1), rule(2, "Internet", 15)];

        materialize_for_month(&storage.ledger(), &rules, 2025, 3).unwrap();
        materialize_for_month(&storage.ledger(), &rules, 2025, 3).unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 4);
    }

    #[test]
    fn test_failure_keeps_earlier_appends() {
        let ledger = FlakyLedger {
            rows: RefCell::new(Vec::new()),
            capacity: 1,
        };
        let rules = [rule(1, "Rent", 1), rule(2, "Internet", 15)];

        let err = materialize_for_month(&ledger, &rules, 2025, 3).unwrap_err();

        assert!(err.is_storage());
        assert_eq!(ledger.list().unwrap().len(), 1);
        assert_eq!(ledger.list().unwrap()[0].name, "Rent");
    }

    #[test]
    fn test_skip_does_not_stop_batch() {
        let (_temp_dir, storage) = create_test_storage();
        let rules = [rule(1, "Rent", 30), rule(2, "Gym", 5)];

        let outcome = materialize_for_month(&storage.ledger(), &rules, 2025, 2).unwrap();

        assert_eq!(outcome.skipped[0].rule.name, "Rent");
        assert_eq!(outcome.appended[0].name, "Gym");
    }

    #[test]
    fn test_service_add_list_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);

        let rent = service
            .add(NewRecurringRule::new("Rent", "home", Money::from_cents(90000), 1))
            .unwrap();
        assert_eq!(rent.category, "Home");

        let err = service
            .add(NewRecurringRule::new("Bad", "Home", Money::from_cents(100), 32))
            .unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.list().unwrap(), vec![rent.clone()]);
        assert!(service.delete(rent.id).unwrap());
        assert!(!service.delete(rent.id).unwrap());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_apply_month_audits_each_row() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RecurringService::new(&storage);
        service
            .add(NewRecurringRule::new("Rent", "Home", Money::from_cents(90000), 1))
            .unwrap();
        service
            .add(NewRecurringRule::new("Phone", "Utilities", Money::from_cents(2000), 10))
            .unwrap();

        let outcome = service.apply_month(2025, 6).unwrap();
        assert_eq!(outcome.appended.len(), 2);

        let expense_entries = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .filter(|e| e.entity_type == EntityType::Expense)
            .count();
        assert_eq!(expense_entries, 2);

        assert!(service.apply_month(2025, 13).unwrap_err().is_validation());
    }
}
