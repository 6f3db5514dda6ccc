//! Spending aggregation
//!
//! Pure functions over in-memory expense records. Nothing here touches
//! storage; callers load records once and pass slices in.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Expense, Money};

/// Total spending for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// Month label, formatted `YYYY-MM`
    pub month: String,
    pub total: Money,
}

/// How much of a category's budget has been used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub spent: Money,
    pub budget: Money,
    /// `spent / budget` capped at 1.0; 0 when the budget is 0
    pub ratio: f64,
}

impl BudgetProgress {
    pub fn new(spent: Money, budget: Money) -> Self {
        let ratio = if budget.is_positive() {
            (spent.as_f64() / budget.as_f64()).min(1.0)
        } else {
            0.0
        };
        Self {
            spent,
            budget,
            ratio,
        }
    }

    /// Whether spending has gone past the budget
    pub fn is_over(&self) -> bool {
        self.budget.is_positive() && self.spent > self.budget
    }
}

/// Records dated within `start..=end` (both bounds included)
pub fn filter_by_date_range(records: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// Sum of all amounts; zero for no records
pub fn total_amount(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}

/// Sum of amounts per category. Only categories present in `records` appear.
pub fn group_by_category(records: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in records {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Sum of amounts per calendar month, oldest month first
pub fn group_by_month(records: &[Expense]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<(i32, u32), Money> = BTreeMap::new();
    for expense in records {
        *totals
            .entry((expense.date.year(), expense.date.month()))
            .or_default() += expense.amount;
    }

    totals
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal {
            month: format!("{:04}-{:02}", year, month),
            total,
        })
        .collect()
}

/// Budget consumption for every category that has a budget row
///
/// Categories with spending but no budget are not reported.
pub fn budget_progress(
    spent_by_category: &BTreeMap<String, Money>,
    budgets: &BTreeMap<String, Money>,
) -> BTreeMap<String, BudgetProgress> {
    budgets
        .iter()
        .map(|(category, budget)| {
            let spent = spent_by_category
                .get(category)
                .copied()
                .unwrap_or_default();
            (category.clone(), BudgetProgress::new(spent, *budget))
        })
        .collect()
}

/// Records whose month number matches `today`'s month number
///
/// The year is not compared: an expense from the same month of an earlier
/// year counts toward this month's budget when it is inside the selected
/// range.
pub fn current_month_records(records: &[Expense], today: NaiveDate) -> Vec<Expense> {
    records
        .iter()
        .filter(|e| e.date.month() == today.month())
        .cloned()
        .collect()
}

/// Spending per category used by the budget tracker: the selected date
/// range intersected with the current month
pub fn budget_spending(
    ledger: &[Expense],
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> BTreeMap<String, Money> {
    let in_range = filter_by_date_range(ledger, start, end);
    group_by_category(&current_month_records(&in_range, today))
}

/// Earliest and latest expense dates, or `None` for an empty ledger
pub fn date_bounds(records: &[Expense]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|e| e.date).min()?;
    let max = records.iter().map(|e| e.date).max()?;
    Some((min, max))
}

/// Each category's share of `total`, as a percentage
pub fn category_shares(by_category: &BTreeMap<String, Money>, total: Money) -> Vec<(String, Money, f64)> {
    let mut shares: Vec<_> = by_category
        .iter()
        .map(|(category, amount)| {
            let percentage = if total.is_zero() {
                0.0
            } else {
                amount.as_f64() / total.as_f64() * 100.0
            };
            (category.clone(), *amount, percentage)
        })
        .collect();

    // Largest spending first
    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    shares
}
