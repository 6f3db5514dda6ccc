//! Dashboard report
//!
//! Everything the summary screen shows for a date range: the matching
//! expenses, totals by category, the monthly trend and budget use.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{Expense, Money};
use crate::services::expense::validate_range;
use crate::storage::{LedgerStore, Storage};

use super::aggregate::{
    budget_progress, budget_spending, category_shares, date_bounds, filter_by_date_range,
    group_by_category, group_by_month, total_amount, BudgetProgress, MonthlyTotal,
};

/// Spending for one category within the report range
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: Money,
    /// Share of the range total, 0-100
    pub percentage: f64,
}

/// Dashboard for a date range
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// `None` when the ledger is empty and no range was given
    pub range: Option<(NaiveDate, NaiveDate)>,
    /// Expenses inside the range, oldest first
    pub expenses: Vec<Expense>,
    pub total_spent: Money,
    /// Largest category first
    pub by_category: Vec<CategorySpending>,
    /// Every month in the ledger, regardless of the selected range
    pub monthly_trend: Vec<MonthlyTotal>,
    pub budgets: BTreeMap<String, BudgetProgress>,
}

impl DashboardReport {
    /// Build the dashboard
    ///
    /// Missing bounds default to the earliest and latest expense dates.
    pub fn generate(
        storage: &Storage,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> TrackerResult<Self> {
        let mut ledger = storage.ledger().list()?;
        ledger.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let range = match (date_bounds(&ledger), start, end) {
            (_, Some(s), Some(e)) => Some((s, e)),
            (Some((min, max)), s, e) => Some((s.unwrap_or(min), e.unwrap_or(max))),
            (None, Some(s), None) => Some((s, today)),
            (None, None, Some(e)) => Some((e, e)),
            (None, None, None) => None,
        };

        let expenses = match range {
            Some((s, e)) => {
                validate_range(s, e)?;
                filter_by_date_range(&ledger, s, e)
            }
            None => Vec::new(),
        };

        let total_spent = total_amount(&expenses);
        let by_category = category_shares(&group_by_category(&expenses), total_spent)
            .into_iter()
            .map(|(category, amount, percentage)| CategorySpending {
                category,
                amount,
                percentage,
            })
            .collect();

        let spent = match range {
            Some((s, e)) => budget_spending(&ledger, s, e, today),
            None => BTreeMap::new(),
        };
        let budgets = budget_progress(&spent, &storage.budgets.get_all()?);

        Ok(Self {
            range,
            expenses,
            total_spent,
            by_category,
            monthly_trend: group_by_month(&ledger),
            budgets,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Categories whose spending has passed their budget
    pub fn over_budget(&self) -> Vec<&str> {
        self.budgets
            .iter()
            .filter(|(_, p)| p.is_over())
            .map(|(c, _)| c.as_str())
            .collect()
    }
}
