//! Budget display formatting

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryBudget};
use crate::reports::BudgetProgress;

use super::report::format_bar;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Budget")]
    budget: String,
}

/// Format the budget list (every category, zero when unset)
pub fn format_budget_table(budgets: &[CategoryBudget], symbol: &str) -> String {
    let rows = budgets.iter().map(|b| BudgetRow {
        category: Category::display_label(&b.category),
        budget: b.budget.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One progress line per budgeted category
pub fn format_budget_progress(progress: &BTreeMap<String, BudgetProgress>, symbol: &str) -> String {
    if progress.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    for (category, row) in progress {
        let marker = if row.is_over() { "  OVER" } else { "" };
        output.push_str(&format!(
            "  {:<16} {} {:>4.0}%  {} / {}{}\n",
            Category::display_label(category),
            format_bar(row.ratio, 1.0, BAR_WIDTH),
            row.ratio * 100.0,
            row.spent.format_with_symbol(symbol),
            row.budget.format_with_symbol(symbol),
            marker
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_progress_lines() {
        let mut progress = BTreeMap::new();
        progress.insert(
            "Food".to_string(),
            BudgetProgress::new(Money::from_cents(15000), Money::from_cents(10000)),
        );
        progress.insert(
            "Fun".to_string(),
            BudgetProgress::new(Money::from_cents(2500), Money::from_cents(10000)),
        );

        let text = format_budget_progress(&progress, "$");
        let lines: Vec<_> = text.lines().collect();

        assert!(lines[0].contains("100%"));
        assert!(lines[0].ends_with("OVER"));
        assert!(lines[1].contains("25%"));
        assert!(lines[1].contains("$25.00 / $100.00"));
    }

    #[test]
    fn test_no_budgets() {
        assert_eq!(format_budget_progress(&BTreeMap::new(), "$"), "No budgets set.\n");
    }

    #[test]
    fn test_budget_table() {
        let table = format_budget_table(&[CategoryBudget::new("Food", Money::from_cents(50000))], "$");
        assert!(table.contains("$500.00"));
    }
}
