//! Dashboard formatting for terminal output

use crate::models::{Category, Money};
use crate::reports::DashboardReport;

use super::budget::format_budget_progress;
use super::expense::format_expense_table;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render the whole dashboard
pub fn format_dashboard(report: &DashboardReport, symbol: &str) -> String {
    let mut output = String::new();

    let Some((start, end)) = report.range else {
        output.push_str("No expenses recorded yet.\n");
        return output;
    };

    output.push_str(&format!("Expense Dashboard: {} to {}\n", start, end));
    output.push_str(&separator(60));
    output.push('\n');
    output.push_str(&format!(
        "Total Spent: {}   Transactions: {}\n",
        report.total_spent.format_with_symbol(symbol),
        report.expenses.len()
    ));

    if report.is_empty() {
        output.push_str("\nNo expenses in this range.\n");
    } else {
        output.push_str("\nSpending by Category\n");
        let widest = report
            .by_category
            .first()
            .map(|c| c.amount.as_f64())
            .unwrap_or(0.0);
        for row in &report.by_category {
            output.push_str(&format!(
                "  {:<16} {:>14} {:>6}  {}\n",
                Category::display_label(&row.category),
                row.amount.format_with_symbol(symbol),
                format_percentage(row.percentage),
                format_bar(row.amount.as_f64(), widest, 20)
            ));
        }

        output.push_str("\nExpenses\n");
        output.push_str(&format_expense_table(&report.expenses, symbol));
        output.push('\n');
    }

    if !report.monthly_trend.is_empty() {
        output.push_str("\nMonthly Trend\n");
        let peak = report
            .monthly_trend
            .iter()
            .map(|m| m.total)
            .max()
            .unwrap_or_else(Money::zero);
        for month in &report.monthly_trend {
            output.push_str(&format!(
                "  {}  {:>14}  {}\n",
                month.month,
                month.total.format_with_symbol(symbol),
                format_bar(month.total.as_f64(), peak.as_f64(), 30)
            ));
        }
    }

    if !report.budgets.is_empty() {
        output.push_str("\nBudget Tracker (current month)\n");
        output.push_str(&format_budget_progress(&report.budgets, symbol));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(42.4), "42%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(20.0, 10.0, 4), "████");
        assert_eq!(format_bar(0.0, 10.0, 3), "░░░");
    }

    #[test]
    fn test_empty_dashboard() {
        let report = DashboardReport {
            range: None,
            expenses: Vec::new(),
            total_spent: Money::zero(),
            by_category: Vec::new(),
            monthly_trend: Vec::new(),
            budgets: Default::default(),
        };
        assert_eq!(format_dashboard(&report, "$"), "No expenses recorded yet.\n");
    }
}
