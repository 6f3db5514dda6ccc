//! Recurring rule display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, RecurringRule};
use crate::services::MaterializeOutcome;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Day")]
    day: u32,
}

/// Format recurring rules as a table
pub fn format_rule_table(rules: &[RecurringRule], symbol: &str) -> String {
    if rules.is_empty() {
        return "No recurring expenses set up.\n".to_string();
    }

    let rows = rules.iter().map(|r| RuleRow {
        id: r.id.to_string(),
        name: r.name.clone(),
        category: Category::display_label(&r.category),
        amount: r.amount.format_with_symbol(symbol),
        day: r.day_of_month,
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One line per appended expense and per skipped rule
pub fn format_materialize_outcome(outcome: &MaterializeOutcome, symbol: &str) -> String {
    let mut output = format!(
        "Added {} recurring expense(s), skipped {}.\n",
        outcome.appended.len(),
        outcome.skipped.len()
    );

    for expense in &outcome.appended {
        output.push_str(&format!(
            "  + {} {} {}\n",
            expense.date.format("%Y-%m-%d"),
            expense.name,
            expense.amount.format_with_symbol(symbol)
        ));
    }
    for skipped in &outcome.skipped {
        output.push_str(&format!(
            "  - {} (day {}): {}\n",
            skipped.rule.name, skipped.rule.day_of_month, skipped.reason
        ));
    }

    output
}
