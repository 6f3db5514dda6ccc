//! CLI command for CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{default_file_name, export_expenses_csv};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::resolve_range;

/// Options for exporting expenses
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: expenses_<from>_to_<to>.csv)
    pub output: Option<PathBuf>,
    /// Start date (inclusive, default: first expense)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (inclusive, default: last expense)
    #[arg(long)]
    pub to: Option<String>,
}

/// Write the expenses in the selected range to a CSV file
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> TrackerResult<()> {
    let (start, end) = resolve_range(
        storage,
        args.from.as_deref(),
        args.to.as_deref(),
        &settings.date_format,
    )?;

    let mut expenses = ExpenseService::new(storage).list(&ExpenseFilter::between(start, end))?;
    expenses.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_file_name(start, end)));
    let file = File::create(&output).map_err(|e| {
        TrackerError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;

    let count = export_expenses_csv(&expenses, BufWriter::new(file))?;
    println!("Exported {} expense(s) to {}", count, output.display());

    Ok(())
}
