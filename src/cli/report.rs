//! Dashboard CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_dashboard;
use crate::error::TrackerResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

use super::{parse_date, today};

/// Options for the dashboard
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Start date (inclusive, default: first expense)
    #[arg(long)]
    pub from: Option<String>,
    /// End date (inclusive, default: last expense)
    #[arg(long)]
    pub to: Option<String>,
}

/// Print the dashboard for the selected range
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> TrackerResult<()> {
    let format = settings.date_format.as_str();
    let from = args.from.map(|s| parse_date(&s, format)).transpose()?;
    let to = args.to.map(|s| parse_date(&s, format)).transpose()?;

    let report = DashboardReport::generate(storage, from, to, today())?;
    print!("{}", format_dashboard(&report, &settings.currency_symbol));

    Ok(())
}
