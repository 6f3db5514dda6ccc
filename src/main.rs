use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_audit_command, handle_budget_command, handle_expense_command, handle_export_command,
    handle_recurring_command, handle_report_command, AuditArgs, BudgetCommands, ExpenseCommands,
    ExportArgs, RecurringCommands, ReportArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record daily expenses, set up monthly recurring charges, \
                  keep per-category budgets and review where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Recurring monthly expenses
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// Category budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show the spending dashboard
    #[command(alias = "dashboard")]
    Report(ReportArgs),

    /// Export expenses to CSV
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit(AuditArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn open_storage(paths: TrackerPaths, settings: &Settings) -> Result<Storage> {
    Ok(Storage::open(paths)?.with_audit(settings.audit_enabled))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - personal expense tracking");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Expense(cmd) => {
            handle_expense_command(&open_storage(paths, &settings)?, &settings, cmd)?;
        }
        Commands::Recurring(cmd) => {
            handle_recurring_command(&open_storage(paths, &settings)?, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&open_storage(paths, &settings)?, &settings, cmd)?;
        }
        Commands::Report(args) => {
            handle_report_command(&open_storage(paths, &settings)?, &settings, args)?;
        }
        Commands::Export(args) => {
            handle_export_command(&open_storage(paths, &settings)?, &settings, args)?;
        }
        Commands::Audit(args) => {
            handle_audit_command(&open_storage(paths, &settings)?, args)?;
        }
        Commands::Init => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expense expense add <name> <amount> --category Food' to record an expense.");
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
