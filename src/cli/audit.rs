//! CLI command for viewing the audit log

use clap::Args;

use crate::error::TrackerResult;
use crate::storage::Storage;

/// Options for the audit log listing
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Number of recent entries to show
    #[arg(short, long, default_value = "20")]
    pub count: usize,
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, args: AuditArgs) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(args.count)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
