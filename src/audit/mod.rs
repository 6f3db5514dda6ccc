//! Audit logging for the expense tracker
//!
//! Records every create, update and delete made through the service layer,
//! with before/after values, in an append-only JSON-lines file.
//!
//! - `Change`: a committed create, update or delete of an `Audited` record.
//! - `AuditEntry`: the logged snapshot of a change.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Audited, Change, EntityType, Operation};
pub use logger::AuditLogger;
