//! Export module for the expense tracker
//!
//! CSV export of filtered expense records (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{default_file_name, export_expenses_csv};
