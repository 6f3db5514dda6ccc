//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! a ledger of dated expenses, monthly recurring charges that can be
//! materialized into the ledger, per-category budgets and the aggregations
//! behind the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, recurring rules, budgets, money)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and business logic
//! - `audit`: Audit logging system
//! - `reports`: Aggregations and the dashboard report
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?.with_audit(settings.audit_enabled);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
