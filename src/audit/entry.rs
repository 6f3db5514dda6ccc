//! Audit log records
//!
//! An `AuditEntry` is built from a typed [`Change`] to one of the tracker's
//! entities; the entity decides its own id and label through [`Audited`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CategoryBudget, Expense, RecurringRule};

use super::diff::generate_diff;

/// Kind of mutation recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.past_tense())
    }
}

/// Which table the audited record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Expense,
    RecurringRule,
    CategoryBudget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Expense => "expense",
            EntityType::RecurringRule => "recurring rule",
            EntityType::CategoryBudget => "budget",
        })
    }
}

/// A record that can appear in the audit log
pub trait Audited: Serialize {
    const ENTITY_TYPE: EntityType;

    /// Stable key of the record (`exp-3`, `rec-1`, or the category name)
    fn audit_id(&self) -> String;

    /// Label shown next to the id, if the record has one
    fn audit_name(&self) -> Option<String> {
        None
    }
}

impl Audited for Expense {
    const ENTITY_TYPE: EntityType = EntityType::Expense;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

impl Audited for RecurringRule {
    const ENTITY_TYPE: EntityType = EntityType::RecurringRule;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

impl Audited for CategoryBudget {
    const ENTITY_TYPE: EntityType = EntityType::CategoryBudget;

    fn audit_id(&self) -> String {
        self.category.clone()
    }
}

/// A committed mutation of one record
#[derive(Debug)]
pub enum Change<'a, T> {
    Created(&'a T),
    Updated { before: &'a T, after: &'a T },
    Deleted(&'a T),
}

impl<'a, T: Audited> Change<'a, T> {
    pub fn operation(&self) -> Operation {
        match self {
            Change::Created(_) => Operation::Create,
            Change::Updated { .. } => Operation::Update,
            Change::Deleted(_) => Operation::Delete,
        }
    }

    /// The record as it stands after the change (as it was, for deletes)
    fn subject(&self) -> &'a T {
        match *self {
            Change::Created(record) | Change::Deleted(record) => record,
            Change::Updated { after, .. } => after,
        }
    }

    /// Short description such as "created expense exp-3"
    pub fn describe(&self) -> String {
        format!(
            "{} {} {}",
            self.operation(),
            T::ENTITY_TYPE,
            self.subject().audit_id()
        )
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was committed (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Changed fields, for updates only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Snapshot a change, timestamped now
    pub fn from_change<T: Audited>(change: &Change<'_, T>) -> Self {
        let snapshot = |record: &T| serde_json::to_value(record).ok();
        let (before, after) = match *change {
            Change::Created(record) => (None, snapshot(record)),
            Change::Updated { before, after } => (snapshot(before), snapshot(after)),
            Change::Deleted(record) => (snapshot(record), None),
        };
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        let subject = change.subject();
        Self {
            timestamp: Utc::now(),
            operation: change.operation(),
            entity_type: T::ENTITY_TYPE,
            entity_id: subject.audit_id(),
            entity_name: subject.audit_name(),
            before,
            after,
            diff_summary,
        }
    }
}

/// `[2025-01-15 09:30:00 UTC] created expense exp-1 (Coffee)`, with the
/// changed fields on a second line for updates
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(name) = &self.entity_name {
            write!(f, " ({})", name)?;
        }
        if let Some(diff) = &self.diff_summary {
            write!(f, "\n  changed: {}", diff)?;
        }
        Ok(())
    }
}
