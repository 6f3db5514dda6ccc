//! Recurring rule repository for JSON storage
//!
//! Manages loading and saving recurring rules to recurring.json

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{NewRecurringRule, RecurringRule, RuleId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_guard, write_guard};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct RecurringData {
    next_id: RuleId,
    rules: Vec<RecurringRule>,
}

impl Default for RecurringData {
    fn default() -> Self {
        Self {
            next_id: RuleId::new(1),
            rules: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct RuleState {
    next_id: RuleId,
    rules: BTreeMap<RuleId, RecurringRule>,
}

impl RuleState {
    fn to_file_data(&self) -> RecurringData {
        RecurringData {
            next_id: self.next_id,
            rules: self.rules.values().cloned().collect(),
        }
    }
}

/// Repository for recurring rule persistence
pub struct RecurringRepository {
    path: PathBuf,
    state: RwLock<RuleState>,
}

impl RecurringRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(RuleState {
                next_id: RuleId::new(1),
                rules: BTreeMap::new(),
            }),
        }
    }

    /// Load rules from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: RecurringData = read_json(&self.path)?;
        let mut state = write_guard(&self.state)?;

        state.rules = file_data.rules.into_iter().map(|r| (r.id, r)).collect();
        let after_max = state
            .rules
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(RuleId::new(1));
        state.next_id = file_data.next_id.max(after_max);

        Ok(())
    }

    /// Write the current rules to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let state = read_guard(&self.state)?;
        write_json_atomic(&self.path, &state.to_file_data())
    }

    /// Add a rule with a fresh id
    pub fn add(&self, new: NewRecurringRule) -> Result<RecurringRule, TrackerError> {
        let mut state = write_guard(&self.state)?;

        let id = state.next_id;
        let rule = RecurringRule::from_new(id, new);
        state.rules.insert(id, rule.clone());
        state.next_id = id.next();

        if let Err(e) = write_json_atomic(&self.path, &state.to_file_data()) {
            state.rules.remove(&id);
            state.next_id = id;
            return Err(e);
        }

        Ok(rule)
    }

    /// All rules in id order
    pub fn list(&self) -> Result<Vec<RecurringRule>, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.rules.values().cloned().collect())
    }

    pub fn get(&self, id: RuleId) -> Result<Option<RecurringRule>, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.rules.get(&id).cloned())
    }

    /// Delete a rule; returns false when the id does not exist
    pub fn delete(&self, id: RuleId) -> Result<bool, TrackerError> {
        let mut state = write_guard(&self.state)?;

        let Some(removed) = state.rules.remove(&id) else {
            return Ok(false);
        };

        if let Err(e) = write_json_atomic(&self.path, &state.to_file_data()) {
            state.rules.insert(id, removed);
            return Err(e);
        }

        Ok(true)
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let state = read_guard(&self.state)?;
        Ok(state.rules.len())
    }
}
