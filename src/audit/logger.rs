//! Append-only JSON-lines audit log

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::{AuditEntry, Audited, Change};

/// Writes changes to `audit.log`; does nothing while disabled
pub struct AuditLogger {
    log_path: PathBuf,
    enabled: bool,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Append one committed change
    ///
    /// The change is already durable when this is called, so a failure is
    /// reported as `AuditWrite` rather than as a failed mutation.
    pub fn record<T: Audited>(&self, change: Change<'_, T>) -> TrackerResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let entry = AuditEntry::from_change(&change);
        self.append(&entry).map_err(|e| TrackerError::AuditWrite {
            change: change.describe(),
            reason: e.to_string(),
        })
    }

    fn append(&self, entry: &AuditEntry) -> io::Result<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        // One write per entry keeps concurrent appends from interleaving
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        file.write_all(&line)?;
        file.flush()
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TrackerError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                )))
            }
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .map(|entry| entry.map_err(|e| TrackerError::Json(format!("Corrupt audit log: {}", e))))
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}
