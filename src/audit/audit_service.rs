use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

use crate::audit::audit_model::{AuditEntry, NewAuditEntry};
use crate::auth::sanitize_input;
use crate::settings::AuditConfig;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to access audit log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize audit log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Audit log file exceeds {limit_mb} MB; refusing to append")]
    FileTooLarge { limit_mb: u64 },
}

/// JSON-file-backed audit trail of generated letters.
///
/// Appends are read-modify-write over the whole file; this tool is
/// single-operator, so no file locking. The log rotates by dropping the
/// oldest entries past `max_entries` and refuses to grow past the
/// configured file size.
pub struct AuditLog {
    path: PathBuf,
    config: AuditConfig,
}

impl AuditLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, AuditConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: AuditConfig) -> Self {
        AuditLog {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Sanitizes and appends one record, rotating out the oldest entries
    /// when the log is full.
    pub fn record(&self, new_entry: NewAuditEntry) -> Result<AuditEntry, AuditError> {
        self.check_file_size()?;

        let max_len = self.config.max_input_length;
        let sanitized = NewAuditEntry {
            company_name: sanitize_input(&new_entry.company_name, max_len),
            meeting_name: sanitize_input(&new_entry.meeting_name, max_len),
            document_type: sanitize_input(&new_entry.document_type, max_len),
            details: sanitize_input(&new_entry.details, max_len),
            ..new_entry
        };

        let entry = AuditEntry::create(sanitized);

        let mut entries = self.load();
        entries.push(entry.clone());
        if entries.len() > self.config.max_entries {
            let excess = entries.len() - self.config.max_entries;
            entries.drain(..excess);
        }

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;

        Ok(entry)
    }

    /// The most recent `count` entries, newest last.
    pub fn recent(&self, count: usize) -> Vec<AuditEntry> {
        let entries = self.load();
        let skip = entries.len().saturating_sub(count);
        entries.into_iter().skip(skip).collect()
    }

    /// Entries whose company or meeting name contains `term`
    /// (case-insensitive).
    pub fn search(&self, term: &str) -> Vec<AuditEntry> {
        let term_lower = term.to_lowercase();
        self.load()
            .into_iter()
            .filter(|e| {
                e.company_name.to_lowercase().contains(&term_lower)
                    || e.meeting_name.to_lowercase().contains(&term_lower)
            })
            .collect()
    }

    // A missing file is an empty log; an unreadable one is reported and
    // treated as empty rather than blocking letter generation.
    fn load(&self) -> Vec<AuditEntry> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Audit log {} is corrupt ({}); starting fresh", self.path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        }
    }

    fn check_file_size(&self) -> Result<(), AuditError> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            let limit = self.config.max_file_size_mb * 1024 * 1024;
            if metadata.len() > limit {
                return Err(AuditError::FileTooLarge {
                    limit_mb: self.config.max_file_size_mb,
                });
            }
        }
        Ok(())
    }
}
