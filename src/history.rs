// src/history.rs
//! Append-only store of analysis session summaries.
//!
//! One record is written per analysis run. Records carry only summary
//! fields, never the snippet itself. Reads come back newest first.

use crate::error::{Result, SenseiError};
use crate::store::atomic_write;
use crate::types::AnalysisSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "history.json";

/// Stored summary of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub code_length: usize,
    pub issue_count: usize,
    pub headline: String,
}

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(HISTORY_FILE))
    }

    /// Appends one record. The id is one past the highest stored id; the
    /// timestamp is captured here.
    ///
    /// # Errors
    /// Returns error if the store file cannot be read or written.
    pub fn record(&self, summary: &AnalysisSummary) -> Result<SessionRecord> {
        let mut records = self.load()?;
        let id = records.iter().map(|r| r.id).max().map_or(1, |m| m + 1);
        let record = SessionRecord {
            id,
            timestamp: Utc::now(),
            code_length: summary.code_length,
            issue_count: summary.issue_count,
            headline: summary.headline.clone(),
        };
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// All stored sessions, newest first.
    ///
    /// # Errors
    /// Returns error if the store file cannot be read or parsed.
    pub fn sessions(&self) -> Result<Vec<SessionRecord>> {
        let mut records = self.load()?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    // Missing file reads as an empty history.
    fn load(&self) -> Result<Vec<SessionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| SenseiError::io(e, &self.path))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, records: &[SessionRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        atomic_write(&self.path, &content)
    }
}
