//! Persisted search history: a single JSON file holding an array of
//! [`HistoryRecord`]s in insertion order.
//!
//! Every mutation reads the whole file, applies the change in memory and
//! rewrites the whole file. Concurrent mutations race last-writer-wins; the
//! tool is single-process and low-throughput, so there is no locking.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::model::HistoryRecord;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Absent or unreadable file reads as "no history".
    fn read(&self) -> Vec<HistoryRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    "history file {} is malformed, treating as empty: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn write(&self, records: &[HistoryRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize search history")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write history file: {}", self.path.display()))?;

        Ok(())
    }

    /// All records in storage (insertion) order.
    pub fn list(&self) -> Vec<HistoryRecord> {
        self.read()
    }

    /// Record a searched name, deduplicated case-insensitively: when the name
    /// was already stored the existing record comes back unchanged, otherwise
    /// a new record with a fresh id is appended and persisted.
    pub fn add(&self, name: &str) -> Result<HistoryRecord> {
        let mut records = self.read();

        let needle = name.to_lowercase();
        if let Some(existing) = records.iter().find(|r| r.name.to_lowercase() == needle) {
            return Ok(existing.clone());
        }

        let record = HistoryRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
        };
        records.push(record.clone());
        self.write(&records)?;

        tracing::info!("recorded '{name}' in search history");
        Ok(record)
    }

    /// Remove the record with `id`. Returns `false` when no record matched;
    /// that is "not found", not a fault.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut records = self.read();
        let before = records.len();

        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }

        self.write(&records)?;
        tracing::info!("removed history record {id}");
        Ok(true)
    }
}
