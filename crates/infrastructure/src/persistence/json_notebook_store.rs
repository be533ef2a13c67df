//! JSON-file notebook store
//!
//! Persists entries as a single JSON array, rewritten in full on every
//! append. Appends are serialized behind an async mutex so concurrent
//! writers cannot lose updates. Records that fail to deserialize are
//! skipped on read and preserved verbatim on rewrite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain::{EntryId, NotebookEntry};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use application::ApplicationError;
use application::ports::NotebookStore;

/// Append-only notebook store backed by one JSON file
pub struct JsonNotebookStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonNotebookStore {
    /// Create a store for the given file path
    ///
    /// The file is created lazily on first append; a missing file reads
    /// as an empty notebook.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw record array, treating missing or unparseable files
    /// as empty
    async fn read_records(&self) -> Result<Vec<serde_json::Value>, ApplicationError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ApplicationError::Storage(format!(
                    "Failed to read notebook file: {e}"
                )));
            },
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Notebook file is not a JSON array, treating as empty");
                Ok(Vec::new())
            },
        }
    }

    async fn write_records(&self, records: &[serde_json::Value]) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ApplicationError::Storage(format!("Failed to create storage directory: {e}"))
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| ApplicationError::Storage(format!("Failed to serialize notebook: {e}")))?;

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to write notebook file: {e}"))
        })
    }

    fn parse_entries(records: Vec<serde_json::Value>, path: &Path) -> Vec<NotebookEntry> {
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping malformed notebook record");
                    None
                },
            })
            .collect()
    }
}

#[async_trait]
impl NotebookStore for JsonNotebookStore {
    async fn append(&self, entry: NotebookEntry) -> Result<NotebookEntry, ApplicationError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let record = serde_json::to_value(&entry)
            .map_err(|e| ApplicationError::Storage(format!("Failed to serialize entry: {e}")))?;
        records.push(record);

        self.write_records(&records).await?;
        debug!(entry_id = %entry.id, total = records.len(), "Appended notebook entry");

        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<NotebookEntry>, ApplicationError> {
        let records = self.read_records().await?;
        Ok(Self::parse_entries(records, &self.path))
    }

    async fn get(&self, id: &EntryId) -> Result<Option<NotebookEntry>, ApplicationError> {
        let entries = self.list_all().await?;
        Ok(entries.into_iter().find(|entry| entry.id == *id))
    }
}
