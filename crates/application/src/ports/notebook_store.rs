//! Notebook store port - Interface for notebook entry persistence

use async_trait::async_trait;
use domain::{EntryId, NotebookEntry};
use parking_lot::Mutex;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for notebook entry persistence
///
/// The store is append-only: entries are never updated or deleted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotebookStore: Send + Sync {
    /// Append an entry, returning it as persisted
    async fn append(&self, entry: NotebookEntry) -> Result<NotebookEntry, ApplicationError>;

    /// List all entries in append order (oldest first)
    async fn list_all(&self) -> Result<Vec<NotebookEntry>, ApplicationError>;

    /// Fetch a single entry by id, `None` when absent
    async fn get(&self, id: &EntryId) -> Result<Option<NotebookEntry>, ApplicationError>;

    /// Generate a fresh entry id
    fn new_id(&self) -> EntryId {
        EntryId::new()
    }
}

/// In-memory notebook store for tests and local development
#[derive(Debug, Default)]
pub struct InMemoryNotebookStore {
    entries: Mutex<Vec<NotebookEntry>>,
}

impl InMemoryNotebookStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl NotebookStore for InMemoryNotebookStore {
    async fn append(&self, entry: NotebookEntry) -> Result<NotebookEntry, ApplicationError> {
        self.entries.lock().push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<NotebookEntry>, ApplicationError> {
        Ok(self.entries.lock().clone())
    }

    async fn get(&self, id: &EntryId) -> Result<Option<NotebookEntry>, ApplicationError> {
        Ok(self
            .entries
            .lock()
            .iter()
            .find(|entry| entry.id == *id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_then_list_preserves_order() {
        let store = InMemoryNotebookStore::new();

        let a = NotebookEntry::new(EntryId::new(), "a", "A", vec![], vec![]);
        let b = NotebookEntry::new(EntryId::new(), "b", "B", vec![], vec![]);
        let c = NotebookEntry::new(EntryId::new(), "c", "C", vec![], vec![]);

        store.append(a.clone()).await.unwrap();
        store.append(b.clone()).await.unwrap();
        store.append(c.clone()).await.unwrap();

        let entries = store.list_all().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, a.id);
        assert_eq!(entries[1].id, b.id);
        assert_eq!(entries[2].id, c.id);
    }

    #[tokio::test]
    async fn get_finds_entry_by_id() {
        let store = InMemoryNotebookStore::new();
        let entry = NotebookEntry::new(EntryId::new(), "hola", "Hola", vec![], vec![]);
        let id = entry.id;

        store.append(entry).await.unwrap();

        let found = store.get(&id).await.unwrap().unwrap();
        assert_eq!(found.original_text, "hola");
    }

    #[tokio::test]
    async fn get_missing_entry_is_none() {
        let store = InMemoryNotebookStore::new();

        let result = store.get(&EntryId::new()).await.unwrap();

        assert!(result.is_none());
    }
}
