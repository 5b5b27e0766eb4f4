//! Document store trait and in-memory backend.
//!
//! # Responsibilities
//! - Expose the two read-only queries the controllers need
//! - Load and validate the optional seed file at startup
//!
//! # Design Decisions
//! - Trait object behind Arc so handlers stay backend-agnostic
//! - Seed problems are startup errors; query errors surface as 500s
//! - Listing is sorted by path for deterministic responses

use std::fs;
use std::path::Path;

use dashmap::DashMap;
use uuid::Uuid;

use crate::documents::model::Document;

/// Error returned by store queries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
}

/// Error raised while seeding the store at startup.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document {id} has a blank path")]
    BlankPath { id: Uuid },
}

/// Read-only document queries consumed by the versioned controllers.
pub trait DocumentStore: Send + Sync {
    /// All documents, sorted by path.
    fn list(&self) -> Result<Vec<Document>, StoreError>;

    /// One document by id, or None when absent.
    fn get(&self, id: &Uuid) -> Result<Option<Document>, StoreError>;
}

/// Concurrent in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<Uuid, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load documents from a JSON array file, refusing blank paths.
    pub fn seed_from_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path)?;
        let documents: Vec<Document> = serde_json::from_str(&content)?;
        let store = Self::new();
        for document in documents {
            store.insert(document)?;
        }
        Ok(store)
    }

    /// Insert one document, refusing blank paths.
    pub fn insert(&self, document: Document) -> Result<(), SeedError> {
        if document.has_blank_path() {
            return Err(SeedError::BlankPath { id: document.id });
        }
        self.documents.insert(document.id, document);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn list(&self) -> Result<Vec<Document>, StoreError> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| a.path.cmp(&b.path).then(a.id.cmp(&b.id)));
        Ok(documents)
    }

    fn get(&self, id: &Uuid) -> Result<Option<Document>, StoreError> {
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        let doc = Document::new("/files/a.txt");
        let id = doc.id;
        store.insert(doc.clone()).unwrap();

        assert_eq!(store.get(&id).unwrap(), Some(doc));
        assert_eq!(store.get(&Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_blank_path_refused() {
        let store = MemoryStore::new();
        let err = store.insert(Document::new("  ")).unwrap_err();
        assert!(matches!(err, SeedError::BlankPath { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_sorted_by_path() {
        let store = MemoryStore::new();
        store.insert(Document::new("/b")).unwrap();
        store.insert(Document::new("/a")).unwrap();
        store.insert(Document::new("/c")).unwrap();

        let paths: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_seed_from_file() {
        let dir = std::env::temp_dir().join("document-api-seed-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("documents.json");
        fs::write(
            &path,
            r#"[
                {"id": "8c2df888-33f7-44e5-b0cb-5cc6c528b7c3", "path": "/files/a.txt"},
                {"id": "f5a7bd3e-1f2b-4f57-9c48-0a8762f50e6d", "path": "/files/b.txt"}
            ]"#,
        )
        .unwrap();

        let store = MemoryStore::seed_from_file(&path).unwrap();
        assert_eq!(store.len(), 2);
    }
}
