//! In-memory document storage

use std::sync::Mutex;

use crate::core::error::StorageError;
use crate::core::ports::DocumentStore;

/// Document store holding its contents in a string
#[derive(Debug)]
pub struct MemoryStore {
    contents: Mutex<String>,
}

impl MemoryStore {
    /// Create a store with the given document text
    #[must_use]
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(contents.into()),
        }
    }

    /// Create a store holding an empty question list
    #[must_use]
    pub fn empty() -> Self {
        Self::new("[]")
    }

    /// Snapshot of the current document text
    pub fn contents(&self) -> Result<String, StorageError> {
        self.read()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self) -> Result<String, StorageError> {
        self.contents
            .lock()
            .map(|c| c.clone())
            .map_err(|_| StorageError::Poisoned)
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut guard = self.contents.lock().map_err(|_| StorageError::Poisoned)?;
        *guard = contents.to_string();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
