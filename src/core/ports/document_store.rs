//! Document store port
//!
//! Defines read-all / write-all access to the single document that holds
//! every question.

use crate::core::error::StorageError;

/// Whole-document storage
///
/// A store is bound to one location for its lifetime. Each call performs a
/// single full read or a single full overwrite; nothing is coordinated
/// across calls.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Read the full document text
    fn read(&self) -> Result<String, StorageError>;

    /// Replace the full document text
    fn write(&self, contents: &str) -> Result<(), StorageError>;

    /// Human-readable description of where the document lives
    fn location(&self) -> String;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn read(&self) -> Result<String, StorageError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        (**self).write(contents)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for std::sync::Arc<S> {
    fn read(&self) -> Result<String, StorageError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        (**self).write(contents)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
