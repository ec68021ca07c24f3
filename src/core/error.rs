//! Repository error types

use thiserror::Error;

/// Which entity a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotFound {
    /// No question with the requested ID
    #[error("Question does not exist.")]
    Question,
    /// The question exists but holds no answer with the requested ID
    #[error("Answer does not exist.")]
    Answer,
}

/// The persistence layer could not complete a read or write
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the document failed (missing file, permissions, ...)
    #[error("failed to read {location}: {source}")]
    Read {
        /// Where the document lives
        location: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the document failed
    #[error("failed to write {location}: {source}")]
    Write {
        /// Where the document lives
        location: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of questions
    #[error("malformed document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The question list could not be encoded
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// An in-memory store lock was poisoned by a panicking writer
    #[error("document lock poisoned")]
    Poisoned,
}

/// Any failure surfaced by [`QuestionRepository`](super::repository::QuestionRepository)
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A requested question or answer has no match
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The document could not be read, parsed, encoded or written
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RepositoryError {
    /// Whether this is a not-found failure (as opposed to storage)
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
