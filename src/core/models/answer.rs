//! Answer model

use serde::{Deserialize, Serialize};

/// An answer nested under a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier, generated by the caller before insertion
    pub id: String,

    /// Who answered
    pub author: String,

    /// The answer text
    pub summary: String,
}

impl Answer {
    /// Create a new answer
    #[must_use]
    pub fn new(id: impl Into<String>, author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            summary: summary.into(),
        }
    }
}
