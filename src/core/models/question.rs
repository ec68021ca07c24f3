//! Question model
//!
//! A question owns an ordered list of answers. Answers have no identity
//! outside of the question that holds them.

use serde::{Deserialize, Serialize};

use super::Answer;

/// A question as stored in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, generated by the caller before insertion
    pub id: String,

    /// Who asked
    pub author: String,

    /// The question text
    pub summary: String,

    /// Answers in insertion order
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers
    #[must_use]
    pub fn new(id: impl Into<String>, author: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            summary: summary.into(),
            answers: Vec::new(),
        }
    }

    /// Replace the answer list
    #[must_use]
    pub fn with_answers(mut self, answers: Vec<Answer>) -> Self {
        self.answers = answers;
        self
    }

    /// Find the first answer with the given ID
    #[must_use]
    pub fn answer(&self, answer_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}
