//! Question repository
//!
//! Read and append operations over the question document. Every call is a
//! single read-transform-write cycle against the bound [`DocumentStore`];
//! nothing is cached between calls.
//!
//! Mutations work on the raw JSON entries rather than the typed models, so
//! entries a call does not touch are written back exactly as they were read,
//! including key order and fields the models do not know about.
//!
//! Two mutations racing on the same document can lose an update: both read
//! the same snapshot and the last write wins. No locking is done here.

use log::debug;
use serde_json::Value;

use super::error::{NotFound, RepositoryError, StorageError};
use super::models::{Answer, Question};
use super::ports::DocumentStore;

/// Repository over one question document
#[derive(Debug, Clone)]
pub struct QuestionRepository<S> {
    store: S,
}

impl<S: DocumentStore> QuestionRepository<S> {
    /// Bind a repository to a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// List every question in document order
    pub fn get_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        let contents = self.store.read()?;
        let questions: Vec<Question> =
            serde_json::from_str(&contents).map_err(StorageError::Malformed)?;
        debug!("Read {} question(s) from {}", questions.len(), self.store.location());
        Ok(questions)
    }

    /// Get the first question with the given ID
    pub fn get_question_by_id(&self, question_id: &str) -> Result<Question, RepositoryError> {
        self.get_questions()?
            .into_iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| NotFound::Question.into())
    }

    /// Append a question at the tail of the document
    ///
    /// The caller owns ID uniqueness; duplicates are written as-is.
    pub fn add_question(&self, question: Question) -> Result<(), RepositoryError> {
        let mut entries = self.load_raw()?;
        debug!("Adding question {}", question.id);
        entries.push(serde_json::to_value(question).map_err(StorageError::Encode)?);
        self.save(&entries)
    }

    /// Get the answers of a question
    pub fn get_answers(&self, question_id: &str) -> Result<Vec<Answer>, RepositoryError> {
        Ok(self.get_question_by_id(question_id)?.answers)
    }

    /// Get one answer of a question
    pub fn get_answer(&self, question_id: &str, answer_id: &str) -> Result<Answer, RepositoryError> {
        self.get_question_by_id(question_id)?
            .answer(answer_id)
            .cloned()
            .ok_or_else(|| NotFound::Answer.into())
    }

    /// Append an answer to a question's answer list
    ///
    /// Fails with [`NotFound::Question`] before anything is written when the
    /// question is absent. The new list is the first matching question's
    /// answers plus `answer`, and it replaces the answers of every question
    /// carrying that ID. Other questions are written back untouched.
    pub fn add_answer(&self, question_id: &str, answer: Answer) -> Result<(), RepositoryError> {
        let mut entries = self.load_raw()?;
        let first = entries
            .iter()
            .find(|e| has_id(e, question_id))
            .ok_or(NotFound::Question)?;

        let mut answers = match first.get("answers") {
            Some(Value::Array(existing)) => existing.clone(),
            _ => Vec::new(),
        };
        answers.push(serde_json::to_value(&answer).map_err(StorageError::Encode)?);

        debug!("Adding answer {} to question {question_id}", answer.id);
        for entry in entries.iter_mut().filter(|e| has_id(e, question_id)) {
            if let Value::Object(fields) = entry {
                fields.insert("answers".to_string(), Value::Array(answers.clone()));
            }
        }
        self.save(&entries)
    }

    /// Read the document as untyped entries, for read-modify-write
    fn load_raw(&self) -> Result<Vec<Value>, RepositoryError> {
        let contents = self.store.read()?;
        Ok(serde_json::from_str(&contents).map_err(StorageError::Malformed)?)
    }

    fn save(&self, entries: &[Value]) -> Result<(), RepositoryError> {
        let contents = serde_json::to_string(entries).map_err(StorageError::Encode)?;
        self.store.write(&contents)?;
        debug!("Wrote {} question(s) to {}", entries.len(), self.store.location());
        Ok(())
    }
}

fn has_id(entry: &Value, id: &str) -> bool {
    entry.get("id").and_then(Value::as_str) == Some(id)
}
