//! Pure API handlers
//!
//! These handlers contain the request-level rules (validation, ID
//! generation, error mapping) and are HTTP-agnostic. They take typed input
//! and return `Result<T, ApiError>`.

use log::debug;
use uuid::Uuid;

use crate::core::QuestionRepository;
use crate::core::models::{Answer, Question};
use crate::core::ports::DocumentStore;

use super::error::ApiError;
use super::types::{CreateAnswerRequest, CreateQuestionRequest, CreatedData, WelcomeData};

const MISSING_FIELDS: &str = "Author and summary are required";

// =============================================================================
// ROOT
// =============================================================================

/// Greeting for the root endpoint
#[must_use]
pub fn welcome() -> WelcomeData {
    WelcomeData {
        message: "Welcome to responder!".to_string(),
    }
}

// =============================================================================
// QUESTIONS
// =============================================================================

/// List all questions
pub fn list_questions<S: DocumentStore>(
    repo: &QuestionRepository<S>,
) -> Result<Vec<Question>, ApiError> {
    Ok(repo.get_questions()?)
}

/// Get a single question by ID
pub fn get_question<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    id: &str,
) -> Result<Question, ApiError> {
    Ok(repo.get_question_by_id(id)?)
}

/// Create a new question with a generated ID
pub fn create_question<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    req: &CreateQuestionRequest,
) -> Result<CreatedData, ApiError> {
    let (author, summary) = required_fields(req.author.as_deref(), req.summary.as_deref())?;

    let id = new_id();
    let question =
        Question::new(&id, author, summary).with_answers(req.answers.clone().unwrap_or_default());
    repo.add_question(question)?;
    debug!("Created question {id}");

    Ok(CreatedData {
        id,
        message: "A question has been created.".to_string(),
    })
}

// =============================================================================
// ANSWERS
// =============================================================================

/// List the answers of a question
pub fn list_answers<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    question_id: &str,
) -> Result<Vec<Answer>, ApiError> {
    Ok(repo.get_answers(question_id)?)
}

/// Get a single answer of a question
pub fn get_answer<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    question_id: &str,
    answer_id: &str,
) -> Result<Answer, ApiError> {
    Ok(repo.get_answer(question_id, answer_id)?)
}

/// Answer a question with a generated answer ID
pub fn create_answer<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    question_id: &str,
    req: &CreateAnswerRequest,
) -> Result<CreatedData, ApiError> {
    let (author, summary) = required_fields(req.author.as_deref(), req.summary.as_deref())?;

    let id = new_id();
    repo.add_answer(question_id, Answer::new(&id, author, summary))?;
    debug!("Created answer {id} on question {question_id}");

    Ok(CreatedData {
        id,
        message: "An answer has been created.".to_string(),
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn required_fields<'a>(
    author: Option<&'a str>,
    summary: Option<&'a str>,
) -> Result<(&'a str, &'a str), ApiError> {
    match (author, summary) {
        (Some(a), Some(s)) if !a.trim().is_empty() && !s.trim().is_empty() => Ok((a, s)),
        _ => Err(ApiError::bad_request(MISSING_FIELDS)),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
