//! Request routing
//!
//! Maps a method, URL and raw body to an API handler and renders the result
//! as a status code plus JSON envelope.

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::Method;

use crate::api::{self, ApiError, ApiResponse};
use crate::core::QuestionRepository;
use crate::core::ports::DocumentStore;

/// Message for any route that matches nothing
pub const NOT_FOUND_MESSAGE: &str = "Couldn't find a page";

/// A rendered response: status code and JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Serialized JSON envelope
    pub body: String,
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route a request to its handler
///
/// Query strings and trailing slashes are ignored when matching.
pub fn route<S: DocumentStore>(
    repo: &QuestionRepository<S>,
    method: &Method,
    url: &str,
    body: &str,
) -> HttpReply {
    let path = url.split('?').next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        (&Method::Get, []) => success(api::welcome()),

        (&Method::Get, ["questions"]) => handle_result(api::list_questions(repo)),
        (&Method::Post, ["questions"]) => match parse_body(body) {
            Ok(req) => created(api::create_question(repo, &req)),
            Err(e) => error_reply(&e),
        },

        (&Method::Get, ["questions", id]) => handle_result(api::get_question(repo, id)),

        (&Method::Get, ["questions", id, "answers"]) => handle_result(api::list_answers(repo, id)),
        (&Method::Post, ["questions", id, "answers"]) => match parse_body(body) {
            Ok(req) => created(api::create_answer(repo, id, &req)),
            Err(e) => error_reply(&e),
        },

        (&Method::Get, ["questions", id, "answers", answer_id]) => {
            handle_result(api::get_answer(repo, id, answer_id))
        },

        _ => not_found(),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Parse a JSON body; an empty body reads as an empty object
fn parse_body<T: DeserializeOwned + Default>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE RENDERING
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> HttpReply {
    match result {
        Ok(data) => success(data),
        Err(e) => error_reply(&e),
    }
}

fn created<T: Serialize>(result: Result<T, ApiError>) -> HttpReply {
    match result {
        Ok(data) => json_reply(&ApiResponse::success(data), 201),
        Err(e) => error_reply(&e),
    }
}

fn success<T: Serialize>(data: T) -> HttpReply {
    json_reply(&ApiResponse::success(data), 200)
}

/// Render an API error as its status code and error envelope
pub fn error_reply(error: &ApiError) -> HttpReply {
    let response = ApiResponse::<()>::error(error);
    json_reply(&response, error.status_code())
}

fn not_found() -> HttpReply {
    error_reply(&ApiError::not_found(NOT_FOUND_MESSAGE))
}

fn json_reply<T: Serialize>(data: &T, status: u16) -> HttpReply {
    let body = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    HttpReply { status, body }
}
