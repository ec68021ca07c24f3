//! HTTP-agnostic API layer
//!
//! Typed request/response structures and handlers that can be driven by
//! any HTTP server implementation or called directly.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take a repository and typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{
    create_answer, create_question, get_answer, get_question, list_answers, list_questions,
    welcome,
};
pub use types::{
    ApiResponse, CreateAnswerRequest, CreateQuestionRequest, CreatedData, WelcomeData,
};
