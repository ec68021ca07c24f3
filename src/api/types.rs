//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::core::models::Answer;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.clone()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a question
///
/// Fields are optional at the wire level so that a missing author or summary
/// is reported as a validation failure rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    /// Who is asking
    #[serde(default)]
    pub author: Option<String>,
    /// The question text
    #[serde(default)]
    pub summary: Option<String>,
    /// Answers to seed the question with
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
}

/// Request body for answering a question
#[derive(Debug, Default, Deserialize)]
pub struct CreateAnswerRequest {
    /// Who is answering
    #[serde(default)]
    pub author: Option<String>,
    /// The answer text
    #[serde(default)]
    pub summary: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Root endpoint response data
#[derive(Debug, Serialize)]
pub struct WelcomeData {
    /// Greeting
    pub message: String,
}

/// Response data for a created question or answer
#[derive(Debug, Serialize)]
pub struct CreatedData {
    /// Generated ID of the new entity
    pub id: String,
    /// Confirmation message
    pub message: String,
}
