//! API errors and their HTTP status
//!
//! [`ApiError`] serializes as the `error` object of the response envelope:
//! `{"code":"NOT_FOUND","message":"Question does not exist."}`.

use serde::Serialize;
use thiserror::Error;

use crate::core::RepositoryError;

/// Error class carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown question, answer or route (404)
    NotFound,
    /// Malformed body or missing fields (400)
    BadRequest,
    /// Storage failure (500)
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    /// HTTP status for this class
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Wire name of this class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Failure returned by every handler
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}: {message}", .code.as_str())]
pub struct ApiError {
    /// Class, which fixes the status
    pub code: ErrorCode,
    /// Text shown to the client
    pub message: String,
}

impl ApiError {
    fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 404 with the given message
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::NotFound, message)
    }

    /// 400 with the given message
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::BadRequest, message)
    }

    /// 500 with the given message
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Internal, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(kind) => Self::not_found(kind.to_string()),
            RepositoryError::Storage(storage) => Self::internal(storage.to_string()),
        }
    }
}
