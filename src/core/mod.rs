//! Core domain logic for responder
//!
//! Pure business logic with storage abstracted behind a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Question, Answer)
//! - `ports/` - Trait definitions for storage
//! - `repository` - Question/answer read and append operations
//! - `error` - Not-found and storage failures

pub mod error;
pub mod models;
pub mod ports;
pub mod repository;

pub use error::{NotFound, RepositoryError, StorageError};
pub use repository::QuestionRepository;
