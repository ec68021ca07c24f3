//! File-based document storage
//!
//! Implements `DocumentStore` over a single JSON file.

mod store;

pub use store::{EMPTY_DOCUMENT, JsonFileStore};
