//! Port traits (interfaces) for external dependencies
//!
//! The repository depends only on these traits, never on a concrete
//! storage backend. Implementations live in the `adapters` module.

mod document_store;

#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::DocumentStore;
