//! Adapter implementations for port traits
//!
//! Concrete [`DocumentStore`](crate::core::ports::DocumentStore) backends:
//!
//! - `file/` - JSON document on disk
//! - `memory/` - In-process document, for tests and embedding

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
