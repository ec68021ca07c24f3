//! Domain models for responder
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Question`] - Top-level entry with author, summary and its answers
//! - [`Answer`] - A reply nested under exactly one question

mod answer;
mod question;

pub use answer::Answer;
pub use question::Question;
