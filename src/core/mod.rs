//! Core domain types for Wordle
//!
//! Words, the feedback matcher and per-letter knowledge. Everything here is
//! pure: no I/O, no logging, no randomness.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{Feedback, Mark, evaluate};
pub use knowledge::{GuessRecord, LetterKnowledge, LetterStatus};
pub use word::{WORD_LEN, Word, WordError};
