//! Core domain types for Wordle
//!
//! Words, game variants and the feedback evaluator. Everything here is pure
//! and deterministic.

mod mode;
mod verdict;
mod word;

pub use mode::GameMode;
pub use verdict::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
