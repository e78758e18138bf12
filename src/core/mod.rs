//! Core domain types for Word Scramble
//!
//! Normalization, letter multisets and rejection reasons. Everything here is
//! pure and independent of game state.

mod letters;
mod rejection;
mod word;

pub use letters::{LetterPool, is_derivable};
pub use rejection::RejectionReason;
pub use word::{letter_count, normalize};

/// Shortest word the game accepts, in characters
pub const MIN_WORD_LENGTH: usize = 3;

/// Root word used when no start word can be drawn
pub const FALLBACK_ROOT: &str = "silkworm";
