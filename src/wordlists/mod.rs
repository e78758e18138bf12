//! Word lists for Word Scramble
//!
//! Provides embedded start words and dictionary words compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
