//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a newline-delimited file
///
/// Every line is normalized (trimmed, lowercased); blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content.lines().filter_map(normalize).collect();
    debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(words)
}

/// Load words from a file, yielding an empty list if it cannot be read
///
/// An empty start-word list makes root selection fall back to its default word,
/// so a missing file degrades the game instead of aborting it.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    load_from_file(path).unwrap_or_else(|err| {
        warn!(path = %path.display(), error = %err, "could not read word list");
        Vec::new()
    })
}

/// Convert embedded string slice to an owned, normalized word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
