//! Candidate word normalization
//!
//! Raw player input is trimmed and lowercased before any rule looks at it.

use unicode_segmentation::UnicodeSegmentation;

/// Normalize a raw submission
///
/// Trims surrounding whitespace and lowercases. Returns `None` when nothing
/// is left, which callers treat as "nothing submitted".
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk \n").as_deref(), Some("silk"));
/// assert_eq!(normalize(" \t "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() { None } else { Some(word) }
}

/// Length of a word in visible characters
///
/// Counts extended grapheme clusters, so a letter followed by a combining
/// accent is one letter, not two code points.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}
