//! Individual word checks
//!
//! Each check is an independent predicate over an already-normalized word.

use super::dictionary::{Dictionary, Language};
use crate::core::{MIN_WORD_LENGTH, is_derivable, letter_count};

/// At least [`MIN_WORD_LENGTH`] characters long
#[inline]
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    letter_count(word) >= MIN_WORD_LENGTH
}

/// Not the root word itself
#[inline]
#[must_use]
pub fn is_not_root(word: &str, root: &str) -> bool {
    word != root
}

/// Not among the words already accepted
#[must_use]
pub fn is_original<S: AsRef<str>>(word: &str, used: &[S]) -> bool {
    !used.iter().any(|u| u.as_ref() == word)
}

/// Spellable from the root's letters, each used at most as often as it appears
#[inline]
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    is_derivable(word, root)
}

/// Recognized by the dictionary in `language`
#[inline]
#[must_use]
pub fn is_real<D: Dictionary>(word: &str, dictionary: &D, language: &Language) -> bool {
    dictionary.is_real_word(word, language)
}
