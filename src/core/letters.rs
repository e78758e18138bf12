//! Letter pool for derivability checks
//!
//! A `LetterPool` is the multiset of letters in a root word. Spelling a candidate
//! draws one letter out of the pool per character; a letter that has run out
//! means the candidate cannot be built from the root.

use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Multiset of the letters available in a root word
///
/// Letters are grapheme clusters, so an accented letter written with a
/// combining mark is a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<String, usize>,
}

impl LetterPool {
    /// Build a pool from every letter of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for letter in word.graphemes(true) {
            *counts.entry(letter.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if none is left.
    pub fn take(&mut self, letter: &str) -> bool {
        match self.counts.get_mut(letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy; the pool itself is not consumed.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut pool = self.clone();
        word.graphemes(true).all(|letter| pool.take(letter))
    }
}

/// Check whether `word` is a multiset subset of `root`'s letters
///
/// # Examples
/// ```
/// use word_scramble::core::is_derivable;
///
/// assert!(is_derivable("silk", "silkworm"));
/// assert!(!is_derivable("silks", "silkworm"));
/// ```
#[must_use]
pub fn is_derivable(word: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(word)
}
