//! Root word selection
//!
//! Draws the root word for a new game uniformly from a start-word list. An
//! empty or unreadable list never fails the game: it falls back to
//! [`FALLBACK_ROOT`].

use crate::core::{FALLBACK_ROOT, normalize};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use tracing::warn;

/// Where a root word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// Drawn from the start-word list
    WordList,
    /// No usable start word; the fixed fallback was used
    Fallback,
    /// Supplied directly by the caller
    Given,
}

/// The word every submission in a game is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    source: RootSource,
}

impl RootWord {
    /// Root drawn from a word list; `text` must already be normalized
    pub(crate) fn from_list(text: String) -> Self {
        Self {
            text,
            source: RootSource::WordList,
        }
    }

    /// A root chosen by the caller
    ///
    /// Returns `None` if `text` is blank once normalized.
    #[must_use]
    pub fn given(text: &str) -> Option<Self> {
        normalize(text).map(|text| Self {
            text,
            source: RootSource::Given,
        })
    }

    /// The fixed fallback root
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_ROOT.to_string(),
            source: RootSource::Fallback,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> RootSource {
        self.source
    }

    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == RootSource::Fallback
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Pick a root word uniformly at random from `words`
///
/// Entries are normalized first; blank entries are never picked. Falls back to
/// [`FALLBACK_ROOT`] if nothing usable remains.
///
/// # Examples
/// ```
/// use word_scramble::game::select_root;
///
/// let root = select_root(&["keyboard"], &mut rand::rng());
/// assert_eq!(root.text(), "keyboard");
///
/// let empty: [&str; 0] = [];
/// let root = select_root(&empty, &mut rand::rng());
/// assert!(root.is_fallback());
/// assert_eq!(root.text(), "silkworm");
/// ```
pub fn select_root<S, R>(words: &[S], rng: &mut R) -> RootWord
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<String> = words.iter().filter_map(|w| normalize(w.as_ref())).collect();

    match candidates.choose(rng) {
        Some(word) => RootWord::from_list(word.clone()),
        None => {
            warn!(
                fallback = FALLBACK_ROOT,
                "no usable start words, using fallback root"
            );
            RootWord::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn single_word_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let root = select_root(&["keyboard"], &mut rng);
            assert_eq!(root.text(), "keyboard");
            assert_eq!(root.source(), RootSource::WordList);
        }
    }

    #[test]
    fn empty_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let words: Vec<String> = Vec::new();
        let root = select_root(&words, &mut rng);
        assert_eq!(root, RootWord::fallback());
        assert_eq!(root.text(), "silkworm");
    }

    #[test]
    fn blank_only_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let root = select_root(&["", "  ", "\r"], &mut rng);
        assert!(root.is_fallback());
    }

    #[test]
    fn blank_lines_are_never_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let words = ["", "keyboard", "   ", "elephant", ""];
        for _ in 0..100 {
            let root = select_root(&words, &mut rng);
            assert!(!root.text().is_empty());
            assert!(!root.is_fallback());
        }
    }

    #[test]
    fn picked_root_is_normalized() {
        let mut rng = StdRng::seed_from_u64(1);
        let root = select_root(&["  KeyBoard \r"], &mut rng);
        assert_eq!(root.text(), "keyboard");
    }

    #[test]
    fn selection_covers_every_word() {
        let mut rng = StdRng::seed_from_u64(3);
        let words = ["keyboard", "elephant", "mountain", "absolute"];
        let seen: HashSet<String> = (0..400)
            .map(|_| select_root(&words, &mut rng).text().to_string())
            .collect();
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn same_seed_same_root() {
        let words = ["keyboard", "elephant", "mountain", "absolute"];
        let a = select_root(&words, &mut StdRng::seed_from_u64(99));
        let b = select_root(&words, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn given_root_is_normalized() {
        let root = RootWord::given(" Keyboard ").unwrap();
        assert_eq!(root.text(), "keyboard");
        assert_eq!(root.source(), RootSource::Given);
        assert!(RootWord::given("  ").is_none());
    }

    #[test]
    fn display_shows_text() {
        assert_eq!(RootWord::fallback().to_string(), "silkworm");
    }
}
