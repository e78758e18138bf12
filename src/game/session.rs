//! Session state
//!
//! One play-through: the root word, the words accepted so far (newest first)
//! and whatever the player has typed but not yet submitted.

use super::root::{RootWord, select_root};
use crate::core::letter_count;
use rand::Rng;
use tracing::{debug, info};

/// State of a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    root: RootWord,
    used_words: Vec<String>,
    pending_input: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(RootWord::fallback())
    }
}

impl SessionState {
    /// Fresh session on a given root
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
            pending_input: String::new(),
        }
    }

    /// Start a new game with a root drawn from `words`
    ///
    /// Clears accepted words and pending input. An empty list yields the
    /// fallback root.
    pub fn start_game<S, R>(&mut self, words: &[S], rng: &mut R) -> &RootWord
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.root = select_root(words, rng);
        self.used_words.clear();
        self.pending_input.clear();

        info!(root = %self.root, fallback = self.root.is_fallback(), "new game");
        &self.root
    }

    /// Start a new game on a specific root
    pub fn restart(&mut self, root: RootWord) -> &RootWord {
        self.root = root;
        self.used_words.clear();
        self.pending_input.clear();

        info!(root = %self.root, "new game");
        &self.root
    }

    /// Record a word that has already passed validation
    ///
    /// Newest words go first. No checks happen here.
    pub fn accept_word(&mut self, word: String) {
        debug!(word = %word, "accepted");
        self.used_words.insert(0, word);
        self.pending_input.clear();
    }

    /// Total letters across all accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.used_words.iter().map(|w| letter_count(w)).sum()
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_session_is_empty_on_fallback() {
        let session = SessionState::default();
        assert_eq!(session.root().text(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn accept_prepends() {
        let mut session = SessionState::default();
        session.accept_word("silk".to_string());
        session.accept_word("worm".to_string());
        assert_eq!(session.used_words(), &["worm", "silk"]);
    }

    #[test]
    fn score_sums_lengths() {
        let mut session = SessionState::default();
        session.accept_word("silk".to_string());
        session.accept_word("worm".to_string());
        assert_eq!(session.score(), 8);

        session.accept_word("owl".to_string());
        assert_eq!(session.score(), 11);
    }

    #[test]
    fn score_counts_characters() {
        let mut session = SessionState::default();
        session.accept_word("été".to_string());
        assert_eq!(session.score(), 3);

        // Same word with combining accents
        session.accept_word("e\u{301}te\u{301}".to_string());
        assert_eq!(session.score(), 6);
    }

    #[test]
    fn start_game_resets_state() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = SessionState::default();
        session.accept_word("silk".to_string());
        session.set_pending_input("wor");

        let root = session.start_game(&["keyboard"], &mut rng).clone();

        assert_eq!(root.text(), "keyboard");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn start_game_with_empty_list_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = SessionState::new(RootWord::from_list("keyboard".to_string()));
        session.accept_word("key".to_string());

        let empty: [&str; 0] = [];
        session.start_game(&empty, &mut rng);

        assert!(session.root().is_fallback());
        assert_eq!(session.root().text(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn restart_on_given_root() {
        let mut session = SessionState::default();
        session.accept_word("silk".to_string());

        session.restart(RootWord::given("keyboard").unwrap());
        assert_eq!(session.root().text(), "keyboard");
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn accept_clears_pending_input() {
        let mut session = SessionState::default();
        session.set_pending_input("silk");
        assert_eq!(session.pending_input(), "silk");

        session.accept_word("silk".to_string());
        assert_eq!(session.pending_input(), "");
    }

    proptest! {
        #[test]
        fn score_is_always_sum_of_lengths(words in proptest::collection::vec("[a-z]{3,8}", 0..20)) {
            let mut session = SessionState::default();
            for word in &words {
                session.accept_word(word.clone());
            }
            let expected: usize = words.iter().map(String::len).sum();
            prop_assert_eq!(session.score(), expected);
            prop_assert_eq!(session.used_words().len(), words.len());
        }
    }
}
