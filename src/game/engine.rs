//! Main game engine
//!
//! Ties a session to its start words, dictionary and random source. This is
//! the surface a front end talks to.

use super::root::RootWord;
use super::session::SessionState;
use crate::core::RejectionReason;
use crate::rules::{Dictionary, Language, validate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Word Scramble engine
///
/// Owns exactly one session. A game is started on construction, so there is
/// always a root word to play against.
pub struct Engine<D: Dictionary> {
    session: SessionState,
    start_words: Vec<String>,
    dictionary: D,
    language: Language,
    rng: StdRng,
}

impl<D: Dictionary> Engine<D> {
    /// Create an engine with an OS-seeded random source
    ///
    /// # Parameters
    /// - `start_words`: Words a root may be drawn from (may be empty)
    /// - `dictionary`: Oracle for the real-word check
    #[must_use]
    pub fn new(start_words: Vec<String>, dictionary: D) -> Self {
        Self::with_rng(start_words, dictionary, StdRng::from_os_rng())
    }

    /// Create an engine whose root sequence is reproducible from `seed`
    #[must_use]
    pub fn with_seed(start_words: Vec<String>, dictionary: D, seed: u64) -> Self {
        Self::with_rng(start_words, dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(start_words: Vec<String>, dictionary: D, rng: StdRng) -> Self {
        let mut engine = Self {
            session: SessionState::default(),
            start_words,
            dictionary,
            language: Language::english(),
            rng,
        };
        engine.start_game();
        engine
    }

    /// Use a different language for the real-word check
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Start a new game on a freshly drawn root
    pub fn start_game(&mut self) -> &RootWord {
        self.session.start_game(&self.start_words, &mut self.rng)
    }

    /// Start a new game on a root chosen by the caller
    pub fn start_game_with_root(&mut self, root: RootWord) -> &RootWord {
        self.session.restart(root)
    }

    /// Validate a raw submission and record it if it passes
    ///
    /// Returns `Ok(None)` for blank input, which leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first check the word fails.
    pub fn submit(&mut self, raw: &str) -> Result<Option<String>, RejectionReason> {
        let result = validate(
            raw,
            self.session.root().text(),
            self.session.used_words(),
            &self.dictionary,
            &self.language,
        );

        match &result {
            Ok(Some(word)) => self.session.accept_word(word.clone()),
            Ok(None) => {}
            Err(reason) => debug!(input = raw.trim(), %reason, "rejected"),
        }

        result
    }

    /// Total letters across accepted words
    #[must_use]
    pub fn score(&self) -> usize {
        self.session.score()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.session.used_words()
    }

    #[must_use]
    pub const fn root(&self) -> &RootWord {
        self.session.root()
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn start_words(&self) -> &[String] {
        &self.start_words
    }
}
