//! Dictionary lookups
//!
//! Defines the Dictionary trait the real-word check delegates to, and a
//! word-list backed implementation.

use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Language tag a dictionary answers for (e.g. `"en"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Create a language from its tag; tags compare case-insensitively
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new("en")
    }

    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that can tell whether a word is real in a given language
pub trait Dictionary {
    /// `word` is already normalized (trimmed, lowercase)
    fn is_real_word(&self, word: &str, language: &Language) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        (**self).is_real_word(word, language)
    }
}

/// Dictionary backed by an in-memory set of words for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any iterator of words
    ///
    /// Words are normalized; blank entries are dropped.
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Language::english(), DICTIONARY.iter().copied())
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(language: Language, path: P) -> io::Result<Self> {
        Ok(Self::new(language, load_from_file(path)?))
    }

    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word (arbitrary order)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        *language == self.language && self.words.contains(word)
    }
}
