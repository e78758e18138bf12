//! Game configuration
//!
//! Where start words and dictionary words come from, and how the engine's
//! random source is seeded.

use super::engine::Engine;
use crate::rules::{Language, WordListDictionary};
use crate::wordlists::loader::{load_or_empty, words_from_slice};
use crate::wordlists::START_WORDS;
use std::convert::Infallible;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Source of a word list: the embedded copy or a file on disk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl FromStr for WordListSource {
    type Err = Infallible;

    /// `"embedded"` selects the built-in list; anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Everything needed to build an [`Engine`]
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub start_words: WordListSource,
    pub dictionary: WordListSource,
    pub language: Language,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load the start words
    ///
    /// Never fails: an unreadable file yields an empty list, and the engine
    /// then plays on the fallback root.
    #[must_use]
    pub fn load_start_words(&self) -> Vec<String> {
        match &self.start_words {
            WordListSource::Embedded => words_from_slice(START_WORDS),
            WordListSource::File(path) => load_or_empty(path),
        }
    }

    /// Load the dictionary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a dictionary file cannot be read, or if the
    /// embedded dictionary is asked for in a language it does not cover.
    /// Either way every word would be rejected, so this is not papered over.
    pub fn load_dictionary(&self) -> io::Result<WordListDictionary> {
        match &self.dictionary {
            WordListSource::Embedded => {
                let dictionary = WordListDictionary::embedded();
                if dictionary.language() != &self.language {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "embedded dictionary is '{}', not '{}'; pass a dictionary file with --dictionary",
                            dictionary.language(),
                            self.language
                        ),
                    ));
                }
                Ok(dictionary)
            }
            WordListSource::File(path) => {
                WordListDictionary::from_file(self.language.clone(), path)
            }
        }
    }

    /// Build an engine with a game already started
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the dictionary cannot be loaded for the
    /// configured language.
    pub fn build_engine(&self) -> io::Result<Engine<WordListDictionary>> {
        let start_words = self.load_start_words();
        let dictionary = self.load_dictionary()?;
        info!(
            start_words = start_words.len(),
            dictionary = dictionary.len(),
            language = %self.language,
            "word lists loaded"
        );

        let engine = match self.seed {
            Some(seed) => Engine::with_seed(start_words, dictionary, seed),
            None => Engine::new(start_words, dictionary),
        };
        Ok(engine.with_language(self.language.clone()))
    }
}
