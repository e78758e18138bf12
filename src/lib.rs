//! Word Scramble
//!
//! Build as many words as you can from the letters of a root word. Each
//! accepted word scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RejectionReason;
//! use word_scramble::game::Engine;
//! use word_scramble::rules::{Language, WordListDictionary};
//!
//! let dictionary = WordListDictionary::new(Language::english(), ["silk", "worm"]);
//! let mut engine = Engine::with_seed(vec!["silkworm".to_string()], dictionary, 7);
//!
//! assert_eq!(engine.submit("Silk"), Ok(Some("silk".to_string())));
//! assert_eq!(engine.submit("silk"), Err(RejectionReason::AlreadyUsed));
//! assert_eq!(engine.score(), 4);
//! ```

// Core domain types
pub mod core;

// Validation rules and dictionaries
pub mod rules;

// Sessions, root selection and the engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
