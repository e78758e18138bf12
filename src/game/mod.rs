//! Game state and engine
//!
//! Root selection, the per-game session, and the engine that validates
//! submissions against it.

pub mod config;
mod engine;
mod root;
mod session;

pub use config::{GameConfig, WordListSource};
pub use engine::Engine;
pub use root::{RootSource, RootWord, select_root};
pub use session::SessionState;
