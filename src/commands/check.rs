//! Word checking command
//!
//! Plays a list of words, in order, against a fixed root and records how each
//! one was judged.

use crate::core::RejectionReason;
use crate::game::{Engine, RootWord};
use crate::rules::Dictionary;

/// Configuration for a check run
pub struct CheckConfig {
    pub root: String,
    pub words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, words: Vec<String>) -> Self {
        Self { root, words }
    }
}

/// Result of a check run
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub score: usize,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

impl CheckResult {
    /// Number of words that were accepted
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, Ok(Some(_))))
            .count()
    }
}

/// How one submission was judged
pub struct CheckStep {
    pub input: String,
    pub outcome: Result<Option<String>, RejectionReason>,
    pub score_after: usize,
}

/// Start a game on the configured root and submit every word in order
///
/// # Errors
///
/// Returns an error if the root is blank.
pub fn run_check<D: Dictionary>(
    config: CheckConfig,
    engine: &mut Engine<D>,
) -> Result<CheckResult, String> {
    let root = RootWord::given(&config.root).ok_or("Root word must not be empty")?;
    engine.start_game_with_root(root);

    let steps = config
        .words
        .into_iter()
        .map(|input| {
            let outcome = engine.submit(&input);
            CheckStep {
                input,
                outcome,
                score_after: engine.score(),
            }
        })
        .collect();

    Ok(CheckResult {
        root: engine.root().text().to_string(),
        steps,
        score: engine.score(),
        used_words: engine.used_words().to_vec(),
    })
}
