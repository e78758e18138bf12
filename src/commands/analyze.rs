//! Root analysis command
//!
//! Finds every dictionary word that can be built from a root word and the best
//! score a player could reach with them.

use crate::core::{letter_count, normalize};
use crate::rules::checks::{is_long_enough, is_not_root, is_possible};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub max_score: usize,
    /// Word length -> number of words of that length
    pub distribution: BTreeMap<usize, usize>,
    pub dictionary_size: usize,
}

/// Analyze a root against a dictionary word list
///
/// A word counts when it would pass every check except the already-used one
/// for a fresh game on `root`.
///
/// # Errors
///
/// Returns an error if the root is blank.
pub fn analyze_root<S>(root: &str, dictionary_words: &[S]) -> Result<AnalysisResult, String>
where
    S: AsRef<str> + Sync,
{
    let root = normalize(root).ok_or_else(|| "Root word must not be empty".to_string())?;

    let mut words: Vec<String> = dictionary_words
        .par_iter()
        .filter_map(|w| normalize(w.as_ref()))
        .filter(|w| is_long_enough(w) && is_not_root(w, &root) && is_possible(w, &root))
        .collect();

    words.sort_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for word in &words {
        *distribution.entry(letter_count(word)).or_insert(0) += 1;
    }
    let max_score = distribution.iter().map(|(len, count)| len * count).sum();

    Ok(AnalysisResult {
        root,
        words,
        max_score,
        distribution,
        dictionary_size: dictionary_words.len(),
    })
}
