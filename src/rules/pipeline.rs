//! Validation pipeline
//!
//! Runs the word checks in a fixed order and reports the first one that fails.
//! The order matters: an input can break several rules at once, and only one
//! reason is reported.

use super::checks::{is_long_enough, is_not_root, is_original, is_possible, is_real};
use super::dictionary::{Dictionary, Language};
use crate::core::{RejectionReason, normalize};

/// Validate a raw submission
///
/// Returns `Ok(None)` when the input is blank (nothing was submitted),
/// `Ok(Some(word))` with the normalized word when every check passes, or the
/// reason for the first failing check:
///
/// 1. [`RejectionReason::TooShort`]
/// 2. [`RejectionReason::EqualsRoot`]
/// 3. [`RejectionReason::AlreadyUsed`]
/// 4. [`RejectionReason::NotDerivable`]
/// 5. [`RejectionReason::NotARealWord`]
///
/// `root` is compared in normalized form; `used` is expected to hold
/// normalized words.
///
/// # Errors
///
/// Returns the [`RejectionReason`] of the first failing check.
///
/// # Examples
/// ```
/// use word_scramble::core::RejectionReason;
/// use word_scramble::rules::{Language, WordListDictionary, validate};
///
/// let dict = WordListDictionary::new(Language::english(), ["silk", "worm"]);
/// let used = vec!["worm".to_string()];
///
/// let en = Language::english();
///
/// let accepted = validate(" Silk ", "silkworm", &used, &dict, &en);
/// assert_eq!(accepted, Ok(Some("silk".to_string())));
///
/// let repeated = validate("worm", "silkworm", &used, &dict, &en);
/// assert_eq!(repeated, Err(RejectionReason::AlreadyUsed));
///
/// assert_eq!(validate("   ", "silkworm", &used, &dict, &en), Ok(None));
/// ```
pub fn validate<S, D>(
    raw: &str,
    root: &str,
    used: &[S],
    dictionary: &D,
    language: &Language,
) -> Result<Option<String>, RejectionReason>
where
    S: AsRef<str>,
    D: Dictionary,
{
    let Some(word) = normalize(raw) else {
        return Ok(None);
    };
    let root = normalize(root).unwrap_or_default();

    if !is_long_enough(&word) {
        return Err(RejectionReason::TooShort);
    }
    if !is_not_root(&word, &root) {
        return Err(RejectionReason::EqualsRoot);
    }
    if !is_original(&word, used) {
        return Err(RejectionReason::AlreadyUsed);
    }
    if !is_possible(&word, &root) {
        return Err(RejectionReason::NotDerivable);
    }
    if !is_real(&word, dictionary, language) {
        return Err(RejectionReason::NotARealWord);
    }

    Ok(Some(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::dictionary::WordListDictionary;
    use proptest::prelude::*;

    const ROOT: &str = "silkworm";

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            Language::english(),
            ["silk", "worm", "work", "milk", "silkworm", "owl", "silks", "ok"],
        )
    }

    fn check(raw: &str, used: &[&str]) -> Result<Option<String>, RejectionReason> {
        validate(raw, ROOT, used, &dictionary(), &Language::english())
    }

    #[test]
    fn accepts_valid_word() {
        assert_eq!(check("silk", &[]), Ok(Some("silk".to_string())));
    }

    #[test]
    fn accepts_normalized_input() {
        assert_eq!(check("  WoRk\n", &[]), Ok(Some("work".to_string())));
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(check("", &[]), Ok(None));
        assert_eq!(check(" \t\n", &[]), Ok(None));
    }

    #[test]
    fn rejects_short_word() {
        assert_eq!(check("ok", &[]), Err(RejectionReason::TooShort));
        assert_eq!(check(" o ", &[]), Err(RejectionReason::TooShort));
    }

    #[test]
    fn rejects_root() {
        assert_eq!(check("silkworm", &[]), Err(RejectionReason::EqualsRoot));
        assert_eq!(check(" SILKWORM ", &[]), Err(RejectionReason::EqualsRoot));
    }

    #[test]
    fn root_is_normalized_before_comparison() {
        let used: [&str; 0] = [];
        let result = validate("silkworm", " SilkWorm", &used, &dictionary(), &Language::english());
        assert_eq!(result, Err(RejectionReason::EqualsRoot));
    }

    #[test]
    fn rejects_used_word() {
        assert_eq!(check("silk", &["silk"]), Err(RejectionReason::AlreadyUsed));
        assert_eq!(check("SILK ", &["silk"]), Err(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn rejects_underivable_word() {
        assert_eq!(check("silks", &[]), Err(RejectionReason::NotDerivable));
        assert_eq!(check("bird", &[]), Err(RejectionReason::NotDerivable));
    }

    #[test]
    fn rejects_unknown_word() {
        // Spellable from the root but not in the dictionary
        assert_eq!(check("mirk", &[]), Err(RejectionReason::NotARealWord));
        assert_eq!(check("lows", &[]), Err(RejectionReason::NotARealWord));
    }

    #[test]
    fn rejects_wrong_language() {
        let used: [&str; 0] = [];
        let result = validate("silk", ROOT, &used, &dictionary(), &Language::new("fr"));
        assert_eq!(result, Err(RejectionReason::NotARealWord));
    }

    #[test]
    fn too_short_wins_over_everything() {
        // Short, used, not derivable and not real all at once
        assert_eq!(check("zz", &["zz"]), Err(RejectionReason::TooShort));
    }

    #[test]
    fn equals_root_wins_over_used() {
        assert_eq!(
            check("silkworm", &["silkworm"]),
            Err(RejectionReason::EqualsRoot)
        );
    }

    #[test]
    fn already_used_wins_over_dictionary_and_letters() {
        // "zzz" is neither derivable nor real, but it was already used
        assert_eq!(check("zzz", &["zzz"]), Err(RejectionReason::AlreadyUsed));
        assert_eq!(check("mirk", &["mirk"]), Err(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn not_derivable_wins_over_dictionary() {
        // "silks" is in the dictionary; "zzzz" is not. Both fail on letters first.
        assert_eq!(check("zzzz", &[]), Err(RejectionReason::NotDerivable));
        assert_eq!(check("silks", &[]), Err(RejectionReason::NotDerivable));
    }

    proptest! {
        #[test]
        fn short_input_is_always_too_short(word in "[a-z]{1,2}") {
            prop_assert_eq!(check(&word, &[]), Err(RejectionReason::TooShort));
        }

        #[test]
        fn used_word_is_always_already_used(word in "[a-z]{3,10}") {
            prop_assume!(word != ROOT);
            let used = [word.as_str()];
            prop_assert_eq!(check(&word, &used), Err(RejectionReason::AlreadyUsed));
        }

        #[test]
        fn root_in_any_case_is_rejected(upper in proptest::collection::vec(any::<bool>(), 8), pad in " {0,3}") {
            let cased: String = ROOT
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            let raw = format!("{pad}{cased}{pad}");
            prop_assert_eq!(check(&raw, &[]), Err(RejectionReason::EqualsRoot));
        }
    }
}
