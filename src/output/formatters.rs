//! Formatting utilities for terminal output

use crate::core::{RejectionReason, letter_count};
use colored::Colorize;

/// Circled-number badge for a word's length, e.g. `④` for "silk"
///
/// Lengths past twenty fall back to `(n)`.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = letter_count(word);
    match len {
        // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Rejection title and message on two lines, colored for the terminal
#[must_use]
pub fn format_rejection(reason: RejectionReason, root: &str) -> String {
    format!(
        "{} {}\n  {}",
        "✗".red().bold(),
        reason.title().red().bold(),
        reason.message(root).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_for_short_words() {
        assert_eq!(length_badge("owl"), "③");
        assert_eq!(length_badge("silk"), "④");
        assert_eq!(length_badge("silkworm"), "⑧");
    }

    #[test]
    fn badge_counts_characters() {
        assert_eq!(length_badge("été"), "③");
    }

    #[test]
    fn badge_for_long_words() {
        assert_eq!(length_badge(&"a".repeat(20)), "⑳");
        assert_eq!(length_badge(&"a".repeat(21)), "(21)");
    }

    #[test]
    fn rejection_includes_title_and_message() {
        let text = format_rejection(RejectionReason::NotDerivable, "silkworm");
        assert!(text.contains("Word not possible"));
        assert!(text.contains("You can't spell that word from 'silkworm'!"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
