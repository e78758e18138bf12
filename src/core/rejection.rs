//! Rejection reasons for submitted words

use thiserror::Error;

/// Why a submitted word was turned down
///
/// `Display` gives the short title; [`RejectionReason::message`] gives the
/// longer line shown beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    /// Fewer than three letters
    #[error("Word too short")]
    TooShort,
    /// Same as the root word
    #[error("Word is the one given")]
    EqualsRoot,
    /// Already accepted this session
    #[error("Word used already")]
    AlreadyUsed,
    /// Uses letters the root doesn't have (or more of them than it has)
    #[error("Word not possible")]
    NotDerivable,
    /// Not in the dictionary
    #[error("Word not recognized")]
    NotARealWord,
}

impl RejectionReason {
    /// Every reason, in the order the validation pipeline checks for them
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::EqualsRoot,
        Self::AlreadyUsed,
        Self::NotDerivable,
        Self::NotARealWord,
    ];

    /// Short title for the rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::EqualsRoot => "Word is the one given",
            Self::AlreadyUsed => "Word used already",
            Self::NotDerivable => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Explanatory message; `root` is quoted for [`RejectionReason::NotDerivable`]
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::TooShort => "You can do better than that".to_string(),
            Self::EqualsRoot => "You didn't think it would be that easy did you?".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotDerivable => format!("You can't spell that word from '{root}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}
