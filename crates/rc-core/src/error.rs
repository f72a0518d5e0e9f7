//! Error types for the rc-core crate.
//!
//! This module provides the [`InputError`] type covering every way the three
//! raw inputs (channel range, blocked list, watch list) can fail validation.

use std::fmt;

/// Which of the three raw inputs an error refers to.
///
/// # Examples
///
/// ```
/// use rc_core::InputField;
///
/// assert_eq!(InputField::Blocked.label(), "blocked list");
/// assert_eq!(InputField::Range.to_string(), "channel range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// The lowest/highest channel pair.
    Range,

    /// The blocked channel list.
    Blocked,

    /// The ordered watch list.
    Watch,
}

impl InputField {
    /// Returns a human-readable label for this field.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Range => "channel range",
            Self::Blocked => "blocked list",
            Self::Watch => "watch list",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced while validating the raw channel inputs.
///
/// Every variant corresponds to exactly one validation rule, so the message
/// always names the rule that was violated. Validation is total: any input
/// string triple produces either a valid configuration or one of these
/// variants, never a panic.
///
/// # Examples
///
/// ```
/// use rc_core::{InputError, InputField};
///
/// let error = InputError::malformed(InputField::Watch, "abc");
/// assert!(error.to_string().contains("abc"));
/// assert_eq!(error.field(), InputField::Watch);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A token in one of the inputs is not a valid integer.
    #[error("the {field} input contains a non-integer token '{token}'")]
    MalformedToken {
        /// The input the token came from.
        field: InputField,
        /// The offending token.
        token: String,
    },

    /// The range input did not contain exactly two integers.
    #[error("expected exactly two integers for the lowest and highest channel, found {found}")]
    RangeTokenCount {
        /// How many integers were actually found.
        found: usize,
    },

    /// The lowest channel is outside `[1, 10000]`.
    #[error("the lowest channel must be between 1 and 10000, got {value}")]
    LowestOutOfBounds {
        /// The rejected value.
        value: i64,
    },

    /// The highest channel is below the lowest channel or above 10000.
    #[error("the highest channel must be between the lowest channel ({lowest}) and 10000, got {value}")]
    HighestOutOfBounds {
        /// The rejected value.
        value: i64,
        /// The already-validated lowest channel.
        lowest: u16,
    },

    /// More than 40 blocked channels were declared.
    #[error("at most 40 channels can be blocked, got {declared}")]
    TooManyBlocked {
        /// The declared blocked-channel count.
        declared: i64,
    },

    /// The declared blocked count does not match the number of channels given.
    #[error("the blocked list declares {declared} channels but contains {found}")]
    BlockedCountMismatch {
        /// The declared blocked-channel count.
        declared: i64,
        /// The number of channels actually present.
        found: usize,
    },

    /// A blocked channel lies outside the validated range.
    #[error("blocked channel {value} is outside the valid range {lowest}..={highest}")]
    BlockedOutOfRange {
        /// The rejected value.
        value: i64,
        /// Lowest valid channel.
        lowest: u16,
        /// Highest valid channel.
        highest: u16,
    },

    /// A watch-list channel is also a blocked channel.
    #[error("watch channel {channel} is blocked")]
    WatchContainsBlocked {
        /// The channel present in both lists.
        channel: i64,
    },

    /// The declared watch count is outside `[1, 50]`.
    #[error("the watch list must contain between 1 and 50 channels, got {declared}")]
    WatchCountOutOfBounds {
        /// The declared watch-list length.
        declared: i64,
    },

    /// The declared watch count does not match the number of channels given.
    #[error("the watch list declares {declared} channels but contains {found}")]
    WatchCountMismatch {
        /// The declared watch-list length.
        declared: i64,
        /// The number of channels actually present.
        found: usize,
    },

    /// A watch-list channel lies outside the validated range.
    #[error("watch channel {value} is outside the valid range {lowest}..={highest}")]
    WatchOutOfRange {
        /// The rejected value.
        value: i64,
        /// Lowest valid channel.
        lowest: u16,
        /// Highest valid channel.
        highest: u16,
    },
}

impl InputError {
    /// Creates a new [`InputError::MalformedToken`] error.
    #[inline]
    pub fn malformed(field: InputField, token: impl Into<String>) -> Self {
        Self::MalformedToken {
            field,
            token: token.into(),
        }
    }

    /// Returns the input field this error refers to.
    ///
    /// Useful for reporting which of the three inputs needs correcting.
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::MalformedToken { field, .. } => *field,
            Self::RangeTokenCount { .. }
            | Self::LowestOutOfBounds { .. }
            | Self::HighestOutOfBounds { .. } => InputField::Range,
            Self::TooManyBlocked { .. }
            | Self::BlockedCountMismatch { .. }
            | Self::BlockedOutOfRange { .. } => InputField::Blocked,
            Self::WatchContainsBlocked { .. }
            | Self::WatchCountOutOfBounds { .. }
            | Self::WatchCountMismatch { .. }
            | Self::WatchOutOfRange { .. } => InputField::Watch,
        }
    }
}
