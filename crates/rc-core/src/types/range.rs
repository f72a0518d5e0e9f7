//! The contiguous valid channel range.
//!
//! This module provides [`ChannelRange`], the validated `lowest..=highest`
//! pair together with the cyclic-distance arithmetic used by the click
//! calculator. Channels live on a cyclic number line: stepping up from the
//! highest channel wraps to the lowest, and stepping down from the lowest
//! wraps to the highest.

use serde::Serialize;

use crate::error::InputError;
use crate::types::Channel;

/// A validated, inclusive channel range.
///
/// Invariant: `1 <= lowest <= highest <= 10000`. Immutable once
/// constructed; [`ChannelRange::new`] is the only way to obtain one.
///
/// # Examples
///
/// ```
/// use rc_core::ChannelRange;
///
/// let range = ChannelRange::new(1, 20).unwrap();
/// assert_eq!(range.lowest(), 1);
/// assert_eq!(range.highest(), 20);
/// assert_eq!(range.channel_count(), 20);
///
/// assert!(ChannelRange::new(0, 20).is_err());
/// assert!(ChannelRange::new(30, 20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChannelRange {
    /// Lowest tunable channel.
    lowest: Channel,
    /// Highest tunable channel.
    highest: Channel,
}

impl ChannelRange {
    /// The smallest channel number any range may start at.
    pub const MIN_CHANNEL: Channel = 1;

    /// The largest channel number any range may end at.
    pub const MAX_CHANNEL: Channel = 10_000;

    /// Creates a validated channel range from raw integers.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::LowestOutOfBounds`] if `lowest` is outside
    /// `[1, 10000]`, or [`InputError::HighestOutOfBounds`] if `highest` is
    /// below `lowest` or above 10000.
    pub fn new(lowest: i64, highest: i64) -> Result<Self, InputError> {
        let low = Channel::try_from(lowest)
            .ok()
            .filter(|channel| (Self::MIN_CHANNEL..=Self::MAX_CHANNEL).contains(channel))
            .ok_or(InputError::LowestOutOfBounds { value: lowest })?;

        let high = Channel::try_from(highest)
            .ok()
            .filter(|channel| (low..=Self::MAX_CHANNEL).contains(channel))
            .ok_or(InputError::HighestOutOfBounds {
                value: highest,
                lowest: low,
            })?;

        Ok(Self {
            lowest: low,
            highest: high,
        })
    }

    /// Returns the lowest tunable channel.
    #[inline]
    #[must_use]
    pub const fn lowest(self) -> Channel {
        self.lowest
    }

    /// Returns the highest tunable channel.
    #[inline]
    #[must_use]
    pub const fn highest(self) -> Channel {
        self.highest
    }

    /// Returns the number of channels in the range (the cycle length).
    #[inline]
    #[must_use]
    pub const fn channel_count(self) -> u64 {
        (self.highest - self.lowest) as u64 + 1
    }

    /// Returns `true` if `value` is a channel inside this range.
    ///
    /// Accepts a raw `i64` so unvalidated input values can be checked
    /// without conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc_core::ChannelRange;
    ///
    /// let range = ChannelRange::new(10, 100).unwrap();
    /// assert!(range.contains(10));
    /// assert!(range.contains(55));
    /// assert!(!range.contains(9));
    /// assert!(!range.contains(-3));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        (i64::from(self.lowest)..=i64::from(self.highest)).contains(&value)
    }

    /// Returns the number of single "up" steps from `from` to `to`,
    /// wrapping past the highest channel back to the lowest.
    ///
    /// Blocked channels are not accounted for here; this is the raw cyclic
    /// distance. Zero iff `from == to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc_core::ChannelRange;
    ///
    /// let range = ChannelRange::new(1, 20).unwrap();
    /// assert_eq!(range.up_distance(5, 9), 4);
    /// assert_eq!(range.up_distance(18, 3), 5); // wraps 19, 20, 1, 2, 3
    /// assert_eq!(range.up_distance(7, 7), 0);
    /// ```
    #[must_use]
    pub fn up_distance(self, from: Channel, to: Channel) -> u64 {
        debug_assert!(self.contains(i64::from(from)) && self.contains(i64::from(to)));
        if to >= from {
            u64::from(to - from)
        } else {
            self.channel_count() - u64::from(from - to)
        }
    }

    /// Returns the number of single "down" steps from `from` to `to`,
    /// wrapping past the lowest channel back to the highest.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc_core::ChannelRange;
    ///
    /// let range = ChannelRange::new(1, 20).unwrap();
    /// assert_eq!(range.down_distance(9, 5), 4);
    /// assert_eq!(range.down_distance(3, 18), 5); // wraps 2, 1, 20, 19, 18
    /// ```
    #[inline]
    #[must_use]
    pub fn down_distance(self, from: Channel, to: Channel) -> u64 {
        self.up_distance(to, from)
    }
}
