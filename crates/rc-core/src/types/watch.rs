//! The ordered watch list.
//!
//! The watch list is the sequence of channels the user must visit, in
//! order. Repeats are allowed, including consecutive ones.

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::InputError;
use crate::types::{BlockedSet, Channel, ChannelRange};

/// A validated, ordered sequence of channels to watch.
///
/// Invariants: between 1 and 50 entries, every entry inside the owning
/// [`ChannelRange`] and absent from the [`BlockedSet`]. Immutable once
/// constructed, and never empty.
///
/// # Examples
///
/// ```
/// use rc_core::{BlockedSet, ChannelRange, WatchList};
///
/// let range = ChannelRange::new(1, 20).unwrap();
/// let blocked = BlockedSet::new(&range, 2, &[18, 19]).unwrap();
/// let watch = WatchList::new(&range, &blocked, 3, &[15, 14, 17]).unwrap();
///
/// assert_eq!(watch.len(), 3);
/// assert_eq!(watch.first(), 15);
/// assert_eq!(watch.as_slice(), &[15, 14, 17]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WatchList {
    /// The channels in viewing order.
    channels: SmallVec<[Channel; 16]>,
}

impl WatchList {
    /// The minimum number of watch entries.
    pub const MIN_WATCH: usize = 1;

    /// The maximum number of watch entries.
    pub const MAX_WATCH: usize = 50;

    /// Creates a validated watch list from raw integers.
    ///
    /// `declared` is the count announced ahead of the channel values in
    /// the raw input; it must match the number of candidates exactly.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    ///
    /// - [`InputError::WatchContainsBlocked`] if any candidate is blocked;
    /// - [`InputError::WatchCountOutOfBounds`] if `declared` is outside
    ///   `[1, 50]`;
    /// - [`InputError::WatchCountMismatch`] if `declared` differs from the
    ///   number of candidates;
    /// - [`InputError::WatchOutOfRange`] if any candidate lies outside
    ///   `range`.
    pub fn new(
        range: &ChannelRange,
        blocked: &BlockedSet,
        declared: i64,
        candidates: &[i64],
    ) -> Result<Self, InputError> {
        for &value in candidates {
            if Channel::try_from(value).is_ok_and(|channel| blocked.contains(channel)) {
                return Err(InputError::WatchContainsBlocked { channel: value });
            }
        }

        if !(Self::MIN_WATCH as i64..=Self::MAX_WATCH as i64).contains(&declared) {
            return Err(InputError::WatchCountOutOfBounds { declared });
        }

        if usize::try_from(declared) != Ok(candidates.len()) {
            return Err(InputError::WatchCountMismatch {
                declared,
                found: candidates.len(),
            });
        }

        let mut channels = SmallVec::with_capacity(candidates.len());
        for &value in candidates {
            let channel = Channel::try_from(value)
                .ok()
                .filter(|_| range.contains(value))
                .ok_or(InputError::WatchOutOfRange {
                    value,
                    lowest: range.lowest(),
                    highest: range.highest(),
                })?;
            channels.push(channel);
        }

        Ok(Self { channels })
    }

    /// Returns the first channel to watch.
    ///
    /// The watch list is never empty, so this always yields a channel.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Channel {
        self.channels[0]
    }

    /// Returns the number of watch entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns the channels as a slice, in viewing order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Channel] {
        &self.channels
    }

    /// Returns an iterator over the channels in viewing order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }
}
