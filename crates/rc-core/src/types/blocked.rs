//! The set of permanently blocked channels.
//!
//! Blocked channels can never be tuned to, but are skipped transparently
//! (at a press-count discount) when passed over during up/down traversal.

use serde::ser::{Serialize, Serializer};

use crate::error::InputError;
use crate::hash::{FxHashSet, fx_hash_set_with_capacity};
use crate::types::{Channel, ChannelRange};

/// A validated, deduplicated set of blocked channels.
///
/// Invariants: at most 40 entries, every entry inside the owning
/// [`ChannelRange`]. Duplicate input values collapse silently to one
/// entry. Immutable once constructed.
///
/// # Examples
///
/// ```
/// use rc_core::{BlockedSet, ChannelRange};
///
/// let range = ChannelRange::new(1, 20).unwrap();
/// let blocked = BlockedSet::new(&range, 2, &[18, 19]).unwrap();
///
/// assert!(blocked.contains(18));
/// assert!(!blocked.contains(17));
/// assert_eq!(blocked.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedSet {
    /// Deduplicated blocked channels.
    channels: FxHashSet<Channel>,
}

impl BlockedSet {
    /// The maximum number of channels that may be blocked.
    pub const MAX_BLOCKED: usize = 40;

    /// Creates a validated blocked set from raw integers.
    ///
    /// `declared` is the count announced ahead of the channel values in the
    /// raw input; it must match the number of candidates exactly (before
    /// deduplication). An empty candidate list with a declared count of
    /// zero produces an empty set.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    ///
    /// - [`InputError::TooManyBlocked`] if `declared` exceeds 40;
    /// - [`InputError::BlockedCountMismatch`] if `declared` differs from
    ///   the number of candidates;
    /// - [`InputError::BlockedOutOfRange`] if any candidate lies outside
    ///   `range`.
    pub fn new(
        range: &ChannelRange,
        declared: i64,
        candidates: &[i64],
    ) -> Result<Self, InputError> {
        if declared > Self::MAX_BLOCKED as i64 {
            return Err(InputError::TooManyBlocked { declared });
        }

        if usize::try_from(declared) != Ok(candidates.len()) {
            return Err(InputError::BlockedCountMismatch {
                declared,
                found: candidates.len(),
            });
        }

        let mut channels = fx_hash_set_with_capacity(candidates.len());
        for &value in candidates {
            let channel = Channel::try_from(value)
                .ok()
                .filter(|_| range.contains(value))
                .ok_or(InputError::BlockedOutOfRange {
                    value,
                    lowest: range.lowest(),
                    highest: range.highest(),
                })?;
            channels.insert(channel);
        }

        Ok(Self { channels })
    }

    /// Returns `true` if `channel` is blocked.
    #[inline]
    #[must_use]
    pub fn contains(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }

    /// Returns the number of distinct blocked channels.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns `true` if no channels are blocked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Returns an iterator over the blocked channels in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().copied()
    }

    /// Returns the blocked channels in ascending order.
    ///
    /// Used for deterministic serialization and display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Channel> {
        let mut channels: Vec<Channel> = self.channels.iter().copied().collect();
        channels.sort_unstable();
        channels
    }
}

// Hash sets iterate in arbitrary order; serialize sorted so reports are
// deterministic.
impl Serialize for BlockedSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> ChannelRange {
        ChannelRange::new(10, 100).unwrap()
    }

    #[test]
    fn test_blocked_new_valid() {
        let blocked = BlockedSet::new(&range(), 2, &[30, 40]).unwrap();
        assert_eq!(blocked.len(), 2);
        assert!(blocked.contains(30));
        assert!(blocked.contains(40));
        assert!(!blocked.contains(50));
    }

    #[test]
    fn test_blocked_new_empty() {
        let blocked = BlockedSet::new(&range(), 0, &[]).unwrap();
        assert!(blocked.is_empty());
        assert_eq!(blocked.len(), 0);
    }

    #[test]
    fn test_blocked_boundary_values_accepted() {
        let blocked = BlockedSet::new(&range(), 2, &[10, 100]).unwrap();
        assert!(blocked.contains(10));
        assert!(blocked.contains(100));
    }

    #[test]
    fn test_blocked_too_many() {
        assert_eq!(
            BlockedSet::new(&range(), 41, &[90]),
            Err(InputError::TooManyBlocked { declared: 41 })
        );
    }

    #[test]
    fn test_blocked_count_mismatch() {
        assert_eq!(
            BlockedSet::new(&range(), 1, &[11, 10]),
            Err(InputError::BlockedCountMismatch {
                declared: 1,
                found: 2
            })
        );
        assert_eq!(
            BlockedSet::new(&range(), 4, &[11, 10]),
            Err(InputError::BlockedCountMismatch {
                declared: 4,
                found: 2
            })
        );
        // Negative declared counts can never match.
        assert_eq!(
            BlockedSet::new(&range(), -1, &[]),
            Err(InputError::BlockedCountMismatch {
                declared: -1,
                found: 0
            })
        );
    }

    #[test]
    fn test_blocked_out_of_range() {
        assert_eq!(
            BlockedSet::new(&range(), 1, &[1000]),
            Err(InputError::BlockedOutOfRange {
                value: 1000,
                lowest: 10,
                highest: 100
            })
        );
        assert_eq!(
            BlockedSet::new(&range(), 1, &[1]),
            Err(InputError::BlockedOutOfRange {
                value: 1,
                lowest: 10,
                highest: 100
            })
        );
    }

    #[test]
    fn test_blocked_duplicates_collapse() {
        // Duplicates are not an error; they collapse to one entry. The
        // declared count is checked against the raw token count.
        let blocked = BlockedSet::new(&range(), 2, &[20, 20]).unwrap();
        assert_eq!(blocked.len(), 1);
        assert!(blocked.contains(20));
    }

    #[test]
    fn test_blocked_sorted_and_serialization() {
        let blocked = BlockedSet::new(&range(), 3, &[40, 20, 30]).unwrap();
        assert_eq!(blocked.sorted(), vec![20, 30, 40]);

        let json = serde_json::to_string(&blocked).unwrap();
        assert_eq!(json, "[20,30,40]");
    }
}
