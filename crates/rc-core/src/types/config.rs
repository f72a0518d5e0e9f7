//! The validated channel configuration.

use serde::Serialize;

use crate::types::{BlockedSet, ChannelRange, WatchList};

/// The validated aggregate of range, blocked set, and watch list.
///
/// This is the sole input the click calculator accepts. Holding one is
/// proof that every cross-invariant holds: the blocked set and watch list
/// were both validated against the range, and the watch list is disjoint
/// from the blocked set. There is no way to obtain a partially-valid
/// instance.
///
/// # Examples
///
/// ```
/// use rc_core::{BlockedSet, ChannelConfig, ChannelRange, WatchList};
///
/// let range = ChannelRange::new(1, 20).unwrap();
/// let blocked = BlockedSet::new(&range, 2, &[18, 19]).unwrap();
/// let watch = WatchList::new(&range, &blocked, 2, &[15, 14]).unwrap();
///
/// let config = ChannelConfig::new(range, blocked, watch);
/// assert_eq!(config.range().highest(), 20);
/// assert_eq!(config.watch_list().first(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelConfig {
    /// The contiguous valid channel range.
    range: ChannelRange,
    /// Channels that can never be tuned to.
    blocked: BlockedSet,
    /// The ordered channels to visit.
    watch_list: WatchList,
}

impl ChannelConfig {
    /// Assembles a configuration from already-validated components.
    ///
    /// The component constructors enforce all invariants; this only
    /// aggregates them.
    #[inline]
    #[must_use]
    pub const fn new(range: ChannelRange, blocked: BlockedSet, watch_list: WatchList) -> Self {
        Self {
            range,
            blocked,
            watch_list,
        }
    }

    /// Returns the channel range.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> ChannelRange {
        self.range
    }

    /// Returns the blocked channel set.
    #[inline]
    #[must_use]
    pub const fn blocked(&self) -> &BlockedSet {
        &self.blocked
    }

    /// Returns the watch list.
    #[inline]
    #[must_use]
    pub const fn watch_list(&self) -> &WatchList {
        &self.watch_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accessors() {
        let range = ChannelRange::new(103, 108).unwrap();
        let blocked = BlockedSet::new(&range, 1, &[104]).unwrap();
        let watch = WatchList::new(&range, &blocked, 2, &[105, 106]).unwrap();

        let config = ChannelConfig::new(range, blocked, watch);
        assert_eq!(config.range().lowest(), 103);
        assert!(config.blocked().contains(104));
        assert_eq!(config.watch_list().as_slice(), &[105, 106]);
    }

    #[test]
    fn test_config_serialization() {
        let range = ChannelRange::new(1, 20).unwrap();
        let blocked = BlockedSet::new(&range, 2, &[19, 18]).unwrap();
        let watch = WatchList::new(&range, &blocked, 2, &[15, 14]).unwrap();
        let config = ChannelConfig::new(range, blocked, watch);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"range":{"lowest":1,"highest":20},"blocked":[18,19],"watch_list":[15,14]}"#
        );
    }
}
