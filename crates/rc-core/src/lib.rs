//! Core types, errors, and utilities for the rc-zapper workspace.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`InputError`] for consistent validation-error handling
//! - Domain types ([`ChannelRange`], [`BlockedSet`], [`WatchList`],
//!   [`ChannelConfig`])
//! - The [`digit_count`] helper (direct-entry press cost)
//! - Type aliases for `FxHashSet` (faster than std)
//!
//! The domain types are only constructible through checked constructors, so
//! holding a [`ChannelConfig`] is proof that every invariant of the channel
//! model holds: `1 <= lowest <= highest <= 10000`, at most 40 blocked
//! channels inside the range, and a watch list of 1 to 50 in-range channels
//! none of which is blocked.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod digits;
pub mod error;
pub mod hash;
pub mod types;

pub use digits::digit_count;
pub use error::{InputError, InputField};
pub use hash::{FxHashSet, fx_hash_set_with_capacity};
pub use types::{BlockedSet, Channel, ChannelConfig, ChannelRange, WatchList};
