//! Fast hash set type aliases.
//!
//! This module provides a type alias for [`FxHashSet`] from the `rustc-hash`
//! crate. The Fx hash algorithm was originally developed for the Rust
//! compiler and is faster than the standard library's SipHash for small
//! integer keys, which is all this workspace stores. Denial-of-service
//! resistance is not required for internal lookups.
//!
//! # Examples
//!
//! ```
//! use rc_core::{FxHashSet, fx_hash_set_with_capacity};
//!
//! let mut set: FxHashSet<u16> = fx_hash_set_with_capacity(8);
//! set.insert(42);
//! assert!(set.contains(&42));
//! ```

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
///
/// Faster than the standard library's `HashSet` for small integer keys
/// but does not provide denial-of-service resistance.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new [`FxHashSet`] with the specified capacity.
///
/// The set will be able to hold at least `capacity` elements without
/// reallocating.
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
