//! Input validation and minimum-click calculation for rc-zapper.
//!
//! This crate turns the three raw channel inputs into a validated
//! [`ChannelConfig`](rc_core::ChannelConfig) and computes the minimum
//! number of remote-control presses needed to visit the watch list in
//! order.
//!
//! # Overview
//!
//! The main entry point is [`compute_minimum_clicks`], which combines:
//!
//! - [`parse_channel_config`]: tokenizing and validating the raw inputs
//! - [`ClickCalculator`]: the per-hop cost minimization
//!
//! # Example
//!
//! ```
//! use rc_engine::compute_minimum_clicks;
//!
//! let clicks = compute_minimum_clicks("1 20", "2 18 19", "5 15 14 17 1 17").unwrap();
//! assert_eq!(clicks, 7);
//! ```
//!
//! # Architecture
//!
//! ```text
//! compute_minimum_clicks
//!     │
//!     ├── parse_channel_config (lexical layer)
//!     │       │
//!     │       └── rc-core checked constructors (domain rules)
//!     │
//!     └── ClickCalculator
//!             │
//!             ├── direct entry (digit count)
//!             ├── up / down traversal (cyclic distance, blocked discount)
//!             └── back shortcut
//! ```
//!
//! The whole computation is a pure, synchronous function of its inputs:
//! no I/O, no shared state, no suspension points. Each up/down cost probe
//! is O(1) arithmetic with an O(|blocked|) correction, so the total runs
//! in O(watch length x blocked size).

#![deny(clippy::all)]
#![warn(missing_docs)]

mod calc;
mod input;

pub use calc::ClickCalculator;
pub use input::parse_channel_config;

use rc_core::InputError;
use tracing::debug;

/// Computes the minimum clicks for the raw input triple.
///
/// Validates the three whitespace-delimited token strings (channel range,
/// blocked list, watch list) and, on success, runs the click calculation.
///
/// # Errors
///
/// Returns the [`InputError`] for the first validation rule the inputs
/// violate. The calculation itself cannot fail.
///
/// # Examples
///
/// ```
/// use rc_engine::compute_minimum_clicks;
///
/// assert_eq!(
///     compute_minimum_clicks("103 108", "1 104", "5 105 106 107 103 105").unwrap(),
///     8
/// );
/// assert!(compute_minimum_clicks("20 10", "0", "1 15").is_err());
/// ```
pub fn compute_minimum_clicks(
    range_spec: &str,
    blocked_spec: &str,
    watch_spec: &str,
) -> Result<u64, InputError> {
    let config = parse_channel_config(range_spec, blocked_spec, watch_spec)?;
    let clicks = ClickCalculator::new(&config).minimum_clicks();

    debug!(clicks, watch = config.watch_list().len(), "Computed minimum clicks");

    Ok(clicks)
}
