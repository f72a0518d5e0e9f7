//! Parsing and validation of the three raw channel inputs.
//!
//! Each input is a whitespace-delimited token string:
//!
//! 1. the channel range: two integers, `lowest highest`;
//! 2. the blocked list: a declared count followed by that many channels
//!    (an empty string means no blocked channels);
//! 3. the watch list: a declared count followed by that many channels in
//!    viewing order.
//!
//! This module handles the lexical layer (tokenizing, integer parsing,
//! peeling the declared counts) and delegates the domain rules to the
//! checked constructors in `rc-core`. Inputs are validated in order:
//! range first, then the blocked list against the range, then the watch
//! list against both. The first failure aborts.

use rc_core::{BlockedSet, ChannelConfig, ChannelRange, InputError, InputField, WatchList};
use tracing::debug;

/// Parses and validates the three raw inputs into a [`ChannelConfig`].
///
/// # Errors
///
/// Returns the [`InputError`] for the first violated rule; later inputs
/// are not examined once an earlier one fails.
///
/// # Examples
///
/// ```
/// use rc_engine::parse_channel_config;
///
/// let config = parse_channel_config("1 20", "2 18 19", "5 15 14 17 1 17").unwrap();
/// assert_eq!(config.range().highest(), 20);
/// assert_eq!(config.watch_list().len(), 5);
///
/// assert!(parse_channel_config("1", "", "1 5").is_err());
/// ```
pub fn parse_channel_config(
    range_spec: &str,
    blocked_spec: &str,
    watch_spec: &str,
) -> Result<ChannelConfig, InputError> {
    let range = parse_range(range_spec)?;
    let blocked = parse_blocked(blocked_spec, &range)?;
    let watch_list = parse_watch(watch_spec, &range, &blocked)?;

    debug!(
        lowest = range.lowest(),
        highest = range.highest(),
        blocked = blocked.len(),
        watch = watch_list.len(),
        "Validated channel configuration"
    );

    Ok(ChannelConfig::new(range, blocked, watch_list))
}

/// Tokenizes `spec` into integers, tagging parse failures with `field`.
fn parse_tokens(field: InputField, spec: &str) -> Result<Vec<i64>, InputError> {
    spec.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| InputError::malformed(field, token))
        })
        .collect()
}

/// Splits a counted list into its declared count and values.
///
/// An empty token list yields a declared count of zero and no values,
/// which is how "no blocked channels" is spelled.
fn parse_counted(field: InputField, spec: &str) -> Result<(i64, Vec<i64>), InputError> {
    let tokens = parse_tokens(field, spec)?;
    Ok(match tokens.split_first() {
        Some((&declared, values)) => (declared, values.to_vec()),
        None => (0, Vec::new()),
    })
}

fn parse_range(spec: &str) -> Result<ChannelRange, InputError> {
    let tokens = parse_tokens(InputField::Range, spec)?;
    match tokens.as_slice() {
        &[lowest, highest] => ChannelRange::new(lowest, highest),
        other => Err(InputError::RangeTokenCount { found: other.len() }),
    }
}

fn parse_blocked(spec: &str, range: &ChannelRange) -> Result<BlockedSet, InputError> {
    let (declared, values) = parse_counted(InputField::Blocked, spec)?;
    BlockedSet::new(range, declared, &values)
}

fn parse_watch(
    spec: &str,
    range: &ChannelRange,
    blocked: &BlockedSet,
) -> Result<WatchList, InputError> {
    let (declared, values) = parse_counted(InputField::Watch, spec)?;
    WatchList::new(range, blocked, declared, &values)
}
