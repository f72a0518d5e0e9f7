//! Minimum-click calculation over a validated channel configuration.
//!
//! The remote offers four ways to move between channels:
//!
//! - **direct entry**: key the target's digits, one press per digit;
//! - **up**: one press per channel stepped upward, wrapping at the top of
//!   the range, with blocked channels skipped for free;
//! - **down**: the symmetric downward traversal;
//! - **back**: one press returning to the previously watched channel,
//!   from which up/down traversal continues.
//!
//! Each hop of the watch list takes whichever is cheapest; back is only
//! available once there is a previously watched channel.

use rc_core::{Channel, ChannelConfig, digit_count};
use smallvec::SmallVec;
use tracing::trace;

/// Traversal direction on the cyclic channel line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Stepping upward, wrapping past the highest channel to the lowest.
    Up,
    /// Stepping downward, wrapping past the lowest channel to the highest.
    Down,
}

/// Computes the minimum total clicks to traverse a watch list in order.
///
/// The calculator borrows a validated [`ChannelConfig`]; by construction
/// it has no error paths. All cost primitives are private; the only
/// operation is [`minimum_clicks`](Self::minimum_clicks).
///
/// # Examples
///
/// ```
/// use rc_engine::{ClickCalculator, parse_channel_config};
///
/// let config = parse_channel_config("1 20", "2 18 19", "5 15 14 17 1 17").unwrap();
/// let calculator = ClickCalculator::new(&config);
/// assert_eq!(calculator.minimum_clicks(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClickCalculator<'a> {
    /// The validated configuration being traversed.
    config: &'a ChannelConfig,
}

impl<'a> ClickCalculator<'a> {
    /// Creates a calculator over the given configuration.
    #[inline]
    #[must_use]
    pub const fn new(config: &'a ChannelConfig) -> Self {
        Self { config }
    }

    /// Returns the minimum total clicks to visit the watch list in order.
    ///
    /// The first channel is always paid for by direct entry (the remote
    /// starts on no channel in particular). Every later hop takes the
    /// cheapest of direct entry, up traversal, down traversal, and, from
    /// the second hop onward, the back shortcut through the previously
    /// watched channel. Consecutive duplicate entries cost nothing.
    #[must_use]
    pub fn minimum_clicks(&self) -> u64 {
        let channels = self.config.watch_list().as_slice();
        let mut total = digit_count(channels[0]);

        for (index, pair) in channels.windows(2).enumerate() {
            let (current, next) = (pair[0], pair[1]);
            if current == next {
                continue;
            }

            let direct = digit_count(next);
            let up = self.up_clicks(current, next);
            let down = self.down_clicks(current, next);
            let mut best = direct.min(up).min(down);

            // No previously watched channel exists before the first hop,
            // so back is not an option there.
            if index > 0 {
                best = best.min(self.back_clicks(channels[index - 1], next));
            }

            trace!(current, next, best, "hop cost");
            total += best;
        }

        total
    }

    /// Presses needed to step upward from `from` to `to`.
    ///
    /// Blocked channels along the way are skipped transparently, reducing
    /// the press count by one each.
    fn up_clicks(&self, from: Channel, to: Channel) -> u64 {
        if from == to {
            return 0;
        }
        let distance = self.config.range().up_distance(from, to);
        distance - self.blocked_on_path(from, to, Direction::Up).len() as u64
    }

    /// Presses needed to step downward from `from` to `to`.
    fn down_clicks(&self, from: Channel, to: Channel) -> u64 {
        if from == to {
            return 0;
        }
        let distance = self.config.range().down_distance(from, to);
        distance - self.blocked_on_path(from, to, Direction::Down).len() as u64
    }

    /// Presses needed to reach `to` via the back shortcut.
    ///
    /// One press lands on `previous`; if that is not already `to`, the
    /// cheaper of up/down traversal continues from there.
    fn back_clicks(&self, previous: Channel, to: Channel) -> u64 {
        if previous == to {
            return 1;
        }
        1 + self
            .up_clicks(previous, to)
            .min(self.down_clicks(previous, to))
    }

    /// Returns the blocked channels on the inclusive cyclic path from
    /// `from` to `to` in the given direction, in traversal order.
    ///
    /// Only the cardinality feeds the cost formulas, but traversal order
    /// keeps the helper independently checkable. When `from == to` the
    /// path is just that channel; the result is then non-empty only if
    /// the channel itself is blocked, which validated watch entries never
    /// are.
    fn blocked_on_path(
        &self,
        from: Channel,
        to: Channel,
        direction: Direction,
    ) -> SmallVec<[Channel; 8]> {
        let blocked = self.config.blocked();

        if from == to {
            let mut hits = SmallVec::new();
            if blocked.contains(from) {
                hits.push(from);
            }
            return hits;
        }

        let range = self.config.range();
        let span = match direction {
            Direction::Up => range.up_distance(from, to),
            Direction::Down => range.down_distance(from, to),
        };

        let mut hits: SmallVec<[(u64, Channel); 8]> = SmallVec::new();
        for channel in blocked.iter() {
            let offset = match direction {
                Direction::Up => range.up_distance(from, channel),
                Direction::Down => range.down_distance(from, channel),
            };
            if offset <= span {
                hits.push((offset, channel));
            }
        }

        hits.sort_unstable();
        hits.into_iter().map(|(_, channel)| channel).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_channel_config;

    /// The shared probe configuration: range 1..=200, blocked
    /// {12, 24, 36, 48}.
    fn probe_config() -> ChannelConfig {
        parse_channel_config("1 200", "4 12 24 36 48", "5 11 100 1 101 198").unwrap()
    }

    #[test]
    fn test_up_clicks_probes() {
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.up_clicks(20, 23), 3);
        assert_eq!(calculator.up_clicks(198, 2), 4);
    }

    #[test]
    fn test_down_clicks_probes() {
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.down_clicks(2, 198), 4);
        assert_eq!(calculator.down_clicks(19, 16), 3);
    }

    #[test]
    fn test_back_clicks_probes() {
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.back_clicks(200, 198), 3);
        assert_eq!(calculator.back_clicks(20, 22), 3);
    }

    #[test]
    fn test_up_down_zero_iff_same() {
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.up_clicks(50, 50), 0);
        assert_eq!(calculator.down_clicks(50, 50), 0);
        assert!(calculator.up_clicks(50, 51) > 0);
        assert!(calculator.down_clicks(50, 49) > 0);
    }

    #[test]
    fn test_back_one_iff_same() {
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.back_clicks(50, 50), 1);
        // Otherwise back is one press plus the cheaper traversal.
        assert_eq!(
            calculator.back_clicks(50, 53),
            1 + calculator
                .up_clicks(50, 53)
                .min(calculator.down_clicks(50, 53))
        );
    }

    #[test]
    fn test_blocked_discount() {
        // Range 1..=100, blocked {78, 79, 80, 3}: stepping up from 77 to
        // 81 passes all three of 78, 79, 80 for free.
        let config = parse_channel_config("1 100", "4 78 79 80 3", "2 77 81").unwrap();
        let calculator = ClickCalculator::new(&config);
        assert_eq!(calculator.up_clicks(77, 81), 1);
        assert_eq!(calculator.down_clicks(81, 77), 1);
    }

    #[test]
    fn test_blocked_on_path_traversal_order() {
        let config = parse_channel_config("1 100", "4 78 79 80 3", "2 77 81").unwrap();
        let calculator = ClickCalculator::new(&config);

        let up = calculator.blocked_on_path(77, 81, Direction::Up);
        assert_eq!(up.as_slice(), &[78, 79, 80]);

        let down = calculator.blocked_on_path(81, 77, Direction::Down);
        assert_eq!(down.as_slice(), &[80, 79, 78]);
    }

    #[test]
    fn test_blocked_on_path_wraps() {
        let config = parse_channel_config("1 100", "4 78 79 80 3", "2 77 81").unwrap();
        let calculator = ClickCalculator::new(&config);

        // Up from 99 wraps through 100, 1, 2, 3, 4, 5.
        let hits = calculator.blocked_on_path(99, 5, Direction::Up);
        assert_eq!(hits.as_slice(), &[3]);

        // Down from 5 wraps through 4, 3, 2, 1, 100, 99.
        let hits = calculator.blocked_on_path(5, 99, Direction::Down);
        assert_eq!(hits.as_slice(), &[3]);

        // Endpoints are part of the path.
        let hits = calculator.blocked_on_path(78, 80, Direction::Up);
        assert_eq!(hits.as_slice(), &[78, 79, 80]);
    }

    #[test]
    fn test_blocked_on_path_degenerate_same_channel() {
        let config = parse_channel_config("1 100", "4 78 79 80 3", "2 77 81").unwrap();
        let calculator = ClickCalculator::new(&config);

        // The path from a channel to itself contains only that channel.
        assert_eq!(
            calculator
                .blocked_on_path(78, 78, Direction::Up)
                .as_slice(),
            &[78]
        );
        assert!(
            calculator
                .blocked_on_path(77, 77, Direction::Up)
                .is_empty()
        );
    }

    #[test]
    fn test_degenerate_branch_unreachable_from_watch_entries() {
        // Watch entries can never be blocked, so the same-channel branch
        // never yields a hit for any channel the calculator actually
        // revisits.
        let config = probe_config();
        let calculator = ClickCalculator::new(&config);
        for channel in config.watch_list().iter() {
            assert!(
                calculator
                    .blocked_on_path(channel, channel, Direction::Up)
                    .is_empty()
            );
            assert!(
                calculator
                    .blocked_on_path(channel, channel, Direction::Down)
                    .is_empty()
            );
        }
    }

    #[test]
    fn test_consecutive_duplicates_cost_nothing() {
        let single = parse_channel_config("1 100", "0", "1 13").unwrap();
        let repeated = parse_channel_config("1 100", "0", "4 13 13 13 13").unwrap();
        assert_eq!(
            ClickCalculator::new(&single).minimum_clicks(),
            ClickCalculator::new(&repeated).minimum_clicks()
        );
    }

    #[test]
    fn test_first_channel_paid_by_digit_count() {
        let config = parse_channel_config("1 10000", "0", "1 9999").unwrap();
        assert_eq!(ClickCalculator::new(&config).minimum_clicks(), 4);

        let config = parse_channel_config("1 10000", "0", "1 7").unwrap();
        assert_eq!(ClickCalculator::new(&config).minimum_clicks(), 1);
    }
}
