//! `TransitLimit`: how a transit/retrograde search window is bounded.

use jyotish_time::Interval;

/// How far a transit search looks, and in which direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitLimit {
    /// Search exactly within this interval.
    Duration(Interval),
    /// Search forward from `from` if `count > 0`, backward if negative.
    /// Truncate results to `|count|` intervals.
    Count { from: jyotish_time::Instant, count: i32 },
}
