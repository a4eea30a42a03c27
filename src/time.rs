//! Time intervals and the temporal aggregation rules for time axes.
//!
//! The value axis of a live plot may accumulate history (see
//! [`AxisRange::integrated`](crate::axis::AxisRange::integrated)), but the
//! time axis never does: the viewer is always looking at "now" through a
//! sliding pane, so each update replaces the previous window outright.

use std::time::{Duration, Instant};

/// Errors that can occur when constructing a time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// The start timestamp is after the end timestamp.
    #[error("interval start is after end")]
    InvertedBounds,
}

/// Closed interval between two monotonic timestamps.
///
/// Immutable once constructed; `start <= end` is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: Instant,
    end: Instant,
}

impl TimeInterval {
    /// Create a new time interval.
    ///
    /// Fails with [`IntervalError::InvertedBounds`] when `start > end`.
    pub fn new(start: Instant, end: Instant) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvertedBounds);
        }
        Ok(Self { start, end })
    }

    /// Interval covering `duration` after `start`.
    pub fn after(start: Instant, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Start timestamp.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// End timestamp.
    pub fn end(&self) -> Instant {
        self.end
    }

    /// Duration covered by the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Check whether another interval lies entirely within this one.
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Union of two intervals: the smallest interval containing both.
    ///
    /// When one operand already contains the other, that operand's value is
    /// returned unchanged.
    pub fn union(a: Self, b: Self) -> Self {
        if a.contains_interval(b) {
            return a;
        }
        if b.contains_interval(a) {
            return b;
        }
        Self {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
        }
    }
}

/// Combine the time extents of two datasets into one plottable interval.
pub fn aggregate_time_interval(a: TimeInterval, b: TimeInterval) -> TimeInterval {
    TimeInterval::union(a, b)
}

/// Pick the time window to plot for this frame.
///
/// Always the incoming window; the previous one carries no weight.
pub fn replace_time_window(_previous: TimeInterval, incoming: TimeInterval) -> TimeInterval {
    incoming
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_fail() {
        let now = Instant::now();
        let later = now + Duration::from_secs(1);
        assert_eq!(
            TimeInterval::new(later, now),
            Err(IntervalError::InvertedBounds)
        );
    }

    #[test]
    fn aggregate_returns_containing_interval() {
        let now = Instant::now();
        let short = TimeInterval::after(now, Duration::from_secs(1));
        let long = TimeInterval::after(now, Duration::from_secs(2));
        assert_eq!(aggregate_time_interval(short, long), long);
        assert_eq!(aggregate_time_interval(long, short), long);
    }

    #[test]
    fn aggregate_spans_overlapping_intervals() {
        let now = Instant::now();
        let first = TimeInterval::after(now, Duration::from_secs(2));
        let second = TimeInterval::after(now + Duration::from_secs(1), Duration::from_secs(2));
        let total = TimeInterval::new(first.start(), second.end()).unwrap();
        assert_eq!(aggregate_time_interval(first, second), total);
        assert_eq!(aggregate_time_interval(second, first), total);
    }

    #[test]
    fn aggregate_spans_disjoint_intervals() {
        let now = Instant::now();
        let first = TimeInterval::after(now, Duration::from_secs(1));
        let second = TimeInterval::after(now + Duration::from_secs(5), Duration::from_secs(1));
        let total = TimeInterval::new(first.start(), second.end()).unwrap();
        assert_eq!(aggregate_time_interval(first, second), total);
        assert_eq!(aggregate_time_interval(second, first), total);
    }

    #[test]
    fn replace_always_returns_incoming() {
        let now = Instant::now();
        let previous = TimeInterval::after(now, Duration::from_secs(10));
        let incoming = TimeInterval::after(now + Duration::from_secs(3), Duration::from_secs(1));
        assert_eq!(replace_time_window(previous, incoming), incoming);
        assert_eq!(replace_time_window(incoming, incoming), incoming);
    }
}
