//! Numeric ranges and range arithmetic.
//!
//! A [`Range`] is the unit every axis computation works in: data extents,
//! display requests, and the final plotted interval are all ranges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The minimum bound is greater than the maximum bound.
    #[error("range minimum is greater than maximum")]
    InvertedBounds,
}

/// Numeric range with inclusive bounds.
///
/// Immutable once constructed; `min <= max` is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Create a new range.
    ///
    /// Fails with [`RangeError::InvertedBounds`] when `min > max`. A
    /// degenerate range (`min == max`) is valid and has zero span.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvertedBounds);
        }
        Ok(Self { min, max })
    }

    /// Minimum bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Span of the range. Zero for a degenerate range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether a value lies within the range (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check whether another range lies entirely within this one.
    pub fn contains_range(&self, other: Self) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Union of two ranges: the smallest range containing both.
    ///
    /// When one operand already contains the other, that operand's value is
    /// returned unchanged.
    pub fn union(a: Self, b: Self) -> Self {
        if a.contains_range(b) {
            return a;
        }
        if b.contains_range(a) {
            return b;
        }
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Intersection of two ranges, or `None` when they do not overlap.
    pub fn intersection(a: Self, b: Self) -> Option<Self> {
        let min = a.min.max(b.min);
        let max = a.max.min(b.max);
        if min > max {
            return None;
        }
        Some(Self { min, max })
    }

    /// Jaccard similarity of two ranges: intersection span over union span.
    ///
    /// Returns 0 when the ranges do not intersect. When the union itself has
    /// zero span (two identical degenerate ranges), the ratio is 1 if the
    /// ranges intersect, so repeated identical points count as full overlap.
    pub fn overlap_ratio(a: Self, b: Self) -> f64 {
        let Some(intersection) = Self::intersection(a, b) else {
            return 0.0;
        };
        let union_span = Self::union(a, b).span();
        if union_span == 0.0 {
            return 1.0;
        }
        intersection.span() / union_span
    }

    /// Map a value to its position within the range, 0 at `min` and 1 at `max`.
    ///
    /// Values outside the range extrapolate linearly. Returns NaN for a
    /// degenerate range.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> Range {
        Range::new(min, max).unwrap()
    }

    #[test]
    fn inverted_bounds_fail() {
        assert_eq!(Range::new(10.0, 0.0), Err(RangeError::InvertedBounds));
    }

    #[test]
    fn degenerate_range_is_valid() {
        let r = range(2.0, 2.0);
        assert_eq!(r.span(), 0.0);
        assert!(r.contains(2.0));
    }

    #[test]
    fn union_spans_both_operands() {
        let a = range(0.0, 5.0);
        let b = range(3.0, 10.0);
        assert_eq!(Range::union(a, b), range(0.0, 10.0));
        assert_eq!(Range::union(b, a), range(0.0, 10.0));
    }

    #[test]
    fn union_returns_containing_operand() {
        let outer = range(0.0, 10.0);
        let inner = range(2.0, 3.0);
        assert_eq!(Range::union(outer, inner), outer);
        assert_eq!(Range::union(inner, outer), outer);
    }

    #[test]
    fn intersection_of_disjoint_ranges_is_none() {
        assert_eq!(Range::intersection(range(0.0, 1.0), range(2.0, 3.0)), None);
    }

    #[test]
    fn intersection_of_touching_ranges_is_degenerate() {
        let i = Range::intersection(range(0.0, 1.0), range(1.0, 2.0)).unwrap();
        assert_eq!(i, range(1.0, 1.0));
    }

    #[test]
    fn overlap_ratio_is_jaccard() {
        // intersection [3, 5] = 2, union [0, 10] = 10
        let ratio = Range::overlap_ratio(range(0.0, 5.0), range(3.0, 10.0));
        assert!((ratio - 0.2).abs() < 1e-12);
    }

    #[test]
    fn overlap_ratio_of_disjoint_ranges_is_zero() {
        assert_eq!(Range::overlap_ratio(range(0.0, 1.0), range(5.0, 6.0)), 0.0);
    }

    #[test]
    fn overlap_ratio_of_identical_points_is_one() {
        assert_eq!(Range::overlap_ratio(range(2.0, 2.0), range(2.0, 2.0)), 1.0);
    }

    #[test]
    fn overlap_ratio_of_contained_range() {
        // intersection = [2, 4] = 2, union = [0, 10] = 10
        let ratio = Range::overlap_ratio(range(0.0, 10.0), range(2.0, 4.0));
        assert!((ratio - 0.2).abs() < 1e-12);
    }

    #[test]
    fn normalize_maps_bounds_to_unit_interval() {
        let r = range(10.0, 20.0);
        assert_eq!(r.normalize(10.0), 0.0);
        assert_eq!(r.normalize(20.0), 1.0);
        assert_eq!(r.normalize(15.0), 0.5);
        assert_eq!(r.normalize(25.0), 1.5);
    }
}
