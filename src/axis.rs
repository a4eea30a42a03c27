//! Axis-range policies.
//!
//! An [`AxisRange`] describes *how* an axis decides the interval it covers on
//! each update; it carries no per-consumer state and can be shared freely.
//! Calling [`AxisRange::instance`] produces an independently-owned
//! [`AxisRangeInstance`] that holds whatever the policy accumulates across
//! calls, so two viewports never observe each other's history.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::range::{Range, RangeError};

/// Default similarity threshold for the integrated policy.
pub const DEFAULT_INTEGRATED_THRESHOLD: f64 = 0.8;

/// Policy deciding the numeric interval an axis covers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisRange {
    /// Always the fixed range given at construction.
    Absolute(Range),
    /// Always the latest data range, no cross-call memory.
    Data,
    /// Always the caller-requested display range; a degenerate display range
    /// behaves as absent and falls back to the data range.
    Display,
    /// Accumulate the union of successive data ranges, snapping back to the
    /// latest data range when it diverges too far from the accumulated one.
    Integrated {
        /// Minimum overlap ratio between the accumulated range and the latest
        /// data range below which the history is discarded.
        threshold: f64,
    },
}

impl AxisRange {
    /// Fixed range policy.
    ///
    /// Fails with [`RangeError::InvertedBounds`] when `min > max`.
    pub fn absolute(min: f64, max: f64) -> Result<Self, RangeError> {
        Ok(Self::Absolute(Range::new(min, max)?))
    }

    /// Data-driven policy: track the latest data extent.
    pub fn data() -> Self {
        Self::Data
    }

    /// Display-driven policy: track the caller-requested range.
    pub fn display() -> Self {
        Self::Display
    }

    /// Integrated policy with the default threshold.
    pub fn integrated() -> Self {
        Self::Integrated {
            threshold: DEFAULT_INTEGRATED_THRESHOLD,
        }
    }

    /// Integrated policy with a custom threshold in `(0, 1]`.
    pub fn integrated_with_threshold(threshold: f64) -> Self {
        Self::Integrated { threshold }
    }

    /// Create a fresh per-consumer instance of this policy.
    pub fn instance(self) -> AxisRangeInstance {
        AxisRangeInstance {
            policy: self,
            aggregated: None,
        }
    }
}

impl std::fmt::Display for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute(range) => write!(f, "absolute({:?}, {:?})", range.min(), range.max()),
            Self::Data => write!(f, "data"),
            Self::Display => write!(f, "display"),
            Self::Integrated { threshold } => write!(f, "integrated({:.0}%)", threshold * 100.0),
        }
    }
}

/// Per-consumer state of one [`AxisRange`] policy.
///
/// One instance serves exactly one viewport; it must not be shared between
/// concurrently-updated viewports.
#[derive(Debug, Clone)]
pub struct AxisRangeInstance {
    policy: AxisRange,
    aggregated: Option<Range>,
}

impl AxisRangeInstance {
    /// The policy this instance was created from.
    pub fn policy(&self) -> AxisRange {
        self.policy
    }

    /// Decide the axis range for this update cycle.
    ///
    /// `data_range` is the extent of the data currently available,
    /// `display_range` the interval the caller wants visible. Total: every
    /// policy returns a valid range for any pair of inputs.
    pub fn axis_range(&mut self, data_range: Range, display_range: Range) -> Range {
        match self.policy {
            AxisRange::Absolute(range) => range,
            AxisRange::Data => data_range,
            AxisRange::Display => {
                if display_range.span() == 0.0 {
                    data_range
                } else {
                    display_range
                }
            }
            AxisRange::Integrated { threshold } => {
                let previous = self.aggregated.unwrap_or(data_range);
                let mut candidate = Range::union(data_range, previous);
                if Range::overlap_ratio(candidate, data_range) < threshold {
                    debug!(
                        "data range {data_range} diverged from aggregated {candidate}, resetting"
                    );
                    candidate = data_range;
                }
                self.aggregated = Some(candidate);
                candidate
            }
        }
    }
}
