//! Per-renderer viewport state.
//!
//! A [`ViewportController`] sits between data acquisition and one rendering
//! collaborator: every update cycle it combines the latest data extent with
//! its value-axis policy and swaps in the latest time window, then exposes the
//! decided pair until the next cycle.

use log::trace;

use crate::axis::{AxisRange, AxisRangeInstance};
use crate::range::Range;
use crate::time::{TimeInterval, replace_time_window};

/// Owns the plotted value range and time window of a single viewport.
///
/// One controller per renderer; both fields are recomputed unconditionally on
/// every [`on_update`](Self::on_update) call. The value axis follows the
/// controller's policy (sticky under [`AxisRange::integrated`]); the time axis
/// always tracks the most recently requested window.
#[derive(Debug, Clone)]
pub struct ViewportController {
    value_axis: AxisRangeInstance,
    plot_range: Option<Range>,
    plot_time_interval: Option<TimeInterval>,
}

impl ViewportController {
    /// Create a controller using the given value-axis policy.
    pub fn new(policy: AxisRange) -> Self {
        Self {
            value_axis: policy.instance(),
            plot_range: None,
            plot_time_interval: None,
        }
    }

    /// The value-axis policy this controller was created with.
    pub fn policy(&self) -> AxisRange {
        self.value_axis.policy()
    }

    /// Recompute both axes for the current frame.
    ///
    /// The value axis sees the previously plotted range as its display range;
    /// on the first update there is none yet and the data range seeds it. The
    /// time axis is replaced outright. Returns the decided pair.
    pub fn on_update(
        &mut self,
        data_range: Range,
        time_interval: TimeInterval,
    ) -> (Range, TimeInterval) {
        let display_range = self.plot_range.unwrap_or(data_range);
        let plot_range = self.value_axis.axis_range(data_range, display_range);
        let plot_time_interval = match self.plot_time_interval {
            Some(previous) => replace_time_window(previous, time_interval),
            None => time_interval,
        };
        self.plot_range = Some(plot_range);
        self.plot_time_interval = Some(plot_time_interval);
        trace!("viewport updated: value axis {plot_range}");
        (plot_range, plot_time_interval)
    }

    /// The value range decided by the last update, if any.
    pub fn plot_range(&self) -> Option<Range> {
        self.plot_range
    }

    /// The time window decided by the last update, if any.
    pub fn plot_time_interval(&self) -> Option<TimeInterval> {
        self.plot_time_interval
    }
}

impl Default for ViewportController {
    /// A controller with the integrated value-axis policy, the behavior a
    /// live time-series view wants out of the box.
    fn default() -> Self {
        Self::new(AxisRange::integrated())
    }
}
