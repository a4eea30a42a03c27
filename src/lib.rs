//! liveplot_viewport decides, frame by frame, the axis ranges a real-time
//! plotting surface should display, and keeps a rolling window of the most
//! recent samples. Rendering is someone else's job: each update cycle hands
//! the renderer an already-decided value range, time window, and windowed
//! dataset.
//!
//! # Update cycle
//!
//! New samples arrive, a [`SampleBuffer`] ingests them and reports the data
//! extent, an [`AxisRange`] policy instance combines that extent with the
//! previously displayed range, and a [`ViewportController`] exposes the
//! resulting [`Range`]/[`TimeInterval`] pair for the frame.
//!
//! # Threading
//!
//! Everything here is synchronous and exclusively owned: one buffer, one
//! policy instance, and one controller per worker, with no shared state
//! between workers. [`AxisRange`] descriptors themselves are stateless and
//! may be shared freely.

#![forbid(unsafe_code)]

pub mod axis;
pub mod buffer;
pub mod range;
pub mod time;
pub mod viewport;

pub use axis::{AxisRange, AxisRangeInstance, DEFAULT_INTEGRATED_THRESHOLD};
pub use buffer::{BufferError, SampleBuffer};
pub use range::{Range, RangeError};
pub use time::{IntervalError, TimeInterval, aggregate_time_interval, replace_time_window};
pub use viewport::ViewportController;
