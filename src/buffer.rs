//! Fixed-capacity rolling storage for scalar samples.
//!
//! [`SampleBuffer`] keeps the most recent N samples of a stream and tracks
//! the min/max of the retained window incrementally, so extrema stay correct
//! as old samples fall out of the ring.

use std::collections::VecDeque;

use log::trace;

/// Errors that can occur when constructing a sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Requested capacity was zero.
    #[error("buffer capacity must be greater than zero")]
    InvalidCapacity,
}

/// Ring buffer of scalar samples with windowed extrema.
///
/// The buffer is mutated only through [`commit`](Self::commit); a whole batch
/// becomes visible at once because the buffer is exclusively owned while it
/// is written (`&mut self`). One buffer serves one worker; see the crate docs
/// for the single-writer contract.
///
/// Extrema are maintained with monotonic deques keyed by a running sample
/// sequence number, so eviction never leaves a stale minimum or maximum
/// behind. Non-finite samples are retained in [`values`](Self::values) but
/// never participate in extrema.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
    // Sequence number of the next sample; the front sample's sequence is
    // `next_seq - samples.len()`.
    next_seq: u64,
    // Candidate minima in increasing value order; front is the window minimum.
    min_track: VecDeque<(u64, f64)>,
    // Candidate maxima in decreasing value order; front is the window maximum.
    max_track: VecDeque<(u64, f64)>,
}

impl SampleBuffer {
    /// Create an empty buffer that retains the last `capacity` samples.
    ///
    /// Fails with [`BufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidCapacity);
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            next_seq: 0,
            min_track: VecDeque::new(),
            max_track: VecDeque::new(),
        })
    }

    /// Ingest a batch of samples, optionally discarding everything first.
    ///
    /// Samples are appended in order; whenever the buffer is at capacity the
    /// single oldest retained sample is evicted. This is the only mutation
    /// entry point.
    pub fn commit<I>(&mut self, new_samples: I, clear: bool)
    where
        I: IntoIterator<Item = f64>,
    {
        if clear {
            self.samples.clear();
            self.min_track.clear();
            self.max_track.clear();
        }
        let mut added = 0usize;
        for sample in new_samples {
            self.push(sample);
            added += 1;
        }
        trace!(
            "committed {added} samples (clear={clear}, retained={})",
            self.samples.len()
        );
    }

    /// Lazy iterator over the retained samples, oldest first.
    ///
    /// Restartable: calling `values` again yields the same sequence as long
    /// as no commit happened in between.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Minimum of the retained finite samples, or `None` if there is none.
    pub fn min_value(&self) -> Option<f64> {
        self.min_track.front().map(|&(_, value)| value)
    }

    /// Maximum of the retained finite samples, or `None` if there is none.
    pub fn max_value(&self) -> Option<f64> {
        self.max_track.front().map(|&(_, value)| value)
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.evict_oldest();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.samples.push_back(value);
        if !value.is_finite() {
            return;
        }
        while self.min_track.back().is_some_and(|&(_, v)| v >= value) {
            self.min_track.pop_back();
        }
        self.min_track.push_back((seq, value));
        while self.max_track.back().is_some_and(|&(_, v)| v <= value) {
            self.max_track.pop_back();
        }
        self.max_track.push_back((seq, value));
    }

    fn evict_oldest(&mut self) {
        let front_seq = self.next_seq - self.samples.len() as u64;
        self.samples.pop_front();
        if self.min_track.front().is_some_and(|&(seq, _)| seq == front_seq) {
            self.min_track.pop_front();
        }
        if self.max_track.front().is_some_and(|&(seq, _)| seq == front_seq) {
            self.max_track.pop_front();
        }
    }
}
