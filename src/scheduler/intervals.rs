//! Interval table and jitter.
//!
//! Buckets index a fixed table of base intervals (scheduling units,
//! conventionally seconds). Every delay handed to a card is the base
//! interval for its bucket perturbed by a uniform ±10%.

use rand::Rng;

use crate::scheduler::{SchedulerError, SchedulerResult};

/// Base intervals of the original deck: 1s, 5s, 25s, 2m, 10m, 1h.
pub const DEFAULT_INTERVALS: [f64; 6] = [1.0, 5.0, 25.0, 120.0, 600.0, 3600.0];

const JITTER_FRACTION: f64 = 0.1;

/// Smallest delay `jitter` will return. Keeps a sub-unit base interval from
/// producing a zero or negative delay.
pub const MIN_DELAY: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct IntervalTable {
    intervals: Vec<f64>,
}

impl IntervalTable {
    pub fn new(intervals: Vec<f64>) -> Self {
        if intervals.is_empty() {
            tracing::warn!("empty interval table, falling back to defaults");
            return Self::default();
        }
        Self { intervals }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Highest valid bucket. The table is never empty, so this is total.
    pub fn max_bucket(&self) -> usize {
        self.intervals.len() - 1
    }

    /// Base interval for `bucket`. Does not clamp; callers clamp first.
    pub fn base_interval(&self, bucket: usize) -> SchedulerResult<f64> {
        self.intervals
            .get(bucket)
            .copied()
            .ok_or(SchedulerError::BucketOutOfRange {
                bucket,
                max: self.max_bucket(),
            })
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS.to_vec(),
        }
    }
}

/// `duration` ± 10%, floored at [`MIN_DELAY`].
pub fn jitter<R: Rng + ?Sized>(duration: f64, rng: &mut R) -> f64 {
    let width = duration * JITTER_FRACTION;
    let offset = rng.random_range(-1.0..=1.0) * width;
    (duration + offset).max(MIN_DELAY)
}
