//! Bounded per-track position history and the kinematics derived from it.

use std::collections::VecDeque;

/// Number of samples retained per track.
pub const HISTORY_CAPACITY: usize = 30;

/// One recorded (position, timestamp) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    /// Estimated position at the time of the sample
    pub position: (f64, f64),
    /// Seconds, same clock as the frame timestamps
    pub timestamp: f64,
}

/// FIFO of the most recent position samples of one track.
///
/// Capacity-bounded: pushing onto a full buffer evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<HistorySample>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a sample, evicting the oldest one when full.
    pub fn push(&mut self, position: (f64, f64), timestamp: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(HistorySample {
            position,
            timestamp,
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<&HistorySample> {
        self.samples.back()
    }

    fn last_two(&self) -> Option<(&HistorySample, &HistorySample)> {
        let n = self.samples.len();
        if n < 2 {
            return None;
        }
        Some((&self.samples[n - 2], &self.samples[n - 1]))
    }

    /// Instantaneous speed from the two most recent samples, in position
    /// units per second. Zero with fewer than two samples or non-positive
    /// elapsed time.
    pub fn speed(&self) -> f64 {
        let Some((prev, cur)) = self.last_two() else {
            return 0.0;
        };
        let dt = cur.timestamp - prev.timestamp;
        if dt <= 0.0 {
            return 0.0;
        }
        let dx = cur.position.0 - prev.position.0;
        let dy = cur.position.1 - prev.position.1;
        dx.hypot(dy) / dt
    }

    /// Heading of the displacement between the two most recent samples, in
    /// degrees via atan2 (all four quadrants). Zero with fewer than two
    /// samples or non-positive elapsed time.
    pub fn direction(&self) -> f64 {
        let Some((prev, cur)) = self.last_two() else {
            return 0.0;
        };
        if cur.timestamp - prev.timestamp <= 0.0 {
            return 0.0;
        }
        let dx = cur.position.0 - prev.position.0;
        let dy = cur.position.1 - prev.position.1;
        dy.atan2(dx).to_degrees()
    }
}
