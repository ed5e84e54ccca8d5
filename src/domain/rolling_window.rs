// Fixed-capacity window of the most recent samples
use super::sample::SamplePoint;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 60;

/// Samples ordered by timestamp, never longer than `capacity`.
///
/// In-order arrivals are a plain push to the back. A late sample is slotted in
/// after every sample with an equal or earlier timestamp. When the window
/// overflows the oldest samples are evicted from the front.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    points: VecDeque<SamplePoint>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: SamplePoint) {
        let idx = self
            .points
            .iter()
            .rposition(|p| p.timestamp <= point.timestamp)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.points.insert(idx, point);
    }

    /// Append a batch and trim back to capacity. Returns how many points were evicted.
    pub fn extend<I: IntoIterator<Item = SamplePoint>>(&mut self, points: I) -> usize {
        for point in points {
            self.push(point);
        }

        let overflow = self.points.len().saturating_sub(self.capacity);
        self.points.drain(..overflow);
        overflow
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.points.iter()
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
