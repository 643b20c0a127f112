//! Per-fly state: position, target, heading, bounded trail.

use glam::DVec2;
use std::collections::VecDeque;

/// A single firefly.
///
/// `heading` is the direction of travel in radians. It stays finite but is
/// deliberately not normalized to a canonical range: the steering math
/// works on the continuous angle line.
#[derive(Debug, Clone)]
pub struct Firefly {
    pub position: DVec2,
    pub target: DVec2,
    pub heading: f64,
    /// Recent positions, oldest first. Bounded by the `tail_length` tunable.
    pub trail: VecDeque<DVec2>,
}

impl Firefly {
    /// Creates a fly with an empty trail.
    pub fn new(position: DVec2, target: DVec2, heading: f64) -> Self {
        Self {
            position,
            target,
            heading,
            trail: VecDeque::new(),
        }
    }

    /// Appends the current position to the trail, then evicts the oldest
    /// entries until the trail fits within `tail_length`.
    pub fn record_trail(&mut self, tail_length: usize) {
        self.trail.push_back(self.position);
        while self.trail.len() > tail_length {
            self.trail.pop_front();
        }
    }
}
