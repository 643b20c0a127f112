//! Fading-polyline emission for a fly's trail.
//!
//! Alpha fades from near-transparent at the oldest entry toward opaque at
//! the newest. The original sketch only draws segments for indices below
//! `len - 2`, leaving the most recent segment undrawn; that quirk is part
//! of the look and is reproduced here unchanged.

use firefly_core::frame::TrailSegment;
use glam::DVec2;
use std::collections::VecDeque;

/// Emits the drawable segments for a trail (oldest first).
///
/// For a trail of length N the alpha step is `255 / N` (integer division)
/// and segment i carries `alpha = i * step`; only indices with `i + 2 < N`
/// produce a segment. Empty and single-entry trails emit nothing.
pub fn trail_segments(trail: &VecDeque<DVec2>) -> Vec<TrailSegment> {
    if trail.is_empty() {
        return Vec::new();
    }
    let n = trail.len();
    let alpha_step = 255 / n;
    let mut segments = Vec::with_capacity(n.saturating_sub(2));
    for i in 0..n {
        if i + 2 < n {
            segments.push(TrailSegment {
                from: trail[i],
                to: trail[i + 1],
                alpha: (i * alpha_step) as u8,
            });
        }
    }
    segments
}
