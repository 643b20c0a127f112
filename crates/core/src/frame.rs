//! Per-frame render output consumed by an external renderer.
//!
//! The simulation core emits draw data — fading trail segments and one
//! marker per fly — and never rasterizes pixels itself. A `Frame` is
//! rebuilt from scratch every tick; nothing is pooled or reused.

use glam::DVec2;

/// One line segment of a fading trail, with its stroke alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub from: DVec2,
    pub to: DVec2,
    /// Stroke alpha, 0 (transparent) to 255 (opaque).
    pub alpha: u8,
}

/// Draw data for a single fly: its trail segments plus a marker at the
/// current position. Segments are ordered oldest first.
#[derive(Debug, Clone, Default)]
pub struct FlyFrame {
    pub trail: Vec<TrailSegment>,
    pub marker: DVec2,
}

/// Draw data for one full frame.
///
/// Flies appear in update order; a renderer that draws them in sequence
/// reproduces the original stacking (draw order = update order).
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub flies: Vec<FlyFrame>,
}

impl Frame {
    /// Creates an empty frame for a canvas of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            flies: Vec::new(),
        }
    }

    /// Total number of trail segments across all flies.
    pub fn segment_count(&self) -> usize {
        self.flies.iter().map(|f| f.trail.len()).sum()
    }
}
