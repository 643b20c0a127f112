//! Pure-computation CPU rasterization of a [`Frame`].
//!
//! Reproduces the sketch's draw pass in software: background fill, a
//! lighting pass around each fly, then per fly the fading trail strokes
//! and a bright marker dot. Flies are drawn in frame order, so stacking
//! matches update order.

use firefly_core::color::{self, Rgba};
use firefly_core::error::EngineError;
use firefly_core::frame::Frame;
use firefly_core::mask::Mask;
use glam::DVec2;

/// Trail stroke color (the original `stroke(255, alpha)`).
const STROKE: Rgba = Rgba::opaque(255, 255, 255);
/// Marker radius in pixels (the original 5px ellipse).
const MARKER_RADIUS: f64 = 2.5;

/// All recognized lighting strategy names.
const LIGHTING_NAMES: &[&str] = &["glow", "reveal", "none"];

/// Lighting compositing strategy applied around each fly.
///
/// The sketches rendered a blurred 60px spotlight sprite per fly into an
/// offscreen buffer and used it as the alpha mask of the spot image; the
/// strategies here are CPU renditions of that pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lighting {
    /// No lighting pass: background, trails, and markers only.
    None,
    /// Additive white glow with linear falloff over `radius`.
    Glow { radius: f64, strength: u8 },
    /// Mask image revealed where the spotlights shine, with per-sprite
    /// intensity `strength` accumulating across overlapping flies.
    Reveal { radius: f64, strength: u8 },
}

impl Lighting {
    /// Half the original 60px spotlight sprite.
    pub const DEFAULT_RADIUS: f64 = 30.0;
    /// The original spotlight fill alpha (`fill 255, 60`).
    pub const DEFAULT_STRENGTH: u8 = 60;

    /// Constructs a strategy from its CLI name with default intensity.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "none" => Ok(Lighting::None),
            "glow" => Ok(Lighting::Glow {
                radius: Self::DEFAULT_RADIUS,
                strength: Self::DEFAULT_STRENGTH,
            }),
            "reveal" => Ok(Lighting::Reveal {
                radius: Self::DEFAULT_RADIUS,
                strength: Self::DEFAULT_STRENGTH,
            }),
            _ => Err(EngineError::UnknownLighting(format!(
                "'{name}' (expected one of: {})",
                LIGHTING_NAMES.join(", ")
            ))),
        }
    }

    /// Returns a slice of all recognized strategy names.
    pub fn list_names() -> &'static [&'static str] {
        LIGHTING_NAMES
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Lighting::Glow {
            radius: Self::DEFAULT_RADIUS,
            strength: Self::DEFAULT_STRENGTH,
        }
    }
}

/// CPU rasterizer: renders a [`Frame`] (plus the mask for `Reveal`) into
/// an RGBA8 buffer of `width * height * 4` bytes.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    pub background: Rgba,
    pub lighting: Lighting,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            background: color::BLACK,
            lighting: Lighting::default(),
        }
    }
}

impl Rasterizer {
    pub fn new(background: Rgba, lighting: Lighting) -> Self {
        Self {
            background,
            lighting,
        }
    }

    /// Renders one frame. Geometry outside the canvas is clipped, never an
    /// error: flies regularly overshoot the mask edges mid-turn.
    pub fn render(&self, frame: &Frame, mask: &Mask) -> Vec<u8> {
        let (w, h) = (frame.width, frame.height);
        let mut buf = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            buf.extend_from_slice(&[
                self.background.r,
                self.background.g,
                self.background.b,
                255,
            ]);
        }

        match self.lighting {
            Lighting::None => {}
            Lighting::Glow { radius, strength } => {
                let lights = accumulate_lights(frame, radius, strength);
                for (i, &light) in lights.iter().enumerate() {
                    add_saturating(&mut buf, i, light);
                }
            }
            Lighting::Reveal { radius, strength } => {
                let lights = accumulate_lights(frame, radius, strength);
                for (i, &light) in lights.iter().enumerate() {
                    if light == 0 {
                        continue;
                    }
                    let (x, y) = (i % w, i / w);
                    if x < mask.width() && y < mask.height() {
                        blend_over(&mut buf, i, mask.get(x, y), light);
                    }
                }
            }
        }

        for fly in &frame.flies {
            for segment in &fly.trail {
                draw_line(&mut buf, w, h, segment.from, segment.to, segment.alpha);
            }
            fill_disc(&mut buf, w, h, fly.marker, MARKER_RADIUS, color::LIGHT);
        }

        buf
    }
}

/// Accumulates spotlight intensity per pixel: each marker contributes
/// `strength` at its center falling off linearly to zero at `radius`,
/// summed and clamped across overlapping flies.
fn accumulate_lights(frame: &Frame, radius: f64, strength: u8) -> Vec<u8> {
    let (w, h) = (frame.width, frame.height);
    let mut lights = vec![0u16; w * h];
    for fly in &frame.flies {
        let min_x = ((fly.marker.x - radius).floor().max(0.0)) as usize;
        let min_y = ((fly.marker.y - radius).floor().max(0.0)) as usize;
        let max_x = ((fly.marker.x + radius).ceil().min(w as f64 - 1.0)) as usize;
        let max_y = ((fly.marker.y + radius).ceil().min(h as f64 - 1.0)) as usize;
        if fly.marker.x + radius < 0.0 || fly.marker.y + radius < 0.0 {
            continue;
        }
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let d = DVec2::new(x as f64, y as f64).distance(fly.marker);
                if d < radius {
                    let falloff = 1.0 - d / radius;
                    let idx = y * w + x;
                    lights[idx] =
                        (lights[idx] + (strength as f64 * falloff).round() as u16).min(255);
                }
            }
        }
    }
    lights.into_iter().map(|v| v as u8).collect()
}

/// Blends `color` over the pixel at flat index `idx` with the given alpha.
fn blend_over(buf: &mut [u8], idx: usize, color: Rgba, alpha: u8) {
    let base = idx * 4;
    let a = alpha as u32;
    for (offset, src) in [color.r, color.g, color.b].into_iter().enumerate() {
        let dst = buf[base + offset] as u32;
        buf[base + offset] = ((dst * (255 - a) + src as u32 * a) / 255) as u8;
    }
}

/// Adds `amount` to the RGB channels at flat index `idx`, saturating.
fn add_saturating(buf: &mut [u8], idx: usize, amount: u8) {
    let base = idx * 4;
    for offset in 0..3 {
        buf[base + offset] = buf[base + offset].saturating_add(amount);
    }
}

/// Strokes a line segment with the trail color at the given alpha, using
/// one plot per unit step along the longer axis. Off-canvas points are
/// skipped.
fn draw_line(buf: &mut [u8], w: usize, h: usize, from: DVec2, to: DVec2, alpha: u8) {
    if alpha == 0 {
        return;
    }
    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs()).ceil() as usize;
    for i in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            i as f64 / steps as f64
        };
        let point = from + delta * t;
        plot(buf, w, h, point, STROKE, alpha);
    }
}

/// Fills a disc, clipped to the canvas.
fn fill_disc(buf: &mut [u8], w: usize, h: usize, center: DVec2, radius: f64, color: Rgba) {
    let min_x = (center.x - radius).floor() as i64;
    let min_y = (center.y - radius).floor() as i64;
    let max_x = (center.x + radius).ceil() as i64;
    let max_y = (center.y + radius).ceil() as i64;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if DVec2::new(x as f64, y as f64).distance(center) <= radius {
                plot(buf, w, h, DVec2::new(x as f64, y as f64), color, 255);
            }
        }
    }
}

/// Blends a single point if it lies on the canvas.
fn plot(buf: &mut [u8], w: usize, h: usize, point: DVec2, color: Rgba, alpha: u8) {
    let x = point.x.round();
    let y = point.y.round();
    if x < 0.0 || y < 0.0 || x >= w as f64 || y >= h as f64 {
        return;
    }
    blend_over(buf, (y as usize) * w + x as usize, color, alpha);
}
