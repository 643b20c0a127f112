//! RGBA color with exact equality, used as the mask discriminator.
//!
//! The mask pipeline compares pixels byte-for-byte against the background
//! sentinel, so colors are stored as four u8 channels rather than floats.
//! Also carries the sketch palette as named constants.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Sketch palette: "sand".
pub const SAND: Rgba = Rgba::opaque(0xF2, 0xE8, 0xC4);
/// Sketch palette: "rain".
pub const RAIN: Rgba = Rgba::opaque(0x98, 0xD9, 0xB6);
/// Sketch palette: "green".
pub const GREEN: Rgba = Rgba::opaque(0x3E, 0xC9, 0xA7);
/// Sketch palette: "water".
pub const WATER: Rgba = Rgba::opaque(0x2B, 0x87, 0x9E);
/// Sketch palette: "black" (a warm near-black, not #000000).
pub const BLACK: Rgba = Rgba::opaque(0x61, 0x66, 0x68);
/// Sketch palette: "light" — the firefly body color.
pub const LIGHT: Rgba = Rgba::opaque(0xC9, 0xF2, 0x02);

impl Rgba {
    /// Creates a color from four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses a hex color string, "#rrggbb" or "rrggbb", case insensitive.
    /// The result is fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, EngineError> {
        let raw = hex.strip_prefix('#').unwrap_or(hex);
        if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EngineError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&raw[i..i + 2], 16)
                .map_err(|e| EngineError::InvalidColor(format!("'{hex}': {e}")))
        };
        Ok(Self::opaque(channel(0)?, channel(2)?, channel(4)?))
    }
}
