//! PNG input and output.
//!
//! This module is feature-gated behind `png` (default on) so headless
//! consumers can depend on the `engines` crate without pulling in the
//! `image` crate. Rasterization itself lives in [`crate::pixel`] (always
//! available).

use firefly_core::color::Rgba;
use firefly_core::error::EngineError;
use firefly_core::mask::Mask;
use std::path::Path;

/// Loads an image file as a [`Mask`].
///
/// Any format the `image` crate recognizes is accepted; pixels are
/// converted to RGBA8. Returns `EngineError::Io` on read or decode
/// failure.
pub fn load_mask(path: &Path) -> Result<Mask, EngineError> {
    let img = image::open(path)
        .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?
        .to_rgba8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let pixels = img
        .pixels()
        .map(|p| Rgba::new(p.0[0], p.0[1], p.0[2], p.0[3]))
        .collect();
    Mask::from_pixels(w, h, pixels)
}

/// Writes a rendered RGBA8 buffer as a PNG image.
///
/// Returns `EngineError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `EngineError::Io` on a buffer size mismatch or write failure.
pub fn write_png(rgba: Vec<u8>, width: usize, height: usize, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(width).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
