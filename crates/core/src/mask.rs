//! Two-dimensional color grid used as the spot-sampling input.
//!
//! A `Mask` stores `width * height` [`Rgba`] pixels in row-major layout.
//! The pixel at (0, 0) is the reserved background sentinel: any sampled
//! pixel equal to it is treated as background, everything else qualifies
//! as a spot.

use crate::color::Rgba;
use crate::error::EngineError;

/// A 2D grid of colors with exact per-pixel equality.
#[derive(Debug, Clone)]
pub struct Mask {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Mask {
    /// Creates a mask filled with `color`.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Result<Self, EngineError> {
        let len = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Creates a mask from a pre-built pixel vector, validating that
    /// `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, EngineError> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(EngineError::DimensionMismatch {
                width,
                height,
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Mask width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] = color;
    }

    /// The reserved background sentinel color: the pixel at (0, 0).
    pub fn background(&self) -> Rgba {
        self.pixels[0]
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

/// Validates dimensions and returns `width * height`.
fn checked_area(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn filled_creates_uniform_mask() {
        let mask = Mask::filled(4, 3, color::WATER).unwrap();
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.pixels().len(), 12);
        assert!(mask.pixels().iter().all(|&p| p == color::WATER));
    }

    #[test]
    fn filled_with_zero_dimension_returns_error() {
        assert!(matches!(
            Mask::filled(0, 5, color::SAND),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(matches!(
            Mask::filled(5, 0, color::SAND),
            Err(EngineError::InvalidDimensions)
        ));
    }

    #[test]
    fn filled_with_overflow_dimensions_returns_error() {
        assert!(Mask::filled(usize::MAX, 2, color::SAND).is_err());
    }

    #[test]
    fn from_pixels_validates_length() {
        let pixels = vec![color::SAND; 6];
        let mask = Mask::from_pixels(3, 2, pixels).unwrap();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);

        let result = Mask::from_pixels(2, 2, vec![color::SAND; 3]);
        assert!(matches!(
            result,
            Err(EngineError::DimensionMismatch {
                expected: 4,
                got: 3,
                ..
            })
        ));
    }

    #[test]
    fn from_pixels_rejects_zero_dimensions() {
        assert!(Mask::from_pixels(0, 5, vec![]).is_err());
    }

    #[test]
    fn get_and_set_are_row_major() {
        let mut mask = Mask::filled(3, 2, color::BLACK).unwrap();
        mask.set(2, 1, color::LIGHT);
        assert_eq!(mask.get(2, 1), color::LIGHT);
        assert_eq!(mask.pixels()[1 * 3 + 2], color::LIGHT);
        assert_eq!(mask.get(1, 1), color::BLACK);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let mask = Mask::filled(2, 2, color::BLACK).unwrap();
        let _ = mask.get(2, 0);
    }

    #[test]
    fn background_is_top_left_pixel() {
        let mut mask = Mask::filled(4, 4, color::BLACK).unwrap();
        assert_eq!(mask.background(), color::BLACK);
        mask.set(0, 0, color::SAND);
        assert_eq!(mask.background(), color::SAND);
    }

    #[test]
    fn clone_produces_independent_copy() {
        let mut original = Mask::filled(3, 3, color::BLACK).unwrap();
        let clone = original.clone();
        original.set(1, 1, color::LIGHT);
        assert_eq!(clone.get(1, 1), color::BLACK);
    }
}
