//! Error types for the firefly-engine core.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating a mask, or the area overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not match the declared mask dimensions.
    #[error("dimension mismatch: ({width}, {height}) needs {expected} pixels, got {got}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// The mask yielded zero qualifying spots — every sampled pixel matched
    /// the background sentinel color.
    #[error(
        "empty spot field: no pixel in the {width}x{height} mask differs from the background color"
    )]
    EmptySpotField { width: usize, height: usize },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A requested engine name was not recognized by the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A requested lighting strategy name was not recognized.
    #[error("unknown lighting: {0}")]
    UnknownLighting(String),

    /// An I/O failure while reading a mask or writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
