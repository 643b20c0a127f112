//! Reproducible specification for a rendered scene.
//!
//! A [`Seed`] captures everything needed to recreate a run: engine name,
//! mask asset, sampling stride, parameter overrides, PRNG seed, and step
//! count. Two identical `Seed` values fed to the same binary produce
//! bit-identical output.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a rendered scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    /// Path or name of the mask asset the spot field was built from.
    pub mask: String,
    /// Sampling stride used for the spot-field grid scan.
    pub stride: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub steps: usize,
}

impl Seed {
    /// Creates a new Seed with default params (`{}`) and steps (`0`).
    pub fn new(engine: &str, mask: &str, stride: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            mask: mask.to_string(),
            stride,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
        }
    }

    /// Validates that the stride is non-zero and the mask name is non-empty.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.stride == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        if self.mask.is_empty() {
            return Err(EngineError::Io("seed has an empty mask asset".into()));
        }
        Ok(())
    }
}
