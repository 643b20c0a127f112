#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations and provides
//! CPU-side frame rasterization.
//!
//! This crate sits between `firefly-core` (which defines the `Engine`
//! trait) and the engine crates (`firefly-swarm`). The CLI depends on this
//! crate so dispatch logic lives in one place.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use firefly_core::error::EngineError;
use firefly_core::frame::Frame;
use firefly_core::mask::Mask;
use firefly_core::Engine;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["fireflies"];

/// Enumeration of all available engines.
///
/// Wraps each engine implementation and delegates `Engine` trait methods.
/// Use [`EngineKind::from_name`] for string-based construction (CLI).
pub enum EngineKind {
    /// The fireflies swarm (also answers to its Spanish name).
    Fireflies(firefly_swarm::Swarm),
}

impl EngineKind {
    /// Constructs an engine by name over the given mask.
    ///
    /// `"luciernagas"` is accepted as an alias for `"fireflies"` — the
    /// historical sketches were the same simulation. Returns
    /// `EngineError::UnknownEngine` for anything else.
    pub fn from_name(
        name: &str,
        mask: &Mask,
        stride: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "fireflies" | "luciernagas" => Ok(EngineKind::Fireflies(
                firefly_swarm::Swarm::from_json(mask, stride, seed, params)?,
            )),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Fireflies(e) => e.step(),
        }
    }

    fn frame(&self) -> Frame {
        match self {
            EngineKind::Fireflies(e) => e.frame(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Fireflies(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Fireflies(e) => e.param_schema(),
        }
    }

    fn apply_params(&mut self, params: &Value) {
        match self {
            EngineKind::Fireflies(e) => e.apply_params(params),
        }
    }

    fn reset(&mut self) {
        match self {
            EngineKind::Fireflies(e) => e.reset(),
        }
    }
}
