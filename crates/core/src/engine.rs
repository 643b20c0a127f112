//! The core `Engine` trait that every simulation engine must implement.
//!
//! The trait is object-safe so engines can be used as `dyn Engine` for
//! runtime switching between algorithms.

use crate::error::EngineError;
use crate::frame::Frame;
use serde_json::Value;

/// Core trait for frame-driven particle engines.
///
/// Each engine advances a simulation one tick at a time and produces a
/// [`Frame`] of draw data for an external renderer. Configuration is
/// live-mutable: `apply_params` may be called between any two ticks.
///
/// This trait is **object-safe**: you can use `Box<dyn Engine>` or
/// `&dyn Engine` for runtime polymorphism.
pub trait Engine {
    /// Advance the simulation by one tick.
    fn step(&mut self) -> Result<(), EngineError>;

    /// Draw data for the current state. Rebuilt on every call.
    fn frame(&self) -> Frame;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// Updates the parameters named in `params`, leaving the rest unchanged.
    ///
    /// Missing or wrongly-typed keys are ignored, so a partial update from
    /// a single slider is valid input.
    fn apply_params(&mut self, params: &Value);

    /// Replaces the whole population with a freshly created one.
    ///
    /// The swap is a single assignment: no frame ever observes a
    /// half-reset population.
    fn reset(&mut self);
}
