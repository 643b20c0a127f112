#![deny(unsafe_code)]
//! Fireflies swarm engine.
//!
//! A fixed population of glowing flies wanders between the bright spots of
//! a mask image. Each tick every fly checks whether it reached its target,
//! re-targets to a nearby spot when it has, turns toward the target with a
//! bounded per-tick rotation, records its trail, and moves forward along
//! its heading. The engine emits fading trail segments and a marker per
//! fly; rasterization is someone else's job.
//!
//! The historical sketches "Fireflies" and "Luciernagas" differed only in
//! visual dressing; both collapse into this one engine.

pub mod particle;
pub mod steering;
pub mod trail;

use firefly_core::error::EngineError;
use firefly_core::frame::{FlyFrame, Frame};
use firefly_core::mask::Mask;
use firefly_core::params::{param_f64, param_usize};
use firefly_core::prng::Xorshift64;
use firefly_core::spots::SpotField;
use firefly_core::Engine;
use glam::DVec2;
use serde_json::{json, Value};
use std::f64::consts::TAU;

pub use particle::Firefly;

/// Population size. Fixed at reset; the original spawned flies 0..=100.
pub const FLY_COUNT: usize = 101;

/// Default forward speed in pixels per tick.
const DEFAULT_SPEED: f64 = 5.0;
/// Default maximum trail length in entries.
const DEFAULT_TAIL_LENGTH: usize = 30;
/// Default turn budget as a percentage of a full turn per tick.
const DEFAULT_ROTATION_MAX: f64 = 7.0;
/// Default arrival distance in pixels.
const DEFAULT_TARGET_RADIUS: f64 = 20.0;
/// Default re-target sampling distance in pixels.
const DEFAULT_SPOT_DISTANCE: f64 = 80.0;

/// Live-mutable tunables for the swarm, with the original slider defaults.
///
/// All five are read fresh every tick. No cross-validation is performed:
/// a `target_radius` at or above `spot_distance` makes flies re-target
/// every tick, which is a (documented) behavior, not an error.
#[derive(Debug, Clone, Copy)]
pub struct SwarmParams {
    /// Forward speed in pixels per tick (slider 0–20).
    pub speed: f64,
    /// Maximum trail entries per fly (slider 0–400).
    pub tail_length: usize,
    /// Turn budget per tick as a percentage of a full turn (slider 0–30).
    pub rotation_max: f64,
    /// Arrival distance in pixels (slider 5–99).
    pub target_radius: f64,
    /// Re-target sampling distance in pixels (slider 5–200).
    pub spot_distance: f64,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            tail_length: DEFAULT_TAIL_LENGTH,
            rotation_max: DEFAULT_ROTATION_MAX,
            target_radius: DEFAULT_TARGET_RADIUS,
            spot_distance: DEFAULT_SPOT_DISTANCE,
        }
    }
}

impl SwarmParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self::default().merged_with(params)
    }

    /// Returns a copy with the keys present in `params` updated and every
    /// other field carried over — the single-slider update path.
    pub fn merged_with(&self, params: &Value) -> Self {
        Self {
            speed: param_f64(params, "speed", self.speed),
            tail_length: param_usize(params, "tail_length", self.tail_length),
            rotation_max: param_f64(params, "rotation_max", self.rotation_max),
            target_radius: param_f64(params, "target_radius", self.target_radius),
            spot_distance: param_f64(params, "spot_distance", self.spot_distance),
        }
    }

    /// The per-tick turn budget in radians: `rotation_max / 100 * 2π`.
    /// Recomputed each tick so slider changes take effect immediately.
    pub fn rotation_max_radians(&self) -> f64 {
        self.rotation_max / 100.0 * TAU
    }
}

/// The simulation controller: owns the spot field, the RNG, the tunables,
/// and the fly population.
pub struct Swarm {
    width: usize,
    height: usize,
    spot_field: SpotField,
    rng: Xorshift64,
    params: SwarmParams,
    flies: Vec<Firefly>,
}

impl Swarm {
    /// Builds the spot field from `mask` (sampled every `stride` pixels)
    /// and spawns the initial population.
    ///
    /// Returns `EngineError::EmptySpotField` if no mask pixel differs from
    /// the background sentinel, and `EngineError::InvalidDimensions` for a
    /// zero stride.
    pub fn new(
        mask: &Mask,
        stride: usize,
        seed: u64,
        params: SwarmParams,
    ) -> Result<Self, EngineError> {
        let spot_field = SpotField::build(mask, stride)?;
        let mut swarm = Self {
            width: mask.width(),
            height: mask.height(),
            spot_field,
            rng: Xorshift64::new(seed),
            params,
            flies: Vec::new(),
        };
        swarm.reset();
        Ok(swarm)
    }

    /// Creates a swarm from a JSON params object (missing keys default).
    pub fn from_json(
        mask: &Mask,
        stride: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(mask, stride, seed, SwarmParams::from_json(json_params))
    }

    /// Read-only access to the population, in update (and draw) order.
    pub fn flies(&self) -> &[Firefly] {
        &self.flies
    }

    /// The spot field the swarm wanders between.
    pub fn spot_field(&self) -> &SpotField {
        &self.spot_field
    }

    /// Current tunables as a struct (JSON view lives on [`Engine::params`]).
    pub fn tunables(&self) -> SwarmParams {
        self.params
    }

    /// Spawns one fly: position on a random spot, target a nearby spot,
    /// heading uniform in [0, 2π), empty trail.
    fn spawn(spot_field: &SpotField, rng: &mut Xorshift64, params: &SwarmParams) -> Firefly {
        let position = spot_field.random_spot(rng);
        let target = spot_field.spot_near(position, params.spot_distance, rng);
        let heading = rng.next_angle();
        Firefly::new(position, target, heading)
    }
}

impl Engine for Swarm {
    fn step(&mut self) -> Result<(), EngineError> {
        let rotation_max = self.params.rotation_max_radians();
        let params = self.params;
        let spot_field = &self.spot_field;
        let rng = &mut self.rng;

        for fly in &mut self.flies {
            // arrival check, then re-target near the current position
            if fly.position.distance(fly.target) <= params.target_radius {
                fly.target = spot_field.spot_near(fly.position, params.spot_distance, rng);
            }

            // turn toward the target, the short way, at most rotation_max
            let delta = fly.target - fly.position;
            let desired = delta.y.atan2(delta.x);
            let reconciled = steering::nearest_rotation(fly.heading, desired);
            fly.heading = steering::turn_towards(fly.heading, reconciled, rotation_max);

            // trail records the pre-move position
            fly.record_trail(params.tail_length);

            fly.position += params.speed * DVec2::from_angle(fly.heading);
        }

        Ok(())
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(self.width, self.height);
        frame.flies = self
            .flies
            .iter()
            .map(|fly| FlyFrame {
                trail: trail::trail_segments(&fly.trail),
                marker: fly.position,
            })
            .collect();
        frame
    }

    fn params(&self) -> Value {
        json!({
            "speed": self.params.speed,
            "tail_length": self.params.tail_length,
            "rotation_max": self.params.rotation_max,
            "target_radius": self.params.target_radius,
            "spot_distance": self.params.spot_distance,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "speed": {
                "type": "number",
                "default": DEFAULT_SPEED,
                "min": 0,
                "max": 20,
                "description": "Forward speed in pixels per tick"
            },
            "tail_length": {
                "type": "integer",
                "default": DEFAULT_TAIL_LENGTH,
                "min": 0,
                "max": 400,
                "description": "Maximum trail entries per fly"
            },
            "rotation_max": {
                "type": "number",
                "default": DEFAULT_ROTATION_MAX,
                "min": 0,
                "max": 30,
                "description": "Turn budget per tick, percent of a full turn"
            },
            "target_radius": {
                "type": "number",
                "default": DEFAULT_TARGET_RADIUS,
                "min": 5,
                "max": 99,
                "description": "Arrival distance in pixels"
            },
            "spot_distance": {
                "type": "number",
                "default": DEFAULT_SPOT_DISTANCE,
                "min": 5,
                "max": 200,
                "description": "Re-target sampling distance in pixels"
            }
        })
    }

    fn apply_params(&mut self, params: &Value) {
        self.params = self.params.merged_with(params);
    }

    fn reset(&mut self) {
        // Build the replacement population first, swap in one assignment:
        // no frame ever observes a half-reset swarm.
        let flies = (0..FLY_COUNT)
            .map(|_| Self::spawn(&self.spot_field, &mut self.rng, &self.params))
            .collect();
        self.flies = flies;
    }
}
