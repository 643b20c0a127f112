#![deny(unsafe_code)]
//! Core types and traits for the firefly-engine particle system.
//!
//! Provides the `Engine` trait, `Mask`/`SpotField` spot-sampling inputs,
//! `Frame` draw-data output, `Rgba` color, `Xorshift64` PRNG, `Seed`,
//! and parameter helpers.

pub mod color;
pub mod engine;
pub mod error;
pub mod frame;
pub mod mask;
pub mod params;
pub mod prng;
pub mod seed;
pub mod spots;

pub use color::Rgba;
pub use engine::Engine;
pub use error::EngineError;
pub use frame::{FlyFrame, Frame, TrailSegment};
pub use mask::Mask;
pub use prng::Xorshift64;
pub use seed::Seed;
pub use spots::SpotField;
