//! Simulation engine for TOPSHOT.
//!
//! Owns the world (terrain, top, target, score), runs the physics step
//! once per tick, and produces WorldSnapshots for the renderer.

pub mod engine;
pub mod error;
pub mod projectile;
pub mod systems;
pub mod world;

pub use engine::{GameEngine, SimConfig};
pub use error::SimError;
pub use topshot_core as core;
