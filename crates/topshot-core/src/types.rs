//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in world space (terrain grid units).
/// x = column, z = row, y = up (elevation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 3D velocity in grid units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

/// Rotation that stands a locally "up" object on the terrain slope.
///
/// The renderer rotates by `-angle` about `axis`. A vertical normal yields
/// a zero angle and a zero axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    /// Angle between the normal and +Y, in radians.
    pub angle: f32,
    /// Rotation axis, `(-Nz/|N|, 0, Nx/|N|)`.
    pub axis: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Horizontal distance on the ground plane (ignoring elevation).
    pub fn ground_range_to(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Speed on the ground plane.
    pub fn ground_speed(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += crate::constants::TICK_MILLIS;
    }
}

impl Tilt {
    /// Tilt angle in degrees, as fixed-function rotation calls expect.
    pub fn degrees(&self) -> f32 {
        self.angle.to_degrees()
    }
}
