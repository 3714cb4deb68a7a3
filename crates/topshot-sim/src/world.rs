//! World: everything the tick handler mutates, gathered in one struct.

use topshot_core::constants::{INITIAL_SCORE, TARGET_POSITION};
use topshot_core::types::Position;
use topshot_terrain::Terrain;

use crate::projectile::Top;
use crate::systems::aim;

/// Fixed target on the ground plane; elevation comes from the terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    pub z: f32,
}

impl Default for Target {
    fn default() -> Self {
        let (x, z) = TARGET_POSITION;
        Self { x, z }
    }
}

/// Aim pointer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    /// Angle offset in radians; 0 points along +x.
    pub theta: f32,
    /// Pointer end point (y is always 0).
    pub pointer: Position,
}

/// Complete mutable game state.
#[derive(Debug, Clone)]
pub struct World {
    pub terrain: Terrain,
    pub top: Top,
    pub target: Target,
    pub aim: Aim,
    /// Launch power in `0..=MAX_POWER`.
    pub power: u8,
    pub score: i32,
}

impl World {
    /// Fresh session on the given terrain.
    pub fn new(terrain: Terrain) -> Self {
        let top = Top::default();
        Self {
            terrain,
            aim: aim::initial(&top.position),
            top,
            target: Target::default(),
            power: 0,
            score: INITIAL_SCORE,
        }
    }
}
