//! World snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::{Position, SimTime, Tilt, Velocity};

/// Complete world state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub top: TopView,
    pub target: TargetView,
    pub aim: AimView,
    pub power: u8,
    pub score: i32,
    pub events: Vec<GameEvent>,
}

/// The top as the renderer draws it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopView {
    /// Position with `y` taken from the terrain under the top.
    pub position: Position,
    pub velocity: Velocity,
    pub fired: bool,
    /// Orientation matching the terrain slope under the top.
    pub tilt: Tilt,
}

/// The target as the renderer draws it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    /// Position with `y` taken from the terrain under the target.
    pub position: Position,
}

/// Aim pointer shown while the top is resting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AimView {
    /// Aim angle offset in radians.
    pub theta: f32,
    /// Pointer end point on the ground plane.
    pub pointer: Position,
    /// Whether the pointer line should be drawn.
    pub visible: bool,
}
