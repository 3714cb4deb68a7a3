//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Direction to swing the aim pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimDirection {
    /// Decreases the aim angle.
    Clockwise,
    /// Increases the aim angle.
    CounterClockwise,
}

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Swing the aim pointer one step.
    RotateAim { direction: AimDirection },
    /// Raise launch power by one (capped at the maximum).
    IncreasePower,
    /// Lower launch power by one (floored at zero).
    DecreasePower,
    /// Slide the resting top one cell toward -x.
    NudgeLeft,
    /// Slide the resting top one cell toward +x.
    NudgeRight,
    /// Fire the top toward the aim pointer with the current power.
    Launch,
}
