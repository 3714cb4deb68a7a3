//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Gameplay events produced during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The top left the launch point.
    Launched { power: u8 },
    /// The top reached the target box.
    TargetHit { score: i32 },
    /// A fired top came to rest away from the target.
    Missed { score: i32 },
    /// The top reached the edge of the play area and stopped.
    WallContact,
    /// Friction would have reversed the top; it stopped instead.
    Halted,
}
