//! The top: the player-launched projectile.

use topshot_core::constants::{LAUNCH_POINT, START_POSITION};
use topshot_core::types::{Position, Velocity};

/// Position, velocity, and launch state of the top.
///
/// `position.y` is only ever written from the terrain height under the top
/// (see `systems::snapshot`) or zeroed by a reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Top {
    pub position: Position,
    pub velocity: Velocity,
    pub fired: bool,
}

impl Default for Top {
    fn default() -> Self {
        let (x, y, z) = START_POSITION;
        Self {
            position: Position::new(x, y, z),
            velocity: Velocity::default(),
            fired: false,
        }
    }
}

impl Top {
    /// Return to the launch point at rest and ready to fire again.
    pub fn reset_to_launch(&mut self) {
        let (x, y, z) = LAUNCH_POINT;
        self.position = Position::new(x, y, z);
        self.velocity = Velocity::default();
        self.fired = false;
    }

    /// Ground position after one more tick at the current velocity.
    pub fn projected(&self) -> (f32, f32) {
        (
            self.position.x + self.velocity.x,
            self.position.z + self.velocity.z,
        )
    }
}
