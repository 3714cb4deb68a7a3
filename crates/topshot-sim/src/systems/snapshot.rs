//! Snapshot builder: refreshes terrain-derived values and packages the world.

use topshot_core::events::GameEvent;
use topshot_core::state::{AimView, TargetView, TopView, WorldSnapshot};
use topshot_core::types::{Position, SimTime};
use topshot_terrain::TerrainError;

use crate::world::World;

/// Build the snapshot for the current tick.
///
/// The top's `y` is re-derived from the terrain here, the same way a draw
/// call would place it.
pub fn build_snapshot(
    world: &mut World,
    time: &SimTime,
    events: Vec<GameEvent>,
) -> Result<WorldSnapshot, TerrainError> {
    let (x, z) = (world.top.position.x, world.top.position.z);
    world.top.position.y = world.terrain.support_height(x, z)?;
    let tilt = world.terrain.tilt_at(x, z)?;

    let target = world.target;
    let target_y = world.terrain.support_height(target.x, target.z)?;

    Ok(WorldSnapshot {
        time: *time,
        top: TopView {
            position: world.top.position,
            velocity: world.top.velocity,
            fired: world.top.fired,
            tilt,
        },
        target: TargetView {
            position: Position::new(target.x, target_y, target.z),
        },
        aim: AimView {
            theta: world.aim.theta,
            pointer: world.aim.pointer,
            visible: !world.top.fired,
        },
        power: world.power,
        score: world.score,
        events,
    })
}
