//! PhysicsStep: the per-tick update of the top.

use topshot_core::events::GameEvent;

use crate::systems::{collision, friction};
use crate::world::World;

/// Advance the top by one tick.
///
/// Order is fixed: friction, rest reset, zero-crossing stop, target hit,
/// boundary clamp and commit.
pub fn step(world: &mut World, events: &mut Vec<GameEvent>) {
    let (prev_sign_x, prev_sign_z) = collision::ground_signs(&world.top.velocity);

    friction::apply(&mut world.top.velocity);
    collision::rest_reset(world, events);
    collision::zero_crossing(world, prev_sign_x, prev_sign_z, events);
    collision::target_hit(world, events);
    collision::boundary(world, events);
}
