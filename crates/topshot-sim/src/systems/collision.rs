//! Stop and reset rules applied after friction each tick.
//!
//! Each rule sees the state left by the previous one, so a reset early in
//! the tick leaves later rules looking at a top at rest.

use log::info;

use topshot_core::constants::{
    HIT_RADIUS, HIT_REWARD, MISS_PENALTY, WORLD_HIGH_CLAMP, WORLD_MAX, WORLD_MIN,
};
use topshot_core::events::GameEvent;
use topshot_core::types::Velocity;

use crate::systems::friction::direction_sign;
use crate::world::World;

/// A fired top whose x and y velocity are exactly zero has come to rest:
/// send it back to the launch point and charge the miss.
pub fn rest_reset(world: &mut World, events: &mut Vec<GameEvent>) {
    let top = &mut world.top;
    if !(top.fired && top.velocity.x == 0.0 && top.velocity.y == 0.0) {
        return;
    }

    top.reset_to_launch();
    world.power = 0;
    world.score -= MISS_PENALTY;

    info!("shot missed, score {}", world.score);
    events.push(GameEvent::Missed { score: world.score });
}

/// Stop the top outright if friction reversed either ground component.
pub fn zero_crossing(
    world: &mut World,
    prev_sign_x: i8,
    prev_sign_z: i8,
    events: &mut Vec<GameEvent>,
) {
    let v = &mut world.top.velocity;
    let reversed = |component: f32, prev: i8| {
        (component < 0.0 && prev == 1) || (component > 0.0 && prev == -1)
    };
    if !(reversed(v.x, prev_sign_x) || reversed(v.z, prev_sign_z)) {
        return;
    }

    v.x = 0.0;
    v.z = 0.0;
    world.power = 0;
    events.push(GameEvent::Halted);
}

/// Score a hit when the next position falls inside the target box.
pub fn target_hit(world: &mut World, events: &mut Vec<GameEvent>) {
    let (px, pz) = world.top.projected();
    let target = world.target;
    if !((target.x - px).abs() < HIT_RADIUS && (target.z - pz).abs() < HIT_RADIUS) {
        return;
    }

    world.score += HIT_REWARD;
    world.top.reset_to_launch();
    world.power = 0;

    info!("target hit, score {}", world.score);
    events.push(GameEvent::TargetHit { score: world.score });
}

/// Advance by one tick of velocity, clamping to the play area.
///
/// Reaching `WORLD_MAX` clamps to `WORLD_HIGH_CLAMP`, reaching `WORLD_MIN`
/// clamps to `WORLD_MIN`; either one stops the top.
pub fn boundary(world: &mut World, events: &mut Vec<GameEvent>) {
    let top = &mut world.top;
    let (mut final_x, mut final_z) = top.projected();

    let mut clamped = false;
    for coord in [&mut final_x, &mut final_z] {
        if *coord >= WORLD_MAX {
            *coord = WORLD_HIGH_CLAMP;
            clamped = true;
        }
        if *coord <= WORLD_MIN {
            *coord = WORLD_MIN;
            clamped = true;
        }
    }

    if clamped {
        if !top.velocity.is_zero() {
            events.push(GameEvent::WallContact);
        }
        top.velocity = Velocity::default();
    }

    top.position.x = final_x;
    top.position.z = final_z;
}

/// Signs of the ground velocity components before any rule runs.
pub fn ground_signs(velocity: &Velocity) -> (i8, i8) {
    (direction_sign(velocity.x), direction_sign(velocity.z))
}
