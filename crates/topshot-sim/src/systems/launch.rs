//! Launch: one-shot action turning power and aim into an initial velocity.

use log::{info, warn};

use topshot_core::constants::SPEED_FACTOR;
use topshot_core::events::GameEvent;
use topshot_core::types::Velocity;

use crate::world::World;

/// Fire the top toward the aim pointer. Ignored while a shot is in flight.
///
/// With slope `m` from the top to the pointer:
/// `vx = power * speed / sqrt(1 + m²)`, `vz = power * speed * m / sqrt(1 + m²)`.
/// A pointer directly in line on x sends the top straight along z.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    if world.top.fired {
        warn!("launch ignored: top already in flight");
        return;
    }

    let top = &mut world.top;
    let pointer = world.aim.pointer;
    let speed = (world.power as f32 * SPEED_FACTOR) as f64;
    let dx = pointer.x - top.position.x;
    let dz = pointer.z - top.position.z;

    top.velocity = if dx == 0.0 {
        Velocity::new(0.0, 0.0, (speed as f32).copysign(dz))
    } else {
        let m = dz / dx;
        let norm = (1.0 + (m * m) as f64).sqrt();
        Velocity::new((speed / norm) as f32, 0.0, (speed * m as f64 / norm) as f32)
    };
    top.fired = true;

    info!(
        "launched with power {} (vx={:.4}, vz={:.4})",
        world.power, top.velocity.x, top.velocity.z
    );
    events.push(GameEvent::Launched { power: world.power });
}
