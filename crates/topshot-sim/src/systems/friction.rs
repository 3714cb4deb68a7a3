//! Ground friction.
//!
//! Applies only while both ground components are non-zero. The deceleration
//! is projected through `tmptheta = -atan(vz / vx)` by magnitude only, and
//! each component's deceleration sign is chosen opposite to that component's
//! own sign, so both components shrink in every quadrant.

use topshot_core::constants::{DECELERATION, FRICTION_SCALE};
use topshot_core::types::Velocity;

/// `-1` for a negative component, `+1` otherwise (zero counts as positive).
pub fn direction_sign(component: f32) -> i8 {
    if component < 0.0 {
        -1
    } else {
        1
    }
}

/// Decelerate `velocity` for one tick.
pub fn apply(velocity: &mut Velocity) {
    if velocity.x == 0.0 || velocity.z == 0.0 {
        return;
    }

    let tmptheta = -((velocity.z / velocity.x) as f64).atan();

    let ax = opposing(velocity.x) as f64;
    velocity.x = (velocity.x as f64 + ax * tmptheta.cos().abs() * FRICTION_SCALE) as f32;

    let az = opposing(velocity.z) as f64;
    velocity.z = (velocity.z as f64 + az * tmptheta.sin().abs() * FRICTION_SCALE) as f32;
}

fn opposing(component: f32) -> f32 {
    if component < 0.0 {
        DECELERATION
    } else {
        -DECELERATION
    }
}
