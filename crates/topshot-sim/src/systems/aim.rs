//! Aim pointer: a point `AIM_RADIUS` away from the top, swung by commands.

use std::f64::consts::PI;

use topshot_core::commands::AimDirection;
use topshot_core::constants::{AIM_RADIUS, AIM_STEP};
use topshot_core::types::Position;

use crate::world::{Aim, World};

/// Pointer for a new session, straight along +x from the top.
pub fn initial(top: &Position) -> Aim {
    let theta = 0.0f32;
    let t = theta as f64;
    let r = AIM_RADIUS as f64;
    Aim {
        theta,
        pointer: Position::new(
            (top.x as f64 - r * (PI - t).cos()) as f32,
            0.0,
            (top.z as f64 - r * (PI - t).sin()) as f32,
        ),
    }
}

/// Swing the pointer one step around the top's current position.
pub fn rotate(world: &mut World, direction: AimDirection) {
    let aim = &mut world.aim;
    match direction {
        AimDirection::Clockwise => aim.theta -= AIM_STEP,
        AimDirection::CounterClockwise => aim.theta += AIM_STEP,
    }

    let t = aim.theta as f64;
    let r = AIM_RADIUS as f64;
    let top = &world.top.position;
    aim.pointer = Position::new(
        (top.x as f64 - r * (PI + t).cos()) as f32,
        0.0,
        (top.z as f64 - r * (PI + t).sin()) as f32,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use topshot_terrain::Terrain;

    fn world() -> World {
        World::new(Terrain::new(60, 60).unwrap())
    }

    #[test]
    fn test_initial_pointer_along_x() {
        let aim = initial(&Position::new(5.0, 0.0, 58.0));
        assert_eq!(aim.theta, 0.0);
        assert_eq!(aim.pointer, Position::new(85.0, 0.0, 58.0));
    }

    #[test]
    fn test_clockwise_swings_toward_negative_z() {
        let mut world = world();
        rotate(&mut world, AimDirection::Clockwise);
        assert!((world.aim.theta + 0.01).abs() < 1e-7);
        assert!(world.aim.pointer.z < 58.0);
        assert!(world.aim.pointer.x > 84.0);
        let radius = world.top.position.ground_range_to(&world.aim.pointer);
        assert!((radius - AIM_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_rotations_cancel() {
        let mut world = world();
        rotate(&mut world, AimDirection::CounterClockwise);
        assert!(world.aim.pointer.z > 58.0);
        rotate(&mut world, AimDirection::Clockwise);
        assert!(world.aim.theta.abs() < 1e-7);
        assert!((world.aim.pointer.z - 58.0).abs() < 1e-4);
    }
}
