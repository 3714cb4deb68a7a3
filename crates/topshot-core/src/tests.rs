use crate::commands::{AimDirection, PlayerCommand};
use crate::constants::TICK_MILLIS;
use crate::events::GameEvent;
use crate::state::WorldSnapshot;
use crate::types::{Position, SimTime, Tilt, Velocity};

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::RotateAim {
            direction: AimDirection::Clockwise,
        },
        PlayerCommand::IncreasePower,
        PlayerCommand::DecreasePower,
        PlayerCommand::NudgeLeft,
        PlayerCommand::NudgeRight,
        PlayerCommand::Launch,
    ];
    for cmd in commands {
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}

#[test]
fn test_command_tagged_format() {
    let json = serde_json::to_string(&PlayerCommand::RotateAim {
        direction: AimDirection::CounterClockwise,
    })
    .unwrap();
    assert!(json.contains("\"type\":\"RotateAim\""), "got {json}");
    assert!(json.contains("CounterClockwise"), "got {json}");
}

#[test]
fn test_event_tagged_format() {
    let json = serde_json::to_string(&GameEvent::TargetHit { score: 20 }).unwrap();
    assert_eq!(json, r#"{"type":"TargetHit","score":20}"#);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..5 {
        time.advance();
    }
    assert_eq!(time.tick, 5);
    assert_eq!(time.elapsed_ms, 5 * TICK_MILLIS);
}

#[test]
fn test_ground_range_ignores_elevation() {
    let a = Position::new(0.0, 100.0, 0.0);
    let b = Position::new(3.0, -50.0, 4.0);
    assert_eq!(a.ground_range_to(&b), 5.0);
}

#[test]
fn test_velocity_zero_and_speed() {
    assert!(Velocity::default().is_zero());
    let v = Velocity::new(0.3, 0.0, 0.4);
    assert!(!v.is_zero());
    assert!((v.ground_speed() - 0.5).abs() < 1e-6);
}

#[test]
fn test_tilt_degrees() {
    let tilt = Tilt {
        angle: std::f32::consts::FRAC_PI_2,
        ..Default::default()
    };
    assert!((tilt.degrees() - 90.0).abs() < 1e-4);
}

#[test]
fn test_snapshot_serde_round_trip() {
    let mut snapshot = WorldSnapshot {
        power: 4,
        score: 9,
        ..Default::default()
    };
    snapshot.top.fired = true;
    snapshot.events.push(GameEvent::Launched { power: 4 });

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}
