//! Simulation constants and tuning parameters.

/// Physics tick period in milliseconds.
pub const TICK_MILLIS: u64 = 10;

// --- World bounds ---

/// Exclusive upper bound of the play area on both ground axes.
pub const WORLD_MAX: f32 = 60.0;

/// Lower bound of the play area on both ground axes.
pub const WORLD_MIN: f32 = 0.0;

/// Coordinate a top is clamped to when it reaches the upper bound.
pub const WORLD_HIGH_CLAMP: f32 = 59.0;

/// Terrain cells needed to cover the play area on each axis.
pub const WORLD_CELLS: usize = 60;

// --- Top ---

/// Where the top sits when the session starts.
pub const START_POSITION: (f32, f32, f32) = (5.0, 0.0, 58.0);

/// Where the top returns after a shot ends.
pub const LAUNCH_POINT: (f32, f32, f32) = (2.0, 0.0, 58.0);

/// Launch speed per unit of power.
pub const SPEED_FACTOR: f32 = 0.1;

/// Maximum launch power.
pub const MAX_POWER: u8 = 9;

/// Distance the top moves per nudge.
pub const NUDGE_STEP: f32 = 1.0;

// --- Friction ---

/// Deceleration magnitude applied per tick while both ground components move.
pub const DECELERATION: f32 = 0.0005;

/// Multiplier applied to the projected deceleration.
pub const FRICTION_SCALE: f64 = 10.0;

// --- Target ---

/// Fixed target location on the ground plane (y comes from the terrain).
pub const TARGET_POSITION: (f32, f32) = (59.0, 0.0);

/// Half-width of the square hit box around the target.
pub const HIT_RADIUS: f32 = 3.0;

// --- Scoring ---

/// Score at the start of a session.
pub const INITIAL_SCORE: i32 = 10;

/// Points awarded for a target hit.
pub const HIT_REWARD: i32 = 10;

/// Points lost when a fired top comes to rest away from the target.
pub const MISS_PENALTY: i32 = 1;

// --- Aim pointer ---

/// Distance from the top to the aim pointer.
pub const AIM_RADIUS: f32 = 80.0;

/// Aim rotation per command (radians).
pub const AIM_STEP: f32 = 0.01;

// --- Terrain ---

/// Weight of each neighbour's provisional normal during smoothing.
pub const FALLOUT_RATIO: f32 = 0.5;

/// Default vertical range of a loaded heightmap.
pub const DEFAULT_HEIGHT_SCALE: f32 = 20.0;
