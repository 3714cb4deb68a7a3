//! Game engine: the single writer of all game state.
//!
//! `GameEngine` owns the world, processes player commands at tick
//! boundaries, runs the physics step, and produces `WorldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use log::{debug, warn};

use topshot_core::commands::PlayerCommand;
use topshot_core::constants::{
    DEFAULT_HEIGHT_SCALE, MAX_POWER, NUDGE_STEP, WORLD_CELLS, WORLD_HIGH_CLAMP, WORLD_MIN,
};
use topshot_core::events::GameEvent;
use topshot_core::state::WorldSnapshot;
use topshot_core::types::SimTime;
use topshot_terrain::loader::build_terrain;
use topshot_terrain::{IntensityGrid, Perturbation, Terrain, TerrainError};

use crate::error::SimError;
use crate::systems;
use crate::world::World;

/// Configuration for building a world from an intensity grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Vertical range of the heightmap.
    pub height_scale: f32,
    /// Jitter applied while loading the heightmap.
    pub perturbation: Perturbation,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            height_scale: DEFAULT_HEIGHT_SCALE,
            perturbation: Perturbation::None,
        }
    }
}

/// The game engine. Owns the world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Build a terrain from intensities and start a session on it.
    pub fn new(grid: &IntensityGrid, config: SimConfig) -> Result<Self, SimError> {
        let terrain = build_terrain(grid, config.height_scale, config.perturbation)?;
        Self::with_terrain(terrain)
    }

    /// Start a session on a prebuilt terrain covering the play area.
    pub fn with_terrain(mut terrain: Terrain) -> Result<Self, SimError> {
        if !terrain.covers(WORLD_CELLS, WORLD_CELLS) {
            return Err(SimError::TerrainTooSmall {
                width: terrain.width(),
                length: terrain.length(),
                required: WORLD_CELLS,
            });
        }
        terrain.compute_normals();

        Ok(Self {
            world: World::new(terrain),
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> Result<WorldSnapshot, SimError> {
        self.process_commands();
        systems::physics::step(&mut self.world, &mut self.events);
        self.time.advance();
        self.snapshot()
    }

    /// Snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> Result<WorldSnapshot, SimError> {
        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &mut self.world,
            &self.time,
            events,
        )?)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only terrain for drawing.
    pub fn terrain(&self) -> &Terrain {
        &self.world.terrain
    }

    /// Terrain normal at a cell, for drawing.
    pub fn normal(&mut self, x: usize, z: usize) -> Result<Vec3, TerrainError> {
        self.world.terrain.normal(x, z)
    }

    /// Mutable world access for tests that stage specific situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        debug!("command: {command:?}");
        match command {
            PlayerCommand::RotateAim { direction } => {
                systems::aim::rotate(&mut self.world, direction);
            }
            PlayerCommand::IncreasePower => {
                if self.world.power < MAX_POWER {
                    self.world.power += 1;
                }
            }
            PlayerCommand::DecreasePower => {
                self.world.power = self.world.power.saturating_sub(1);
            }
            PlayerCommand::NudgeLeft | PlayerCommand::NudgeRight => {
                let top = &mut self.world.top;
                if top.fired {
                    warn!("nudge ignored: top in flight");
                    return;
                }
                match command {
                    PlayerCommand::NudgeLeft if top.position.x > WORLD_MIN => {
                        top.position.x -= NUDGE_STEP;
                    }
                    PlayerCommand::NudgeRight if top.position.x < WORLD_HIGH_CLAMP => {
                        top.position.x += NUDGE_STEP;
                    }
                    _ => {}
                }
            }
            PlayerCommand::Launch => {
                systems::launch::run(&mut self.world, &mut self.events);
            }
        }
    }
}
