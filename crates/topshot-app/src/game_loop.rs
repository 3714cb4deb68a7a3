//! Game loop thread. Ticks the engine at a fixed period and publishes snapshots.
//!
//! The engine moves into this thread and never leaves it, so every mutation
//! of terrain, top, and score happens here. Commands arrive via `mpsc`
//! channel; snapshots are stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{error, info};

use topshot_core::constants::TICK_MILLIS;
use topshot_core::events::GameEvent;
use topshot_core::state::WorldSnapshot;
use topshot_sim::GameEngine;

use crate::state::{AppState, GameLoopCommand};

/// Duration of one physics tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MILLIS);

/// Spawns the game loop in a new thread.
///
/// Returns the handles the input side uses plus the thread's join handle.
pub fn spawn_game_loop(engine: GameEngine) -> io::Result<(AppState, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let handle = std::thread::Builder::new()
        .name("topshot-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared))?;

    Ok((
        AppState {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// The game loop. Runs until Shutdown command, channel disconnect, or a
/// terrain query fails.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = match engine.tick() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("game loop stopped: {e}");
                return;
            }
        };
        log_events(&snapshot);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_events(snapshot: &WorldSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::TargetHit { score } => info!("HIT! score {score}"),
            GameEvent::Missed { score } => info!("miss, score {score}"),
            _ => {}
        }
    }
}
