//! State shared between the input thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use topshot_core::commands::PlayerCommand;
use topshot_core::state::WorldSnapshot;

/// Commands sent from the input layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles the input side keeps after the loop starts.
///
/// The engine itself never leaves the loop thread; other threads only send
/// commands and read cloned snapshots.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot, updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
}

impl AppState {
    /// Forward a player command; fails once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> Result<(), String> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {e}"))
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Result<Option<WorldSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_empty_snapshot() {
        let (tx, rx) = mpsc::channel();
        let state = AppState {
            command_tx: tx,
            latest_snapshot: Arc::new(Mutex::new(None)),
        };
        state.send(PlayerCommand::Launch).unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::PlayerCommand(PlayerCommand::Launch))
        ));
        assert!(state.snapshot().unwrap().is_none());

        drop(rx);
        assert!(state.send(PlayerCommand::Launch).is_err());
    }
}
