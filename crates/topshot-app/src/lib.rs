//! TOPSHOT headless driver.
//!
//! Runs the game engine on a dedicated loop thread (the only writer of
//! game state) and feeds it player commands from the input layer.

pub mod game_loop;
pub mod input;
pub mod state;

pub use topshot_core as core;
