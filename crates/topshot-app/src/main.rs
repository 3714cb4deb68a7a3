//! topshot: headless TOPSHOT session driven from stdin.
//!
//! Usage:
//!   topshot-app [--heightmap heightmap.png] [--seed 7] [--height-scale 20]
//!
//! Each input line is one key: a / c (aim), up / down (power),
//! left / right (nudge), space (launch), status, q.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use topshot_app::game_loop::spawn_game_loop;
use topshot_app::input::{parse_key, InputAction};
use topshot_app::state::GameLoopCommand;
use topshot_core::constants::{DEFAULT_HEIGHT_SCALE, WORLD_CELLS};
use topshot_sim::GameEngine;
use topshot_terrain::loader::load_image;
use topshot_terrain::{Perturbation, Terrain};

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let terrain = match parse_path(&args, "--heightmap") {
        Some(path) => {
            let perturbation = match parse_value::<u64>(&args, "--seed")? {
                Some(seed) => Perturbation::Seeded { seed },
                None => Perturbation::None,
            };
            let scale = parse_value(&args, "--height-scale")?.unwrap_or(DEFAULT_HEIGHT_SCALE);
            load_image(&path, scale, perturbation)
                .with_context(|| format!("loading heightmap {}", path.display()))?
        }
        None => {
            info!("no --heightmap given, using flat {WORLD_CELLS}x{WORLD_CELLS} terrain");
            Terrain::new(WORLD_CELLS, WORLD_CELLS)?
        }
    };
    info!("terrain {}x{}", terrain.width(), terrain.length());

    let engine = GameEngine::with_terrain(terrain)?;
    let (state, handle) = spawn_game_loop(engine).context("spawning game loop")?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match parse_key(&line) {
            Some(InputAction::Command(cmd)) => {
                if let Err(e) = state.send(cmd) {
                    warn!("{e}");
                    break;
                }
            }
            Some(InputAction::Status) => match state.snapshot() {
                Ok(Some(snap)) => println!("{}", serde_json::to_string_pretty(&snap)?),
                Ok(None) => println!("no tick yet"),
                Err(e) => warn!("{e}"),
            },
            Some(InputAction::Quit) => break,
            None => warn!("unknown key: {}", line.trim()),
        }
    }

    let _ = state.command_tx.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Ok(Some(snap)) = state.snapshot() {
        println!("final score: {}", snap.score);
    }
    Ok(())
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_value<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            let value = args[i + 1]
                .parse()
                .with_context(|| format!("invalid value for {flag}: {}", args[i + 1]))?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}
