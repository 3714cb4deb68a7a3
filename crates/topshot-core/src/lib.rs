//! Core types and definitions for the TOPSHOT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, commands, events, state snapshots, and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod commands;
pub mod constants;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
