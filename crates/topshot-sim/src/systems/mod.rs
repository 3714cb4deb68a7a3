//! Systems that operate on the world.
//!
//! Systems are plain functions over `&mut World`. They do not own state;
//! all state lives in the world.

pub mod aim;
pub mod collision;
pub mod friction;
pub mod launch;
pub mod physics;
pub mod snapshot;
