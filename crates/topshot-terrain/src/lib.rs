//! Terrain system for TOPSHOT.
//!
//! Heightmap loading, lazily cached surface normals,
//! and support/tilt queries for objects resting on the ground.

pub use topshot_core as core;

pub mod error;
pub mod grid;
pub mod loader;
pub mod normals;
pub mod terrain;
pub mod tilt;

// Re-export key types for convenience.
pub use error::TerrainError;
pub use grid::HeightField;
pub use loader::{IntensityGrid, Perturbation};
pub use normals::NormalField;
pub use terrain::Terrain;
pub use tilt::tilt_from_normal;
