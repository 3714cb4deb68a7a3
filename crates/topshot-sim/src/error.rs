//! Engine error type.

use thiserror::Error;

use topshot_terrain::TerrainError;

/// Errors raised while building or advancing the simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The terrain does not span the whole play area.
    #[error("terrain is {width}x{length}, the play area needs {required}x{required}")]
    TerrainTooSmall {
        width: usize,
        length: usize,
        required: usize,
    },

    /// A terrain query or construction failed.
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}
