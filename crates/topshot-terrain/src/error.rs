//! Error types for terrain construction and queries.

use thiserror::Error;

/// Errors that can occur while building or querying a terrain.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// A cell index fell outside the grid.
    #[error("cell ({x}, {z}) is outside the {width}x{length} grid")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        z: i64,
        /// Grid width.
        width: usize,
        /// Grid length.
        length: usize,
    },

    /// A grid was requested with a zero dimension.
    #[error("grid dimensions must be non-zero, got {width}x{length}")]
    EmptyGrid {
        /// Requested width.
        width: usize,
        /// Requested length.
        length: usize,
    },

    /// Sample buffer does not match the grid dimensions.
    #[error("expected {expected} samples, got {got}")]
    SampleCount {
        /// `width * length`.
        expected: usize,
        /// Samples actually supplied.
        got: usize,
    },

    /// The heightmap image could not be read or decoded.
    #[error("failed to load heightmap image: {0}")]
    Image(#[from] image::ImageError),
}
