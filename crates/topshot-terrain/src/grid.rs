//! HeightField: fixed-size grid of elevation samples.

use crate::error::TerrainError;

/// Row-major grid of elevations, `width` columns by `length` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: usize,
    length: usize,
    /// Elevation values, row-major (index `z * width + x`).
    elevations: Vec<f32>,
}

impl HeightField {
    /// Create a flat grid at elevation zero.
    pub fn new(width: usize, length: usize) -> Result<Self, TerrainError> {
        Self::from_elevations(width, length, vec![0.0; width * length])
    }

    /// Create a grid from pre-computed row-major elevations.
    pub fn from_elevations(
        width: usize,
        length: usize,
        elevations: Vec<f32>,
    ) -> Result<Self, TerrainError> {
        if width == 0 || length == 0 {
            return Err(TerrainError::EmptyGrid { width, length });
        }
        if elevations.len() != width * length {
            return Err(TerrainError::SampleCount {
                expected: width * length,
                got: elevations.len(),
            });
        }
        Ok(Self {
            width,
            length,
            elevations,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Elevation at integer cell `(x, z)`.
    pub fn height(&self, x: usize, z: usize) -> Result<f32, TerrainError> {
        let idx = self.index(x, z)?;
        Ok(self.elevations[idx])
    }

    /// Store an elevation at integer cell `(x, z)`.
    ///
    /// Does not touch cached normals; go through [`crate::Terrain::set_height`]
    /// when normals are paired with this grid.
    pub fn set_height(&mut self, x: usize, z: usize, value: f32) -> Result<(), TerrainError> {
        let idx = self.index(x, z)?;
        self.elevations[idx] = value;
        Ok(())
    }

    /// Raw row-major elevations.
    pub fn elevations(&self) -> &[f32] {
        &self.elevations
    }

    /// Lowest and highest elevation in the grid.
    pub fn elevation_range(&self) -> (f32, f32) {
        self.elevations
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Unchecked read for callers that have already validated `(x, z)`.
    pub(crate) fn at(&self, x: usize, z: usize) -> f32 {
        self.elevations[z * self.width + x]
    }

    fn index(&self, x: usize, z: usize) -> Result<usize, TerrainError> {
        if x >= self.width || z >= self.length {
            return Err(TerrainError::OutOfBounds {
                x: x as i64,
                z: z as i64,
                width: self.width,
                length: self.length,
            });
        }
        Ok(z * self.width + x)
    }
}
