//! Terrain: a HeightField paired with its cached NormalField.
//!
//! All height writes go through [`Terrain::set_height`], which invalidates
//! the normals, so a clean cache always matches the current elevations.

use glam::Vec3;

use topshot_core::types::Tilt;

use crate::error::TerrainError;
use crate::grid::HeightField;
use crate::normals::NormalField;
use crate::tilt::tilt_from_normal;

/// Elevation grid plus lazily computed surface normals.
#[derive(Debug, Clone)]
pub struct Terrain {
    heights: HeightField,
    normals: NormalField,
}

impl Terrain {
    /// Flat terrain at elevation zero.
    pub fn new(width: usize, length: usize) -> Result<Self, TerrainError> {
        Ok(Self::from_heights(HeightField::new(width, length)?))
    }

    /// Wrap an existing height field; normals start stale.
    pub fn from_heights(heights: HeightField) -> Self {
        let normals = NormalField::for_grid(&heights);
        Self { heights, normals }
    }

    pub fn width(&self) -> usize {
        self.heights.width()
    }

    pub fn length(&self) -> usize {
        self.heights.length()
    }

    /// Read-only view of the elevations.
    pub fn heights(&self) -> &HeightField {
        &self.heights
    }

    /// Whether the grid spans at least `width` x `length` cells.
    pub fn covers(&self, width: usize, length: usize) -> bool {
        self.width() >= width && self.length() >= length
    }

    pub fn height(&self, x: usize, z: usize) -> Result<f32, TerrainError> {
        self.heights.height(x, z)
    }

    /// Store an elevation and mark the normals stale.
    pub fn set_height(&mut self, x: usize, z: usize, value: f32) -> Result<(), TerrainError> {
        self.heights.set_height(x, z, value)?;
        self.normals.invalidate();
        Ok(())
    }

    /// Normal at cell `(x, z)`; recomputes the whole field first if stale.
    pub fn normal(&mut self, x: usize, z: usize) -> Result<Vec3, TerrainError> {
        self.normals.normal(&self.heights, x, z)
    }

    /// Eagerly bring the normals up to date.
    pub fn compute_normals(&mut self) {
        self.normals.refresh(&self.heights);
    }

    /// The normal cache, for inspection.
    pub fn normal_field(&self) -> &NormalField {
        &self.normals
    }

    /// Cell under a continuous ground position.
    ///
    /// Each coordinate is floored; the result must land inside the grid.
    pub fn cell_at(&self, x: f32, z: f32) -> Result<(usize, usize), TerrainError> {
        let cx = x.floor();
        let cz = z.floor();
        let inside = cx.is_finite()
            && cz.is_finite()
            && cx >= 0.0
            && cz >= 0.0
            && (cx as usize) < self.width()
            && (cz as usize) < self.length();
        if !inside {
            return Err(TerrainError::OutOfBounds {
                x: cx as i64,
                z: cz as i64,
                width: self.width(),
                length: self.length(),
            });
        }
        Ok((cx as usize, cz as usize))
    }

    /// Ground elevation under a continuous position.
    pub fn support_height(&self, x: f32, z: f32) -> Result<f32, TerrainError> {
        let (cx, cz) = self.cell_at(x, z)?;
        self.heights.height(cx, cz)
    }

    /// Surface normal under a continuous position.
    pub fn surface_normal(&mut self, x: f32, z: f32) -> Result<Vec3, TerrainError> {
        let (cx, cz) = self.cell_at(x, z)?;
        self.normal(cx, cz)
    }

    /// Tilt for an object resting at a continuous position.
    pub fn tilt_at(&mut self, x: f32, z: f32) -> Result<Tilt, TerrainError> {
        Ok(tilt_from_normal(self.surface_normal(x, z)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: Vec3) -> [u32; 3] {
        v.to_array().map(f32::to_bits)
    }

    #[test]
    fn test_flat_terrain_normals_are_up() {
        let mut terrain = Terrain::new(8, 6).unwrap();
        for z in 0..6 {
            for x in 0..8 {
                terrain.set_height(x, z, 2.0).unwrap();
            }
        }
        for z in 0..6 {
            for x in 0..8 {
                assert_eq!(terrain.normal(x, z).unwrap(), Vec3::Y);
            }
        }
    }

    #[test]
    fn test_repeated_normal_reads_are_identical() {
        let mut terrain = Terrain::new(5, 5).unwrap();
        terrain.set_height(2, 2, 3.0).unwrap();
        let a = terrain.normal(1, 2).unwrap();
        let b = terrain.normal(1, 2).unwrap();
        assert_eq!(bits(a), bits(b));
        assert_eq!(terrain.normal_field().recompute_count(), 1);
    }

    #[test]
    fn test_set_height_invalidates_everywhere() {
        let mut terrain = Terrain::new(5, 5).unwrap();
        let before = terrain.normal(1, 1).unwrap();
        assert_eq!(before, Vec3::Y);

        // A tiny change at a far cell must still be visible next to it.
        terrain.set_height(2, 1, 1e-3).unwrap();
        assert!(terrain.normal_field().is_dirty());
        let after = terrain.normal(1, 1).unwrap();
        assert_ne!(bits(before), bits(after));
        assert_eq!(terrain.normal_field().recompute_count(), 2);
    }

    #[test]
    fn test_cell_at_floors() {
        let terrain = Terrain::new(60, 60).unwrap();
        assert_eq!(terrain.cell_at(2.0, 58.0).unwrap(), (2, 58));
        assert_eq!(terrain.cell_at(59.99, 0.4).unwrap(), (59, 0));
        assert!(terrain.cell_at(60.0, 0.0).is_err());
        assert!(terrain.cell_at(-0.5, 0.0).is_err());
        assert!(terrain.cell_at(f32::NAN, 0.0).is_err());
    }

    #[test]
    fn test_support_height_uses_cell_under_position() {
        let mut terrain = Terrain::new(4, 4).unwrap();
        terrain.set_height(1, 2, 6.5).unwrap();
        assert_eq!(terrain.support_height(1.7, 2.2).unwrap(), 6.5);
        assert_eq!(terrain.support_height(2.0, 2.2).unwrap(), 0.0);
    }

    #[test]
    fn test_tilt_on_flat_ground() {
        let mut terrain = Terrain::new(3, 3).unwrap();
        let tilt = terrain.tilt_at(1.5, 1.5).unwrap();
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn test_covers() {
        let terrain = Terrain::new(60, 64).unwrap();
        assert!(terrain.covers(60, 60));
        assert!(!terrain.covers(61, 60));
    }
}
