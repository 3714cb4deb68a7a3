//! NormalField: per-cell surface normals derived from a HeightField.
//!
//! Normals are estimated in two passes. The first pass sums the unit face
//! normals of the (up to four) triangles fanning out from each cell. The
//! second pass blends each provisional normal with its 4-neighbours at
//! `FALLOUT_RATIO` weight. The second pass reads only first-pass output.

use glam::Vec3;
use log::debug;

use topshot_core::constants::FALLOUT_RATIO;

use crate::error::TerrainError;
use crate::grid::HeightField;

/// Cached normals for one HeightField, recomputed lazily when stale.
#[derive(Debug, Clone)]
pub struct NormalField {
    normals: Vec<Vec3>,
    dirty: bool,
    recomputations: u64,
}

impl NormalField {
    /// Create an empty, stale cache shaped like `heights`.
    pub fn for_grid(heights: &HeightField) -> Self {
        Self {
            normals: vec![Vec3::ZERO; heights.width() * heights.length()],
            dirty: true,
            recomputations: 0,
        }
    }

    /// Mark the cache stale. Must follow every height write.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of full recomputations performed so far.
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    /// Recompute every normal if the cache is stale.
    pub fn refresh(&mut self, heights: &HeightField) {
        if !self.dirty {
            return;
        }
        self.normals = compute_normals(heights);
        self.dirty = false;
        self.recomputations += 1;
        debug!(
            "recomputed {}x{} terrain normals",
            heights.width(),
            heights.length()
        );
    }

    /// Normal at cell `(x, z)`, refreshing the cache first if needed.
    pub fn normal(
        &mut self,
        heights: &HeightField,
        x: usize,
        z: usize,
    ) -> Result<Vec3, TerrainError> {
        if x >= heights.width() || z >= heights.length() {
            return Err(TerrainError::OutOfBounds {
                x: x as i64,
                z: z as i64,
                width: heights.width(),
                length: heights.length(),
            });
        }
        self.refresh(heights);
        Ok(self.normals[z * heights.width() + x])
    }

    /// All cached normals, row-major. `None` while stale.
    pub fn cached(&self) -> Option<&[Vec3]> {
        (!self.dirty).then_some(self.normals.as_slice())
    }
}

/// Run both normal passes over the whole grid.
pub fn compute_normals(heights: &HeightField) -> Vec<Vec3> {
    let rough = face_normals(heights);
    smooth_normals(&rough, heights.width(), heights.length())
}

/// Pass 1: sum of unit face normals around each cell (not normalized).
fn face_normals(heights: &HeightField) -> Vec<Vec3> {
    let w = heights.width();
    let l = heights.length();
    let mut rough = Vec::with_capacity(w * l);

    for z in 0..l {
        for x in 0..w {
            let h = heights.at(x, z);

            let out = (z > 0).then(|| Vec3::new(0.0, heights.at(x, z - 1) - h, -1.0));
            let inward = (z + 1 < l).then(|| Vec3::new(0.0, heights.at(x, z + 1) - h, 1.0));
            let left = (x > 0).then(|| Vec3::new(-1.0, heights.at(x - 1, z) - h, 0.0));
            let right = (x + 1 < w).then(|| Vec3::new(1.0, heights.at(x + 1, z) - h, 0.0));

            // Counter-clockwise pairs seen from above so each cross points up.
            let mut sum = Vec3::ZERO;
            for pair in [(out, left), (left, inward), (inward, right), (right, out)] {
                if let (Some(a), Some(b)) = pair {
                    sum += a.cross(b).normalize_or_zero();
                }
            }
            rough.push(sum);
        }
    }

    rough
}

/// Pass 2: blend with 4-neighbours; degenerate results point straight up.
fn smooth_normals(rough: &[Vec3], w: usize, l: usize) -> Vec<Vec3> {
    let mut smooth = Vec::with_capacity(w * l);

    for z in 0..l {
        for x in 0..w {
            let idx = z * w + x;
            let mut sum = rough[idx];

            if x > 0 {
                sum += rough[idx - 1] * FALLOUT_RATIO;
            }
            if x + 1 < w {
                sum += rough[idx + 1] * FALLOUT_RATIO;
            }
            if z > 0 {
                sum += rough[idx - w] * FALLOUT_RATIO;
            }
            if z + 1 < l {
                sum += rough[idx + w] * FALLOUT_RATIO;
            }

            let normal = sum.normalize_or_zero();
            smooth.push(if normal == Vec3::ZERO { Vec3::Y } else { normal });
        }
    }

    smooth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, length: usize, slope: f32) -> HeightField {
        let mut elevations = Vec::with_capacity(width * length);
        for _z in 0..length {
            for x in 0..width {
                elevations.push(x as f32 * slope);
            }
        }
        HeightField::from_elevations(width, length, elevations).unwrap()
    }

    #[test]
    fn test_flat_grid_points_up() {
        let grid = HeightField::from_elevations(5, 4, vec![3.25; 20]).unwrap();
        for n in compute_normals(&grid) {
            assert_eq!(n, Vec3::Y);
        }
    }

    #[test]
    fn test_ramp_leans_downhill() {
        // Height rises toward +x, so normals tilt toward -x.
        let grid = ramp(6, 6, 1.0);
        let normals = compute_normals(&grid);
        let n = normals[3 * 6 + 3];
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        assert!(
            (n - expected).length() < 1e-5,
            "interior normal should be 45° downhill, got {n}"
        );
        assert!(n.z.abs() < 1e-6);
    }

    #[test]
    fn test_normals_are_unit_length() {
        #[rustfmt::skip]
        let grid = HeightField::from_elevations(4, 4, vec![
            0.0, 1.0, 0.5, 2.0,
            1.5, 3.0, 0.0, 1.0,
            0.0, 0.2, 4.0, 2.0,
            1.0, 0.0, 1.0, 0.0,
        ])
        .unwrap();
        for n in compute_normals(&grid) {
            assert!((n.length() - 1.0).abs() < 1e-5, "got {n}");
            assert!(n.y > 0.0, "terrain normals face up, got {n}");
        }
    }

    #[test]
    fn test_single_row_and_column_are_finite() {
        for (w, l) in [(1, 1), (1, 5), (5, 1)] {
            let elevations = (0..w * l).map(|i| i as f32 * 2.0).collect();
            let grid = HeightField::from_elevations(w, l, elevations).unwrap();
            let normals = compute_normals(&grid);
            assert_eq!(normals.len(), w * l);
            for n in normals {
                assert!(n.is_finite());
                // No neighbour pair exists, so every cell falls back to up.
                assert_eq!(n, Vec3::Y);
            }
        }
    }

    #[test]
    fn test_smoothing_reads_unsmoothed_neighbours() {
        // A single peak: the smoothed normal at a cell must equal the blend
        // computed directly from pass-1 output.
        let mut grid = HeightField::new(5, 5).unwrap();
        grid.set_height(2, 2, 4.0).unwrap();
        let rough = face_normals(&grid);
        let smooth = smooth_normals(&rough, 5, 5);

        let idx = 5 + 2; // (x=2, z=1)
        let expected = (rough[idx]
            + (rough[idx - 1] + rough[idx + 1] + rough[idx - 5] + rough[idx + 5]) * FALLOUT_RATIO)
            .normalize();
        assert!((smooth[idx] - expected).length() < 1e-6);
    }

    #[test]
    fn test_field_caches_until_invalidated() {
        let grid = ramp(4, 4, 0.5);
        let mut field = NormalField::for_grid(&grid);
        assert!(field.is_dirty());
        assert!(field.cached().is_none());

        let first = field.normal(&grid, 1, 1).unwrap();
        let second = field.normal(&grid, 1, 1).unwrap();
        assert_eq!(first.to_array().map(f32::to_bits), second.to_array().map(f32::to_bits));
        assert_eq!(field.recompute_count(), 1);
        assert!(field.cached().is_some());

        field.invalidate();
        field.normal(&grid, 0, 0).unwrap();
        assert_eq!(field.recompute_count(), 2);
    }

    #[test]
    fn test_field_bounds() {
        let grid = HeightField::new(3, 2).unwrap();
        let mut field = NormalField::for_grid(&grid);
        assert!(matches!(
            field.normal(&grid, 3, 0),
            Err(TerrainError::OutOfBounds { x: 3, .. })
        ));
        assert!(field.normal(&grid, 2, 1).is_ok());
    }
}
