//! Heightmap loader: 8-bit intensity grid → Terrain.
//!
//! Elevation is `height_scale * (intensity / 255 - 0.5)`, so a heightmap
//! spans `-height_scale / 2 ..= height_scale / 2` before perturbation.

use std::path::Path;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;
use crate::grid::HeightField;
use crate::terrain::Terrain;

/// Row-major grid of 8-bit intensity samples (`z * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    length: usize,
    samples: Vec<u8>,
}

/// Random jitter applied to each sample after intensity mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Perturbation {
    /// Use the mapped elevations as-is.
    #[default]
    None,
    /// Scale each sample by `k / 10` (`k` in `0..10`) and add `j / 2`
    /// (`j` in `0..2`), drawing from one ChaCha8 stream seeded once per load.
    Seeded { seed: u64 },
}

impl IntensityGrid {
    pub fn new(width: usize, length: usize, samples: Vec<u8>) -> Result<Self, TerrainError> {
        if width == 0 || length == 0 {
            return Err(TerrainError::EmptyGrid { width, length });
        }
        if samples.len() != width * length {
            return Err(TerrainError::SampleCount {
                expected: width * length,
                got: samples.len(),
            });
        }
        Ok(Self {
            width,
            length,
            samples,
        })
    }

    /// Red-channel intensities of a decoded RGB image; rows become z.
    /// Grayscale sources expand to equal channels, so their values carry over.
    pub fn from_red_channel(image: &image::RgbImage) -> Result<Self, TerrainError> {
        let samples = image.pixels().map(|p| p.0[0]).collect();
        Self::new(image.width() as usize, image.height() as usize, samples)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

impl Perturbation {
    fn apply(self, elevations: &mut [f32]) {
        match self {
            Perturbation::None => {}
            Perturbation::Seeded { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for h in elevations.iter_mut() {
                    let scale = rng.gen_range(0..10u32) as f32 / 10.0;
                    let offset = rng.gen_range(0..2u32) as f32 / 2.0;
                    *h = *h * scale + offset;
                }
            }
        }
    }
}

/// Map intensities to elevations and build a terrain with normals computed.
pub fn build_terrain(
    grid: &IntensityGrid,
    height_scale: f32,
    perturbation: Perturbation,
) -> Result<Terrain, TerrainError> {
    let mut elevations: Vec<f32> = grid
        .samples
        .iter()
        .map(|&s| height_scale * (s as f32 / 255.0 - 0.5))
        .collect();
    perturbation.apply(&mut elevations);

    let heights = HeightField::from_elevations(grid.width, grid.length, elevations)?;
    let mut terrain = Terrain::from_heights(heights);
    terrain.compute_normals();

    debug!(
        "built {}x{} terrain (scale {height_scale}, {perturbation:?})",
        grid.width, grid.length
    );
    Ok(terrain)
}

/// Decode an image file (any format the `image` crate reads) into a terrain.
pub fn load_image(
    path: &Path,
    height_scale: f32,
    perturbation: Perturbation,
) -> Result<Terrain, TerrainError> {
    let rgb = image::open(path)?.into_rgb8();
    let grid = IntensityGrid::from_red_channel(&rgb)?;
    build_terrain(&grid, height_scale, perturbation)
}
