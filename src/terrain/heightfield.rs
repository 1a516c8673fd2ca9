//! Square grid of raw fBm elevations

use crate::core::error::try_alloc;
use crate::core::Result;
use crate::noise::NoiseContext;
use super::config::NoiseParams;

/// `size * size` raw noise samples in row-major order.
///
/// Values are unscaled; world height is applied when vertices are built so
/// the same field can be re-scaled without resampling.
#[derive(Clone, Debug)]
pub struct HeightField {
    size: usize,
    values: Vec<f32>,
}

impl HeightField {
    /// Sample `fbm(col / size * scale, row / size * scale, octaves)` at every cell.
    pub fn generate(noise: &NoiseContext, size: usize, params: &NoiseParams) -> Result<Self> {
        let count = size * size;
        let mut values = try_alloc("heightfield", count)?;

        for row in 0..size {
            for col in 0..size {
                let (nx, ny) = Self::noise_coords(col, row, size, params.scale);
                values.push(noise.fbm(nx, ny, params.octaves));
            }
        }

        log::debug!("Heightfield sampled: {}x{} ({} octaves, scale {})",
            size, size, params.octaves, params.scale);

        Ok(Self { size, values })
    }

    /// Build from existing samples. Returns `None` if the length is not `size * size`.
    pub fn from_values(size: usize, values: Vec<f32>) -> Option<Self> {
        (values.len() == size * size).then_some(Self { size, values })
    }

    /// Noise-space coordinates for grid cell (col, row)
    #[inline]
    pub fn noise_coords(col: usize, row: usize, size: usize, scale: f32) -> (f32, f32) {
        let nx = col as f32 / size as f32 * scale;
        let ny = row as f32 / size as f32 * scale;
        (nx, ny)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at (col, row). Panics when out of range.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.values[row * self.size + col]
    }

    /// Sample with both coordinates clamped into the grid
    #[inline]
    pub fn get_clamped(&self, col: i64, row: i64) -> f32 {
        let max = self.size as i64 - 1;
        self.get(col.clamp(0, max) as usize, row.clamp(0, max) as usize)
    }

    /// Lowest and highest raw samples
    pub fn min_max(&self) -> (f32, f32) {
        self.values.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }
}
