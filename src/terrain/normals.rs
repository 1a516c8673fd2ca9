//! Per-vertex normals from central differences of scaled heights

use glam::Vec3;

use super::heightfield::HeightField;
use super::vertex::TerrainVertex;

/// Below this length the normal is left unnormalized
pub const NORMAL_EPSILON: f32 = 1.0e-4;

/// Normal at grid cell (col, row).
///
/// Border cells reuse themselves as the missing neighbour (one-sided
/// difference). Non-finite input falls back to straight up.
pub fn grid_normal(field: &HeightField, col: usize, row: usize, spacing: f32, height_scale: f32) -> Vec3 {
    let size = field.size();
    let col_left = col.saturating_sub(1);
    let col_right = (col + 1).min(size - 1);
    let row_up = row.saturating_sub(1);
    let row_down = (row + 1).min(size - 1);

    let h_left = field.get(col_left, row) * height_scale;
    let h_right = field.get(col_right, row) * height_scale;
    let h_up = field.get(col, row_up) * height_scale;
    let h_down = field.get(col, row_down) * height_scale;

    let n = Vec3::new(h_left - h_right, 2.0 * spacing, h_up - h_down);
    if !n.is_finite() {
        return Vec3::Y;
    }

    let len = n.length();
    if len > NORMAL_EPSILON { n / len } else { n }
}

/// Overwrite the normals of the first `size * size` vertices.
///
/// Must run after the grid pass and before skirts copy grid vertices.
pub fn estimate_normals(
    vertices: &mut [TerrainVertex],
    field: &HeightField,
    spacing: f32,
    height_scale: f32,
) {
    let size = field.size();
    for row in 0..size {
        for col in 0..size {
            let n = grid_normal(field, col, row, spacing, height_scale);
            vertices[row * size + col].normal = n.to_array();
        }
    }
    log::debug!("Normals estimated for {} grid vertices", size * size);
}
