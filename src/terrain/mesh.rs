//! Heightfield to vertex buffer: grid pass and skirt pass
//!
//! The vertex buffer holds `size * size` grid vertices followed by one skirt
//! ring per patch. Each ring walks the patch boundary as four edges of
//! `patch_size + 1` vertices (top left→right, right top→bottom, bottom
//! right→left, left bottom→top); corners appear on both adjacent edges.

use glam::{UVec2, Vec3};

use super::heightfield::HeightField;
use super::vertex::TerrainVertex;

/// Patch boundary edge, in skirt ring order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Position of this edge within a skirt ring
    pub fn ordinal(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }

    /// Unclamped grid (col, row) of the `i`-th vertex along this edge.
    ///
    /// ```
    /// use glam::UVec2;
    /// use heightpatch::terrain::mesh::Edge;
    ///
    /// let origin = UVec2::new(4, 8);
    /// assert_eq!(Edge::Top.point(origin, 0, 4), (4, 8));
    /// assert_eq!(Edge::Right.point(origin, 1, 4), (8, 9));
    /// assert_eq!(Edge::Bottom.point(origin, 0, 4), (8, 12));
    /// assert_eq!(Edge::Left.point(origin, 4, 4), (4, 8));
    /// ```
    pub fn point(self, origin: UVec2, i: u32, patch_size: u32) -> (usize, usize) {
        let (c, r) = (origin.x as usize, origin.y as usize);
        let (i, p) = (i as usize, patch_size as usize);
        match self {
            Edge::Top => (c + i, r),
            Edge::Right => (c + p, r + i),
            Edge::Bottom => (c + p - i, r + p),
            Edge::Left => (c, r + p - i),
        }
    }

    /// Outward direction in the XZ plane (+z is increasing row)
    pub fn outward(self) -> Vec3 {
        match self {
            Edge::Top => Vec3::NEG_Z,
            Edge::Right => Vec3::X,
            Edge::Bottom => Vec3::Z,
            Edge::Left => Vec3::NEG_X,
        }
    }
}

/// Clamp a grid coordinate to `[0, size - 1]`
#[inline]
pub fn clamp_to_grid(value: usize, size: usize) -> usize {
    value.min(size - 1)
}

/// Where each patch's skirt ring lives in the shared vertex buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkirtLayout {
    pub grid_count: usize,
    pub patch_size: u32,
}

impl SkirtLayout {
    pub fn new(size: usize, patch_size: u32) -> Self {
        Self { grid_count: size * size, patch_size }
    }

    /// Vertices per edge, corners included
    pub fn edge_len(&self) -> usize {
        self.patch_size as usize + 1
    }

    /// `4 * (patch_size + 1)`
    pub fn vertices_per_patch(&self) -> usize {
        4 * self.edge_len()
    }

    pub fn patch_start(&self, patch_index: usize) -> usize {
        self.grid_count + patch_index * self.vertices_per_patch()
    }

    pub fn edge_start(&self, patch_index: usize, edge: Edge) -> usize {
        self.patch_start(patch_index) + edge.ordinal() * self.edge_len()
    }

    /// Total buffer length for `patch_count` patches
    pub fn vertex_count(&self, patch_count: usize) -> usize {
        self.grid_count + patch_count * self.vertices_per_patch()
    }
}

/// Distance from grid corner to grid centre along each axis
#[inline]
pub fn grid_offset(size: usize, spacing: f32) -> f32 {
    (size as f32 - 1.0) * spacing / 2.0
}

/// Grid pass: one vertex per heightfield sample, centred on the origin.
///
/// Normals are left pointing up; see [`super::normals::estimate_normals`].
pub fn push_grid_vertices(
    vertices: &mut Vec<TerrainVertex>,
    field: &HeightField,
    spacing: f32,
    height_scale: f32,
) {
    let size = field.size();
    let offset = grid_offset(size, spacing);

    for row in 0..size {
        for col in 0..size {
            let x = col as f32 * spacing - offset;
            let y = field.get(col, row) * height_scale;
            let z = row as f32 * spacing - offset;
            let u = col as f32 / size as f32;
            let v = row as f32 / size as f32;
            vertices.push(TerrainVertex {
                position: [x, y, z],
                uv: [u, v],
                normal: TerrainVertex::UP,
            });
        }
    }
}

/// Skirt pass: for each patch origin (in patch index order), append a ring of
/// lowered copies of its boundary grid vertices.
///
/// Expects `vertices` to hold exactly the `size * size` grid vertices on the
/// first call.
pub fn push_skirt_vertices(
    vertices: &mut Vec<TerrainVertex>,
    size: usize,
    origins: &[UVec2],
    patch_size: u32,
    skirt_depth: f32,
) {
    for &origin in origins {
        for edge in Edge::ALL {
            for i in 0..=patch_size {
                let (col, row) = edge.point(origin, i, patch_size);
                let src = clamp_to_grid(row, size) * size + clamp_to_grid(col, size);
                let skirt = vertices[src].lowered(skirt_depth);
                vertices.push(skirt);
            }
        }
    }
}
