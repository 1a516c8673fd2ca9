//! Terrain build pipeline
//!
//! noise → heightfield → grid vertices → normals → skirt vertices → per-patch
//! LOD index lists. Everything runs once, on the calling thread; the result
//! is immutable apart from [`Terrain::rescale`].

use glam::{UVec2, Vec2};

use super::config::TerrainConfig;
use super::heightfield::HeightField;
use super::mesh::{grid_offset, push_grid_vertices, push_skirt_vertices, SkirtLayout};
use super::normals::estimate_normals;
use super::patch::{patch_origins, Patch, PatchIndexBuilder, PatchLod};
use super::vertex::TerrainVertex;
use crate::core::error::try_alloc;
use crate::core::{Error, Result};
use crate::noise::{max_amplitude, permutation::random_seed, NoiseContext};

/// A generated terrain: shared vertex buffer plus per-patch LOD index lists
#[derive(Clone, Debug)]
pub struct Terrain {
    config: TerrainConfig,
    seed: Option<u32>,
    heightfield: HeightField,
    vertices: Vec<TerrainVertex>,
    patches: Vec<Patch>,
    patch_cols: u32,
    patch_rows: u32,
    layout: SkirtLayout,
}

impl Terrain {
    /// Build from configuration. A missing seed is drawn from the
    /// process-wide random source and recorded (see [`Terrain::seed`]).
    pub fn build(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.noise.seed.unwrap_or_else(random_seed);
        log::info!("Terrain noise seed: {}", seed);

        let noise = NoiseContext::from_seed(seed);
        let mut terrain = Self::build_with_noise(config, &noise)?;
        terrain.seed = Some(seed);
        Ok(terrain)
    }

    /// Build using an explicit noise context; `config.noise.seed` is ignored.
    pub fn build_with_noise(config: TerrainConfig, noise: &NoiseContext) -> Result<Self> {
        config.validate()?;
        log::debug!("fBm with {} octaves peaks near ±{:.3} before height_scale",
            config.noise.octaves, max_amplitude(config.noise.octaves));

        let heightfield = HeightField::generate(noise, config.size as usize, &config.noise)?;
        Self::from_heightfield(config, heightfield)
    }

    /// Build meshes and index lists over an existing heightfield
    pub fn from_heightfield(config: TerrainConfig, heightfield: HeightField) -> Result<Self> {
        config.validate()?;
        let size = config.size as usize;
        if heightfield.size() != size {
            return Err(Error::Config(format!(
                "heightfield is {}x{} but config size is {}",
                heightfield.size(), heightfield.size(), size
            )));
        }

        let (patch_cols, patch_rows) = config.patch_layout();
        if config.is_oversized_patch() {
            log::warn!("Grid of {} is smaller than one {}-cell patch; using a single clamped patch",
                size, config.patch_size);
        }

        let origins = patch_origins(patch_cols, patch_rows, config.patch_size);
        let layout = SkirtLayout::new(size, config.patch_size);
        let vertex_count = layout.vertex_count(origins.len());
        if vertex_count as u64 > u32::MAX as u64 + 1 {
            return Err(Error::Config(format!(
                "{} vertices exceed the 32-bit index range", vertex_count
            )));
        }

        let mut terrain = Self {
            config,
            seed: None,
            heightfield,
            vertices: try_alloc("vertex buffer", vertex_count)?,
            patches: Vec::with_capacity(origins.len()),
            patch_cols,
            patch_rows,
            layout,
        };
        terrain.fill_vertices(&origins);
        terrain.build_patches(&origins);

        log::info!("Terrain built: {}x{} grid, {} vertices ({} grid + {} skirt), {} patches x {} LODs",
            size, size, terrain.vertices.len(), layout.grid_count,
            terrain.vertices.len() - layout.grid_count,
            terrain.patches.len(), terrain.config.lod_steps.len());

        Ok(terrain)
    }

    /// Grid pass, normals, then skirts copied from the finished grid vertices
    fn fill_vertices(&mut self, origins: &[UVec2]) {
        let size = self.heightfield.size();
        let spacing = self.config.spacing;
        let height_scale = self.config.height_scale;

        self.vertices.clear();
        push_grid_vertices(&mut self.vertices, &self.heightfield, spacing, height_scale);
        estimate_normals(&mut self.vertices, &self.heightfield, spacing, height_scale);
        push_skirt_vertices(&mut self.vertices, size, origins, self.config.patch_size, self.config.skirt_depth);

        log::debug!("Vertices generated: spacing={:.2}, height_scale={:.2}", spacing, height_scale);
    }

    fn build_patches(&mut self, origins: &[UVec2]) {
        let builder = PatchIndexBuilder::new(self.heightfield.size(), self.config.patch_size);

        for (index, &origin) in origins.iter().enumerate() {
            let mut patch = Patch::new(index, origin);
            for &step in &self.config.lod_steps {
                let lod = match builder.build(index, origin, step) {
                    Some(indices) => PatchLod::new(step, indices),
                    None => {
                        log::warn!("Patch {} has no geometry at LOD step {}; it will not be drawn",
                            index, step);
                        PatchLod::empty(step)
                    }
                };
                patch.push_lod(lod);
            }
            self.patches.push(patch);
        }
    }

    /// Regenerate vertices for new spacing and height scale without
    /// resampling noise. Index lists do not depend on either and are kept.
    pub fn rescale(&mut self, spacing: f32, height_scale: f32) -> Result<()> {
        let mut config = self.config.clone();
        config.spacing = spacing;
        config.height_scale = height_scale;
        config.validate()?;
        self.config = config;

        let origins: Vec<UVec2> = self.patches.iter().map(Patch::origin).collect();
        self.fill_vertices(&origins);
        Ok(())
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Seed the heightfield was sampled with, if built via [`Terrain::build`]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Grid side length in vertices
    pub fn size(&self) -> usize {
        self.heightfield.size()
    }

    pub fn spacing(&self) -> f32 {
        self.config.spacing
    }

    pub fn height_scale(&self) -> f32 {
        self.config.height_scale
    }

    pub fn heightfield(&self) -> &HeightField {
        &self.heightfield
    }

    /// Grid vertices followed by every patch's skirt ring
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    /// Vertex buffer as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn grid_vertex_count(&self) -> usize {
        self.layout.grid_count
    }

    pub fn skirt_layout(&self) -> &SkirtLayout {
        &self.layout
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn patch(&self, index: usize) -> Option<&Patch> {
        self.patches.get(index)
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub fn patch_cols(&self) -> u32 {
        self.patch_cols
    }

    pub fn patch_rows(&self) -> u32 {
        self.patch_rows
    }

    pub fn patch_size(&self) -> u32 {
        self.config.patch_size
    }

    pub fn lod_steps(&self) -> &[u32] {
        &self.config.lod_steps
    }

    /// Distance from the grid corner to its centre on each axis
    pub fn grid_offset(&self) -> f32 {
        grid_offset(self.size(), self.config.spacing)
    }

    /// World-space side length of the grid
    pub fn extent(&self) -> f32 {
        (self.size() as f32 - 1.0) * self.config.spacing
    }

    /// World-space side length of one patch
    pub fn patch_world_stride(&self) -> f32 {
        self.config.patch_size as f32 * self.config.spacing
    }

    /// World-space XZ centre of a patch
    pub fn patch_center(&self, patch: &Patch) -> Vec2 {
        patch.world_center(self.config.patch_size, self.config.spacing, self.grid_offset())
    }

    /// Scaled world height at a grid vertex
    pub fn height_at_grid(&self, col: usize, row: usize) -> Option<f32> {
        let size = self.size();
        (col < size && row < size).then(|| self.heightfield.get(col, row) * self.config.height_scale)
    }

    /// Sum of index counts over all patches at one LOD level
    pub fn lod_index_count(&self, level: usize) -> usize {
        self.patches
            .iter()
            .filter_map(|p| p.lod(level))
            .map(PatchLod::index_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::config::NoiseParams;
    use crate::terrain::mesh::Edge;
    use glam::Vec3;

    fn small_config(size: u32, patch_size: u32, lod_steps: Vec<u32>) -> TerrainConfig {
        TerrainConfig {
            size,
            spacing: 1.0,
            height_scale: 10.0,
            patch_size,
            lod_steps,
            skirt_depth: 0.5,
            noise: NoiseParams { seed: Some(12345), scale: 3.0, octaves: 6 },
        }
    }

    #[test]
    fn test_single_patch_scenario() {
        let terrain = Terrain::build(small_config(8, 4, vec![1, 2])).unwrap();
        assert_eq!(terrain.patch_cols(), 1);
        assert_eq!(terrain.patch_rows(), 1);
        assert_eq!(terrain.patch_count(), 1);

        let patch = terrain.patch(0).unwrap();
        assert_eq!(patch.lod(0).unwrap().index_count(), 96 + 96);
        assert_eq!(patch.lod(1).unwrap().index_count(), 24 + 48);
    }

    #[test]
    fn test_vertex_count_invariant() {
        for (size, patch_size) in [(8, 4), (9, 4), (33, 8), (65, 32), (20, 32)] {
            let terrain = Terrain::build(small_config(size, patch_size, vec![1, 2, 4])).unwrap();
            let expected = (size * size) as usize
                + terrain.patch_count() * 4 * (patch_size as usize + 1);
            assert_eq!(terrain.vertex_count(), expected, "size {} patch {}", size, patch_size);
            assert_eq!(terrain.vertex_bytes().len(), expected * 32);
        }
    }

    #[test]
    fn test_heightfield_matches_noise() {
        let config = small_config(16, 4, vec![1]);
        let terrain = Terrain::build(config.clone()).unwrap();
        let noise = NoiseContext::from_seed(12345);

        assert_eq!(terrain.heightfield().len(), 16 * 16);
        for row in 0..16 {
            for col in 0..16 {
                let nx = col as f32 / 16.0 * config.noise.scale;
                let ny = row as f32 / 16.0 * config.noise.scale;
                assert_eq!(terrain.heightfield().get(col, row), noise.fbm(nx, ny, 6));
            }
        }
    }

    #[test]
    fn test_skirt_vertices_drop_below_source() {
        let terrain = Terrain::build(small_config(17, 4, vec![1, 2])).unwrap();
        let size = terrain.size();
        let layout = *terrain.skirt_layout();
        let verts = terrain.vertices();

        for patch in terrain.patches() {
            for edge in Edge::ALL {
                let start = layout.edge_start(patch.index(), edge);
                for i in 0..=terrain.patch_size() {
                    let (col, row) = edge.point(patch.origin(), i, terrain.patch_size());
                    let src = verts[row.min(size - 1) * size + col.min(size - 1)];
                    let skirt = verts[start + i as usize];
                    assert_eq!(skirt.position[1], src.position[1] - 0.5);
                    assert_eq!(skirt.position[0], src.position[0]);
                    assert_eq!(skirt.position[2], src.position[2]);
                    assert_eq!(skirt.uv, src.uv);
                    assert_eq!(skirt.normal, [0.0, -1.0, 0.0]);
                }
            }
        }
    }

    #[test]
    fn test_grid_normals_estimated() {
        let terrain = Terrain::build(small_config(17, 4, vec![1])).unwrap();
        for v in &terrain.vertices()[..terrain.grid_vertex_count()] {
            let n = v.normal();
            assert!((n.length() - 1.0).abs() < 1.0e-5);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn test_all_indices_in_bounds() {
        let terrain = Terrain::build(small_config(33, 8, vec![1, 2, 4, 8])).unwrap();
        let count = terrain.vertex_count() as u32;
        for patch in terrain.patches() {
            assert_eq!(patch.lod_count(), 4);
            for lod in patch.lods() {
                assert!(lod.is_drawable());
                assert!(lod.indices().iter().all(|&i| i < count));
            }
        }
    }

    #[test]
    fn test_patches_tile_grid() {
        let terrain = Terrain::build(small_config(33, 8, vec![1])).unwrap();
        assert_eq!(terrain.patch_count(), 16);

        // Every grid cell inside the tiled area is covered by exactly one patch
        let mut covered = vec![0u32; 32 * 32];
        for patch in terrain.patches() {
            let o = patch.origin();
            for r in 0..8 {
                for c in 0..8 {
                    covered[(o.y + r) as usize * 32 + (o.x + c) as usize] += 1;
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_oversized_patch_is_clamped() {
        let terrain = Terrain::build(small_config(5, 8, vec![1, 2])).unwrap();
        assert_eq!(terrain.patch_count(), 1);
        let count = terrain.vertex_count() as u32;
        let lod = terrain.patch(0).unwrap().lod(0).unwrap();
        assert!(lod.is_drawable());
        assert!(lod.indices().iter().all(|&i| i < count));
    }

    #[test]
    fn test_same_seed_reproducible() {
        let a = Terrain::build(small_config(17, 4, vec![1, 2])).unwrap();
        let b = Terrain::build(small_config(17, 4, vec![1, 2])).unwrap();
        assert_eq!(a.seed(), Some(12345));
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.patches(), b.patches());
    }

    #[test]
    fn test_random_seed_recorded() {
        let mut config = small_config(9, 4, vec![1]);
        config.noise.seed = None;
        let terrain = Terrain::build(config.clone()).unwrap();
        let seed = terrain.seed().unwrap();

        config.noise.seed = Some(seed);
        let replay = Terrain::build(config).unwrap();
        assert_eq!(terrain.heightfield().values(), replay.heightfield().values());
    }

    #[test]
    fn test_rescale_keeps_heightfield() {
        let mut terrain = Terrain::build(small_config(9, 4, vec![1, 2])).unwrap();
        let before = terrain.heightfield().values().to_vec();
        let patches = terrain.patches().to_vec();

        terrain.rescale(2.0, 20.0).unwrap();
        assert_eq!(terrain.heightfield().values(), &before[..]);
        assert_eq!(terrain.patches(), &patches[..]);
        assert_eq!(terrain.vertex_count(), 81 + 4 * 20);

        for row in 0..9 {
            for col in 0..9 {
                let v = terrain.vertices()[row * 9 + col];
                assert_eq!(v.position[1], terrain.heightfield().get(col, row) * 20.0);
                assert_eq!(Some(v.position[1]), terrain.height_at_grid(col, row));
            }
        }
        assert_eq!(terrain.vertices()[0].position[0], -8.0);
        assert!(terrain.rescale(0.0, 1.0).is_err());
    }

    #[test]
    fn test_from_heightfield_size_mismatch() {
        let field = HeightField::from_values(4, vec![0.0; 16]).unwrap();
        let err = Terrain::from_heightfield(small_config(8, 4, vec![1]), field).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Terrain::build(small_config(8, 4, vec![])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_world_geometry_helpers() {
        let terrain = Terrain::build(small_config(65, 32, vec![1])).unwrap();
        assert_eq!(terrain.extent(), 64.0);
        assert_eq!(terrain.grid_offset(), 32.0);
        assert_eq!(terrain.patch_world_stride(), 32.0);
        assert_eq!(terrain.patch_center(terrain.patch(0).unwrap()), Vec2::new(-16.0, -16.0));
        assert_eq!(terrain.patch_center(terrain.patch(3).unwrap()), Vec2::new(16.0, 16.0));
        assert_eq!(terrain.height_at_grid(65, 0), None);
    }

    #[test]
    fn test_lod_index_count_totals() {
        let terrain = Terrain::build(small_config(9, 4, vec![1, 2])).unwrap();
        assert_eq!(terrain.lod_index_count(0), 4 * (96 + 96));
        assert_eq!(terrain.lod_index_count(1), 4 * (24 + 48));
        assert_eq!(terrain.lod_index_count(2), 0);
    }

    #[test]
    fn test_terrain_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Terrain>();
    }

    fn triangle_normal(verts: &[TerrainVertex], tri: &[u32]) -> Vec3 {
        let a = verts[tri[0] as usize].position();
        let b = verts[tri[1] as usize].position();
        let c = verts[tri[2] as usize].position();
        (b - a).cross(c - a)
    }

    #[test]
    fn test_winding_consistent() {
        let terrain = Terrain::build(small_config(17, 4, vec![1, 2, 4])).unwrap();
        let verts = terrain.vertices();
        let builder = PatchIndexBuilder::new(terrain.size(), terrain.patch_size());

        for patch in terrain.patches() {
            for lod in patch.lods() {
                let (interior, skirts) = lod.indices().split_at(builder.interior_index_count(lod.step()));
                for tri in interior.chunks(3) {
                    assert!(triangle_normal(verts, tri).y < 0.0);
                }
                // Skirt faces point into the patch, like the top face points down
                let per_edge = builder.segment_count(lod.step()) * 6;
                for (edge, edge_indices) in Edge::ALL.into_iter().zip(skirts.chunks(per_edge)) {
                    for tri in edge_indices.chunks(3) {
                        let n = triangle_normal(verts, tri);
                        assert!(n.dot(edge.outward()) < 0.0, "{:?} skirt faces outward", edge);
                        assert!(n.y.abs() < 1.0e-4);
                    }
                }
            }
        }
    }

    /// Intervals along the other horizontal axis covered by skirt triangles
    /// lying in the plane `position[axis] = plane` (axis 0 is x, axis 2 is z)
    fn curtain_intervals(terrain: &Terrain, indices: &[u32], axis: usize, plane: f32) -> Vec<(f32, f32)> {
        let verts = terrain.vertices();
        let grid_count = terrain.grid_vertex_count() as u32;
        let along = 2 - axis;
        indices
            .chunks(3)
            .filter(|tri| tri.iter().any(|&i| i >= grid_count))
            .filter_map(|tri| {
                let ps: Vec<[f32; 3]> = tri.iter().map(|&i| verts[i as usize].position).collect();
                if ps.iter().all(|p| (p[axis] - plane).abs() < 1.0e-5) {
                    let lo = ps.iter().map(|p| p[along]).fold(f32::INFINITY, f32::min);
                    let hi = ps.iter().map(|p| p[along]).fold(f32::NEG_INFINITY, f32::max);
                    Some((lo, hi))
                } else {
                    None
                }
            })
            .collect()
    }

    #[test]
    fn test_no_crack_between_lod_levels() {
        // 2x2 patches; patch 0 at step 1 borders patch 1 at step 2 along column 4
        let terrain = Terrain::build(small_config(9, 4, vec![1, 2])).unwrap();
        assert_eq!(terrain.patch_count(), 4);
        let size = terrain.size();
        let verts = terrain.vertices();

        let a = terrain.patch(0).unwrap().lod(0).unwrap();
        let b = terrain.patch(1).unwrap().lod(1).unwrap();
        assert_eq!(a.step(), 1);
        assert_eq!(b.step(), 2);

        let edge_x = verts[4].position[0];
        let a_curtain = curtain_intervals(&terrain, a.indices(), 0, edge_x);
        let b_curtain = curtain_intervals(&terrain, b.indices(), 0, edge_x);
        // A hangs one quad per cell, B one quad per two cells
        assert_eq!(a_curtain.len(), 4 * 2);
        assert_eq!(b_curtain.len(), 2 * 2);

        // Every fine boundary segment is curtained from both sides
        for row in 0..4 {
            let z0 = verts[row * size + 4].position[2];
            let z1 = verts[(row + 1) * size + 4].position[2];
            for (name, curtain) in [("A", &a_curtain), ("B", &b_curtain)] {
                assert!(
                    curtain.iter().any(|&(lo, hi)| lo <= z0 && z1 <= hi),
                    "patch {} leaves segment {}..{} open", name, row, row + 1
                );
            }
        }

        // Curtains hang below the surface on the shared edge
        let ring_b = terrain.skirt_layout().edge_start(1, Edge::Left);
        for i in 0..=4 {
            let skirt = verts[ring_b + i];
            let row = 4 - i;
            assert!(skirt.position[1] < verts[row * size + 4].position[1]);
        }
    }

    #[test]
    fn test_no_crack_across_horizontal_seam() {
        // 2x2 patches; patch 0 at step 1 sits above patch 2 at step 2 along row 4
        let terrain = Terrain::build(small_config(9, 4, vec![1, 2])).unwrap();
        let size = terrain.size();
        let verts = terrain.vertices();

        let upper = terrain.patch(0).unwrap();
        let lower = terrain.patch(2).unwrap();
        assert_eq!(lower.origin(), UVec2::new(0, 4));
        let a = upper.lod(0).unwrap();
        let b = lower.lod(1).unwrap();
        assert_eq!(a.step(), 1);
        assert_eq!(b.step(), 2);

        let edge_z = verts[4 * size].position[2];
        let a_curtain = curtain_intervals(&terrain, a.indices(), 2, edge_z);
        let b_curtain = curtain_intervals(&terrain, b.indices(), 2, edge_z);
        assert_eq!(a_curtain.len(), 4 * 2);
        assert_eq!(b_curtain.len(), 2 * 2);

        for col in 0..4 {
            let x0 = verts[4 * size + col].position[0];
            let x1 = verts[4 * size + col + 1].position[0];
            for (name, curtain) in [("upper", &a_curtain), ("lower", &b_curtain)] {
                assert!(
                    curtain.iter().any(|&(lo, hi)| lo <= x0 && x1 <= hi),
                    "{} patch leaves segment {}..{} open", name, col, col + 1
                );
            }
        }

        let ring_a = terrain.skirt_layout().edge_start(0, Edge::Bottom);
        for i in 0..=4 {
            let skirt = verts[ring_a + i];
            let col = 4 - i;
            assert!(skirt.position[1] < verts[4 * size + col].position[1]);
        }
    }

    #[test]
    fn test_no_crack_all_lod_pairs() {
        // Any pairing of LOD levels across any shared vertical edge is curtained
        let terrain = Terrain::build(small_config(17, 4, vec![1, 2, 4])).unwrap();
        let size = terrain.size();
        let verts = terrain.vertices();

        for left in terrain.patches() {
            let Some(right) = terrain.patches().iter().find(|p| {
                p.origin().y == left.origin().y && p.origin().x == left.origin().x + 4
            }) else {
                continue;
            };
            let col = right.origin().x as usize;
            let edge_x = verts[col].position[0];

            for la in left.lods() {
                for lb in right.lods() {
                    let ca = curtain_intervals(&terrain, la.indices(), 0, edge_x);
                    let cb = curtain_intervals(&terrain, lb.indices(), 0, edge_x);
                    for r in 0..4 {
                        let row = left.origin().y as usize + r;
                        let z0 = verts[row * size + col].position[2];
                        let z1 = verts[(row + 1) * size + col].position[2];
                        assert!(ca.iter().any(|&(lo, hi)| lo <= z0 && z1 <= hi));
                        assert!(cb.iter().any(|&(lo, hi)| lo <= z0 && z1 <= hi));
                    }
                }
            }
        }

        // Same across every shared horizontal edge
        for upper in terrain.patches() {
            let Some(lower) = terrain.patches().iter().find(|p| {
                p.origin().x == upper.origin().x && p.origin().y == upper.origin().y + 4
            }) else {
                continue;
            };
            let row = lower.origin().y as usize;
            let edge_z = verts[row * size].position[2];

            for la in upper.lods() {
                for lb in lower.lods() {
                    let ca = curtain_intervals(&terrain, la.indices(), 2, edge_z);
                    let cb = curtain_intervals(&terrain, lb.indices(), 2, edge_z);
                    for c in 0..4 {
                        let col = upper.origin().x as usize + c;
                        let x0 = verts[row * size + col].position[0];
                        let x1 = verts[row * size + col + 1].position[0];
                        assert!(ca.iter().any(|&(lo, hi)| lo <= x0 && x1 <= hi));
                        assert!(cb.iter().any(|&(lo, hi)| lo <= x0 && x1 <= hi));
                    }
                }
            }
        }
    }
}
