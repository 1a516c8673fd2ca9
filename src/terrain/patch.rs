//! Per-patch LOD index lists with skirt stitching
//!
//! Every (patch, LOD) pair gets its own triangle list over the shared vertex
//! buffer: the patch interior at the LOD's step size, plus a curtain of quads
//! joining each boundary segment to the patch's own lowered skirt ring. A
//! patch never looks at its neighbours' LOD; the curtains hide whatever gap
//! differing boundary resolutions leave between them.
//!
//! Winding: top-face triangles are `{TL, TR, BR}` and `{TL, BR, BL}` with
//! rows running towards +z. Skirt quads use the same handedness seen from
//! outside the patch, so every face's right-hand normal points into the
//! ground.

use glam::{UVec2, Vec2};

use super::mesh::{clamp_to_grid, Edge, SkirtLayout};

/// One LOD level's index list for a patch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchLod {
    step: u32,
    indices: Vec<u32>,
}

impl PatchLod {
    pub fn new(step: u32, indices: Vec<u32>) -> Self {
        Self { step, indices }
    }

    /// Placeholder for a (patch, LOD) that produced no geometry
    pub fn empty(step: u32) -> Self {
        Self { step, indices: Vec::new() }
    }

    /// Cells per quad
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// False when the renderer must skip this draw
    pub fn is_drawable(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// A square tile of the grid, the unit of independent LOD selection
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    index: usize,
    origin: UVec2,
    lods: Vec<PatchLod>,
}

impl Patch {
    pub fn new(index: usize, origin: UVec2) -> Self {
        Self { index, origin, lods: Vec::new() }
    }

    /// Position in the row-major patch list; selects the skirt ring
    pub fn index(&self) -> usize {
        self.index
    }

    /// Top-left corner as (column, row) in grid coordinates
    pub fn origin(&self) -> UVec2 {
        self.origin
    }

    pub fn lods(&self) -> &[PatchLod] {
        &self.lods
    }

    pub fn lod(&self, level: usize) -> Option<&PatchLod> {
        self.lods.get(level)
    }

    pub fn lod_count(&self) -> usize {
        self.lods.len()
    }

    pub(crate) fn push_lod(&mut self, lod: PatchLod) {
        self.lods.push(lod);
    }

    /// World-space XZ centre, for distance-based LOD choice
    pub fn world_center(&self, patch_size: u32, spacing: f32, grid_offset: f32) -> Vec2 {
        let half = patch_size as f32 * 0.5;
        Vec2::new(
            (self.origin.x as f32 + half) * spacing - grid_offset,
            (self.origin.y as f32 + half) * spacing - grid_offset,
        )
    }
}

/// Row-major patch origins for a `cols x rows` layout
pub fn patch_origins(cols: u32, rows: u32, patch_size: u32) -> Vec<UVec2> {
    let mut origins = Vec::with_capacity((cols * rows) as usize);
    for pr in 0..rows {
        for pc in 0..cols {
            origins.push(UVec2::new(pc * patch_size, pr * patch_size));
        }
    }
    origins
}

/// Builds triangle index lists for patches of one grid
#[derive(Clone, Copy, Debug)]
pub struct PatchIndexBuilder {
    size: usize,
    layout: SkirtLayout,
}

impl PatchIndexBuilder {
    pub fn new(size: usize, patch_size: u32) -> Self {
        Self {
            size,
            layout: SkirtLayout::new(size, patch_size),
        }
    }

    pub fn layout(&self) -> &SkirtLayout {
        &self.layout
    }

    /// Segments per patch side at `step`; a short last segment covers any
    /// remainder. Zero for a zero step or zero patch size.
    ///
    /// ```
    /// use heightpatch::terrain::PatchIndexBuilder;
    ///
    /// let builder = PatchIndexBuilder::new(65, 32);
    /// assert_eq!(builder.segment_count(1), 32);
    /// assert_eq!(builder.segment_count(4), 8);
    /// assert_eq!(builder.segment_count(3), 11);
    /// assert_eq!(builder.segment_count(0), 0);
    /// ```
    pub fn segment_count(&self, step: u32) -> usize {
        if step == 0 {
            return 0;
        }
        self.layout.patch_size.div_ceil(step) as usize
    }

    /// Interior indices at `step`: two triangles per quad
    pub fn interior_index_count(&self, step: u32) -> usize {
        let n = self.segment_count(step);
        n * n * 6
    }

    /// Skirt indices at `step`: two triangles per segment on four edges
    pub fn skirt_index_count(&self, step: u32) -> usize {
        4 * self.segment_count(step) * 6
    }

    pub fn index_count(&self, step: u32) -> usize {
        self.interior_index_count(step) + self.skirt_index_count(step)
    }

    /// `(start, end)` cell offsets along a patch side
    fn segments(&self, step: u32) -> impl Iterator<Item = (u32, u32)> {
        let p = self.layout.patch_size;
        (0..p)
            .step_by(step.max(1) as usize)
            .map(move |start| (start, (start + step).min(p)))
    }

    #[inline]
    fn grid_index(&self, col: usize, row: usize) -> u32 {
        (clamp_to_grid(row, self.size) * self.size + clamp_to_grid(col, self.size)) as u32
    }

    /// Index list for the patch at `patch_index` with top-left `origin`.
    ///
    /// Returns `None` when the grid is empty, when the step or patch size
    /// leaves nothing to draw, when
    /// the skirt ring would overflow 32-bit indices, or when the list cannot
    /// be allocated. Callers skip upload and draw for that (patch, LOD).
    pub fn build(&self, patch_index: usize, origin: UVec2, step: u32) -> Option<Vec<u32>> {
        let total = self.index_count(step);
        if self.size == 0 || total == 0 {
            return None;
        }
        let last_vertex = self.layout.patch_start(patch_index) + self.layout.vertices_per_patch() - 1;
        if u32::try_from(last_vertex).is_err() {
            log::warn!("Patch {} skirt ring exceeds 32-bit index range", patch_index);
            return None;
        }

        let mut indices = Vec::new();
        if indices.try_reserve_exact(total).is_err() {
            log::error!("Failed to allocate {} indices for patch {} step {}", total, patch_index, step);
            return None;
        }

        self.push_interior(&mut indices, origin, step);
        self.push_skirts(&mut indices, patch_index, origin, step);

        debug_assert_eq!(indices.len(), total);
        Some(indices)
    }

    fn push_interior(&self, indices: &mut Vec<u32>, origin: UVec2, step: u32) {
        let (start_col, start_row) = (origin.x as usize, origin.y as usize);

        for (r0, r1) in self.segments(step) {
            let row = start_row + r0 as usize;
            let row_next = start_row + r1 as usize;
            for (c0, c1) in self.segments(step) {
                let col = start_col + c0 as usize;
                let col_next = start_col + c1 as usize;

                let top_left = self.grid_index(col, row);
                let top_right = self.grid_index(col_next, row);
                let bottom_left = self.grid_index(col, row_next);
                let bottom_right = self.grid_index(col_next, row_next);

                indices.extend_from_slice(&[
                    top_left, top_right, bottom_right,
                    top_left, bottom_right, bottom_left,
                ]);
            }
        }
    }

    /// Stitches each edge to its skirt ring as `{v0, s1, v1}, {v0, s0, s1}`.
    ///
    /// Differs from the common `{v0, v1, s1}, {v0, s1, s0}` ordering: skirt
    /// faces here share the top face's handedness, so one cull mode draws both.
    fn push_skirts(&self, indices: &mut Vec<u32>, patch_index: usize, origin: UVec2, step: u32) {
        let p = self.layout.patch_size;

        for edge in Edge::ALL {
            let skirt_start = self.layout.edge_start(patch_index, edge);
            for (o0, o1) in self.segments(step) {
                let (c0, r0) = edge.point(origin, o0, p);
                let (c1, r1) = edge.point(origin, o1, p);
                let v0 = self.grid_index(c0, r0);
                let v1 = self.grid_index(c1, r1);
                let s0 = (skirt_start + o0 as usize) as u32;
                let s1 = (skirt_start + o1 as usize) as u32;

                indices.extend_from_slice(&[
                    v0, s1, v1,
                    v0, s0, s1,
                ]);
            }
        }
    }
}
