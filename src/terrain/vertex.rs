//! Interleaved terrain vertex format

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Terrain vertex: position, texture coordinate, normal.
///
/// Layout: 32 bytes, tightly packed for direct upload as a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl TerrainVertex {
    /// Normal assigned before normals are estimated
    pub const UP: [f32; 3] = [0.0, 1.0, 0.0];
    /// Normal forced onto every skirt vertex
    pub const DOWN: [f32; 3] = [0.0, -1.0, 0.0];

    pub fn new(position: Vec3, uv: [f32; 2], normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            uv,
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Copy lowered by `depth` with a straight-down normal
    pub fn lowered(&self, depth: f32) -> Self {
        let mut skirt = *self;
        skirt.position[1] -= depth;
        skirt.normal = Self::DOWN;
        skirt
    }
}
