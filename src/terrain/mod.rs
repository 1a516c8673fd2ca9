//! Heightfield terrain with per-patch LOD and skirts

pub mod config;
pub use config::{NoiseParams, TerrainConfig};

pub mod heightfield;
pub use heightfield::HeightField;

pub mod vertex;
pub use vertex::TerrainVertex;

pub mod mesh;
pub mod normals;

pub mod patch;
pub use patch::{Patch, PatchIndexBuilder, PatchLod};

pub mod generator;
pub use generator::Terrain;
