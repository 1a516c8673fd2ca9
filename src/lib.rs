//! Heightpatch - procedural heightfield terrain prepared for patch-based LOD rendering
//!
//! A [`terrain::Terrain`] owns one shared vertex buffer (grid vertices plus a
//! skirt ring per patch) and, for every patch, one index list per LOD step.
//! The renderer picks one list per patch each frame; skirts hide the seams
//! between neighbours drawn at different steps.

pub mod core;
pub mod noise;
pub mod terrain;
