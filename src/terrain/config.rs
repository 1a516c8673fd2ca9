//! Terrain build configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Noise sampling parameters for the heightfield
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Permutation seed; `None` draws one from the process-wide random source
    pub seed: Option<u32>,
    /// Noise-space extent of the whole grid ("zoom"), independent of size
    pub scale: f32,
    /// fBm octaves
    pub octaves: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: None,
            scale: 3.0,
            octaves: 10,
        }
    }
}

/// Everything the renderer hands to the terrain builder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid side length in vertices
    pub size: u32,
    /// World distance between adjacent grid vertices
    pub spacing: f32,
    /// Multiplier from raw noise to world height
    pub height_scale: f32,
    /// Cells per patch side
    pub patch_size: u32,
    /// Cells per quad for each LOD level, finest first
    pub lod_steps: Vec<u32>,
    /// How far skirt vertices drop below their source vertex
    pub skirt_depth: f32,
    pub noise: NoiseParams,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 32 * 40,
            spacing: 1.0,
            height_scale: 50.0,
            patch_size: 32,
            lod_steps: vec![1, 2, 4],
            skirt_depth: 0.5,
            noise: NoiseParams::default(),
        }
    }
}

impl TerrainConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that can never produce geometry.
    ///
    /// A grid smaller than one patch is accepted; see [`Self::patch_layout`].
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(Error::Config(format!("size must be at least 2, got {}", self.size)));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(Error::Config(format!("spacing must be positive, got {}", self.spacing)));
        }
        if !self.height_scale.is_finite() {
            return Err(Error::Config("height_scale must be finite".into()));
        }
        if !self.skirt_depth.is_finite() {
            return Err(Error::Config("skirt_depth must be finite".into()));
        }
        if self.patch_size == 0 {
            return Err(Error::Config("patch_size must be non-zero".into()));
        }
        if self.lod_steps.is_empty() {
            return Err(Error::Config("lod_steps must not be empty".into()));
        }
        if let Some(pos) = self.lod_steps.iter().position(|&s| s == 0) {
            return Err(Error::Config(format!("lod_steps[{}] is zero", pos)));
        }
        if self.noise.octaves == 0 {
            return Err(Error::Config("noise.octaves must be non-zero".into()));
        }
        if !self.noise.scale.is_finite() {
            return Err(Error::Config("noise.scale must be finite".into()));
        }
        Ok(())
    }

    /// Patch columns and rows covering the grid, at least one each.
    ///
    /// ```
    /// use heightpatch::terrain::TerrainConfig;
    ///
    /// let config = TerrainConfig { size: 65, patch_size: 32, ..Default::default() };
    /// assert_eq!(config.patch_layout(), (2, 2));
    ///
    /// let tiny = TerrainConfig { size: 8, patch_size: 32, ..Default::default() };
    /// assert_eq!(tiny.patch_layout(), (1, 1));
    /// ```
    pub fn patch_layout(&self) -> (u32, u32) {
        let cols = if self.patch_size == 0 {
            1
        } else {
            (self.size.saturating_sub(1) / self.patch_size).max(1)
        };
        (cols, cols)
    }

    /// Whether the grid is too small for a single full patch
    pub fn is_oversized_patch(&self) -> bool {
        self.size.saturating_sub(1) < self.patch_size
    }
}
