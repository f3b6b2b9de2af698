//! Land grid parameters for the hill terrain.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hill terrain grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Extent along X (meters)
    pub width_m: f32,

    /// Extent along Z (meters)
    pub depth_m: f32,

    /// Vertex rows (along Z)
    pub rows: usize,

    /// Vertex columns (along X)
    pub cols: usize,

    /// Texture repeat count across the land
    pub tex_scale: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width_m: 300.0,
            depth_m: 300.0,
            rows: 200,
            cols: 200,
            tex_scale: 5.0,
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<()> {
        if self.rows < 2 || self.cols < 2 {
            return Err(Error::invalid(
                "terrain.rows/cols",
                format!("grid must be at least 2x2, got {}x{}", self.rows, self.cols),
            ));
        }
        if !(self.width_m > 0.0 && self.depth_m > 0.0) {
            return Err(Error::invalid(
                "terrain.width_m/depth_m",
                format!("must be positive, got {}x{}", self.width_m, self.depth_m),
            ));
        }
        Ok(())
    }
}
