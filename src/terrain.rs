//! Analytic hill terrain surrounding the water.

use glam::Vec3;

use crate::mesh::{grid_indices, Vertex};
use crate::params::TerrainParams;

/// Hill surface height `y = 0.3 (z sin 0.1x + x cos 0.1z)`.
pub fn hill_height(x: f32, z: f32) -> f32 {
    0.3 * (z * (0.1 * x).sin() + x * (0.1 * z).cos())
}

/// Unit surface normal of [`hill_height`], `normalize(-df/dx, 1, -df/dz)`.
pub fn hill_normal(x: f32, z: f32) -> Vec3 {
    Vec3::new(
        -0.03 * z * (0.1 * x).cos() - 0.3 * (0.1 * z).cos(),
        1.0,
        -0.3 * (0.1 * x).sin() + 0.03 * x * (0.1 * z).sin(),
    )
    .normalize()
}

/// Static land mesh displaced by the hill function
pub struct LandMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl LandMesh {
    /// Build a `width x depth` grid of `rows x cols` vertices centered on the origin.
    ///
    /// # Panics
    /// If `rows` or `cols` is below 2. Parameters that pass
    /// [`TerrainParams::validate`] never panic.
    pub fn new(params: &TerrainParams) -> Self {
        let rows = params.rows;
        let cols = params.cols;
        assert!(rows >= 2 && cols >= 2, "land grid must be at least 2x2, got {rows}x{cols}");
        let half_width = 0.5 * params.width_m;
        let half_depth = 0.5 * params.depth_m;

        let dx = params.width_m / (cols - 1) as f32;
        let dz = params.depth_m / (rows - 1) as f32;
        let du = 1.0 / (cols - 1) as f32;
        let dv = 1.0 / (rows - 1) as f32;

        let mut vertices = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let z = half_depth - i as f32 * dz;
            for j in 0..cols {
                let x = -half_width + j as f32 * dx;

                vertices.push(Vertex {
                    position: [x, hill_height(x, z), z],
                    normal: hill_normal(x, z).to_array(),
                    uv: [j as f32 * du, i as f32 * dv],
                });
            }
        }

        Self {
            vertices,
            indices: grid_indices(rows, cols),
            rows,
            cols,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}
