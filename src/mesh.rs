//! Vertex layout and grid topology shared by the land and water meshes.

use bytemuck::{Pod, Zeroable};

use crate::waves::WaveGrid;

/// Vertex data for lit, textured meshes (position + normal + UV)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle-list indices for a `rows x cols` vertex grid in row-major order.
///
/// Each quad is split into two triangles sharing the `(i, j+1)`–`(i+1, j)`
/// diagonal.
pub fn grid_indices(rows: usize, cols: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity(6 * rows.saturating_sub(1) * cols.saturating_sub(1));

    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let top_left = (i * cols + j) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((i + 1) * cols + j) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                top_right,
                bottom_left,
                bottom_left,
                top_right,
                bottom_right,
            ]);
        }
    }

    indices
}

/// Copy the current wave solution into a vertex slice ready for upload.
///
/// Texture coordinates stretch one texture over the whole surface.
///
/// # Panics
/// If `vertices` does not hold exactly `grid.vertex_count()` entries.
pub fn write_wave_vertices(grid: &WaveGrid, vertices: &mut [Vertex]) {
    assert_eq!(
        vertices.len(),
        grid.vertex_count(),
        "vertex buffer does not match wave grid"
    );

    let width = grid.width();
    let depth = grid.depth();

    for (idx, vertex) in vertices.iter_mut().enumerate() {
        let p = grid.position(idx);
        vertex.position = p.to_array();
        vertex.normal = grid.normal(idx).to_array();
        vertex.uv = [0.5 + p.x / width, 0.5 - p.z / depth];
    }
}
