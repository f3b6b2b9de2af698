//! Height-field wave grid integrated with a damped finite-difference stencil.
//!
//! Heights live in three equal-length buffers addressed by rotating role
//! indices (`previous`, `current`, `next`), so a step never copies the field.

use glam::Vec3;

use crate::params::WaveParams;

/// Uniform grid of wave heights with per-vertex normals.
///
/// Row `i` runs along -Z and column `j` along +X; the grid is centered on the
/// origin. Dimensions and spacing are fixed until [`WaveGrid::reinit`].
#[derive(Debug, Clone)]
pub struct WaveGrid {
    rows: usize,
    cols: usize,
    spacing: f32,
    time_step: f32,

    /// Stencil coefficients derived from time step, speed and damping.
    k1: f32,
    k2: f32,
    k3: f32,

    /// Elapsed time not yet consumed by a fixed step.
    accumulated_s: f32,

    buffers: [Vec<f32>; 3],
    /// Slot holding the current solution; `current + 1` is next, `current + 2` previous.
    current: usize,

    normals: Vec<Vec3>,
    tangents: Vec<Vec3>,

    steps: u64,
}

impl WaveGrid {
    /// Create a flat grid.
    ///
    /// # Panics
    /// If `rows` or `cols` is below 3, or `spacing`/`dt` is not positive.
    /// Untrusted values should go through [`WaveParams::validate`] first.
    pub fn new(rows: usize, cols: usize, spacing: f32, dt: f32, speed: f32, damping: f32) -> Self {
        let mut grid = Self {
            rows: 0,
            cols: 0,
            spacing: 0.0,
            time_step: 0.0,
            k1: 0.0,
            k2: 0.0,
            k3: 0.0,
            accumulated_s: 0.0,
            buffers: [Vec::new(), Vec::new(), Vec::new()],
            current: 0,
            normals: Vec::new(),
            tangents: Vec::new(),
            steps: 0,
        };
        grid.reinit(rows, cols, spacing, dt, speed, damping);
        grid
    }

    /// Create a flat grid from validated parameters.
    ///
    /// # Panics
    /// Under the same conditions as [`WaveGrid::new`]; parameters that pass
    /// [`WaveParams::validate`] never panic.
    pub fn from_params(params: &WaveParams) -> Self {
        Self::new(
            params.rows,
            params.cols,
            params.spacing_m,
            params.time_step_s,
            params.speed_m_per_s,
            params.damping,
        )
    }

    /// Replace dimensions and parameters; all state returns to a flat surface.
    pub fn reinit(
        &mut self,
        rows: usize,
        cols: usize,
        spacing: f32,
        dt: f32,
        speed: f32,
        damping: f32,
    ) {
        assert!(rows >= 3 && cols >= 3, "wave grid must be at least 3x3, got {rows}x{cols}");
        assert!(spacing > 0.0, "wave grid spacing must be positive, got {spacing}");
        assert!(dt > 0.0, "wave time step must be positive, got {dt}");

        self.rows = rows;
        self.cols = cols;
        self.spacing = spacing;
        self.time_step = dt;

        let d = damping * dt + 2.0;
        let e = (speed * dt / spacing).powi(2);
        self.k1 = (damping * dt - 2.0) / d;
        self.k2 = (4.0 - 8.0 * e) / d;
        self.k3 = (2.0 * e) / d;

        let count = rows * cols;
        self.buffers = [vec![0.0; count], vec![0.0; count], vec![0.0; count]];
        self.current = 0;
        self.normals = vec![Vec3::Y; count];
        self.tangents = vec![Vec3::X; count];
        self.accumulated_s = 0.0;
        self.steps = 0;
    }

    /// Flatten the surface, keeping dimensions and coefficients.
    pub fn reset(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0.0);
        }
        self.normals.fill(Vec3::Y);
        self.tangents.fill(Vec3::X);
        self.accumulated_s = 0.0;
        self.steps = 0;
    }

    /// Advance the simulation by `elapsed_s` seconds of wall-clock time.
    ///
    /// Runs as many fixed steps as fit into the accumulated time (possibly
    /// none) and keeps the remainder for the next call. Returns the number of
    /// steps taken.
    ///
    /// # Panics
    /// If `elapsed_s` is negative, infinite or NaN.
    pub fn update(&mut self, elapsed_s: f32) -> u32 {
        assert!(
            elapsed_s.is_finite() && elapsed_s >= 0.0,
            "elapsed time must be finite and non-negative, got {elapsed_s}"
        );
        self.accumulated_s += elapsed_s;
        if self.accumulated_s < self.time_step {
            return 0;
        }

        // Count the steps up front; repeated subtraction stalls once the
        // residual is large enough that `acc - dt` rounds back to `acc`.
        let due = (self.accumulated_s / self.time_step).floor();
        let taken = due as u32;
        for _ in 0..taken {
            self.step();
        }
        self.accumulated_s = (self.accumulated_s - taken as f32 * self.time_step).max(0.0);
        taken
    }

    /// Run exactly one stencil step, ignoring the accumulator.
    pub fn step(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let (k1, k2, k3) = (self.k1, self.k2, self.k3);
        let next_slot = self.next_slot();

        // Take `next` out so it can be written while `previous`/`current` are read.
        let mut next = std::mem::take(&mut self.buffers[next_slot]);
        {
            let prev = &self.buffers[self.previous_slot()];
            let curr = &self.buffers[self.current];

            for i in 1..rows - 1 {
                let row_start = i * cols;
                for j in 1..cols - 1 {
                    let idx = row_start + j;
                    next[idx] = k1 * prev[idx]
                        + k2 * curr[idx]
                        + k3 * (curr[idx + cols] + curr[idx - cols] + curr[idx + 1] + curr[idx - 1]);
                }
            }

            // Boundary ring holds its value.
            let last_row = (rows - 1) * cols;
            next[..cols].copy_from_slice(&curr[..cols]);
            next[last_row..].copy_from_slice(&curr[last_row..]);
            for i in 1..rows - 1 {
                let left = i * cols;
                let right = left + cols - 1;
                next[left] = curr[left];
                next[right] = curr[right];
            }
        }
        self.buffers[next_slot] = next;
        self.current = next_slot;
        self.steps += 1;

        self.compute_normals();
    }

    /// Add a plus-shaped impulse centered on cell `(i, j)` of the current solution.
    ///
    /// The center receives `magnitude`, its four edge neighbours half of it.
    ///
    /// # Panics
    /// If `(i, j)` is on or outside the boundary ring.
    pub fn disturb(&mut self, i: usize, j: usize, magnitude: f32) {
        assert!(
            i >= 1 && i < self.rows - 1 && j >= 1 && j < self.cols - 1,
            "disturbance at ({i}, {j}) must be inside the {}x{} border",
            self.rows,
            self.cols
        );

        let cols = self.cols;
        let half = 0.5 * magnitude;
        let curr = &mut self.buffers[self.current];
        let idx = i * cols + j;

        curr[idx] += magnitude;
        curr[idx - cols] += half;
        curr[idx + cols] += half;
        curr[idx - 1] += half;
        curr[idx + 1] += half;
    }

    /// Recompute interior normals and x-tangents from the current heights.
    fn compute_normals(&mut self) {
        let cols = self.cols;
        let two_dx = 2.0 * self.spacing;
        let curr = &self.buffers[self.current];

        for i in 1..self.rows - 1 {
            for j in 1..cols - 1 {
                let idx = i * cols + j;
                let l = curr[idx - 1];
                let r = curr[idx + 1];
                let t = curr[idx - cols];
                let b = curr[idx + cols];

                self.normals[idx] = Vec3::new(l - r, two_dx, b - t).normalize();
                self.tangents[idx] = Vec3::new(two_dx, r - l, 0.0).normalize();
            }
        }
    }

    #[inline]
    fn next_slot(&self) -> usize {
        (self.current + 1) % 3
    }

    #[inline]
    fn previous_slot(&self) -> usize {
        (self.current + 2) % 3
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn triangle_count(&self) -> usize {
        2 * (self.rows - 1) * (self.cols - 1)
    }

    /// Extent along X (meters).
    pub fn width(&self) -> f32 {
        (self.cols - 1) as f32 * self.spacing
    }

    /// Extent along Z (meters).
    pub fn depth(&self) -> f32 {
        (self.rows - 1) as f32 * self.spacing
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Stencil steps run since construction or the last reset.
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Current heights, row-major.
    pub fn heights(&self) -> &[f32] {
        &self.buffers[self.current]
    }

    pub fn height(&self, index: usize) -> f32 {
        self.buffers[self.current][index]
    }

    /// Height at cell `(i, j)`.
    pub fn height_at(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.buffers[self.current][i * self.cols + j]
    }

    /// World-space position of vertex `index` (grid centered on the origin).
    pub fn position(&self, index: usize) -> Vec3 {
        assert!(index < self.vertex_count(), "vertex {index} out of range");
        let i = index / self.cols;
        let j = index % self.cols;
        let x = -0.5 * self.width() + j as f32 * self.spacing;
        let z = 0.5 * self.depth() - i as f32 * self.spacing;
        Vec3::new(x, self.buffers[self.current][index], z)
    }

    pub fn normal(&self, index: usize) -> Vec3 {
        self.normals[index]
    }

    /// Unit tangent along +X at vertex `index`.
    pub fn tangent_x(&self, index: usize) -> Vec3 {
        self.tangents[index]
    }

    /// Sum of squared heights.
    pub fn total_energy(&self) -> f32 {
        self.heights().iter().map(|h| h * h).sum()
    }

    /// Largest absolute height.
    pub fn max_height(&self) -> f32 {
        self.heights().iter().map(|h| h.abs()).fold(0.0, f32::max)
    }
}
