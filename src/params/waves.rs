//! Wave simulation parameters and the random ripple driver settings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wave height-field simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    /// Number of sample rows (at least 3, the stencil needs a 1-cell border)
    pub rows: usize,

    /// Number of sample columns (at least 3)
    pub cols: usize,

    /// Distance between adjacent samples (meters)
    pub spacing_m: f32,

    /// Fixed simulation step (seconds)
    pub time_step_s: f32,

    /// Wave propagation speed (meters per second)
    pub speed_m_per_s: f32,

    /// Damping coefficient (1/s, 0 = undamped)
    pub damping: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            rows: 300,
            cols: 300,
            spacing_m: 1.0,
            time_step_s: 0.03,
            speed_m_per_s: 3.25,
            damping: 0.4,
        }
    }
}

impl WaveParams {
    /// Check the constraints `WaveGrid::new` asserts on.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 3 || self.cols < 3 {
            return Err(Error::invalid(
                "waves.rows/cols",
                format!("grid must be at least 3x3, got {}x{}", self.rows, self.cols),
            ));
        }
        if !(self.spacing_m > 0.0) {
            return Err(Error::invalid(
                "waves.spacing_m",
                format!("must be positive, got {}", self.spacing_m),
            ));
        }
        if !(self.time_step_s > 0.0) {
            return Err(Error::invalid(
                "waves.time_step_s",
                format!("must be positive, got {}", self.time_step_s),
            ));
        }
        if self.damping < 0.0 {
            return Err(Error::invalid(
                "waves.damping",
                format!("must not be negative, got {}", self.damping),
            ));
        }
        Ok(())
    }

    /// Dimensionless Courant number `speed * dt / spacing`.
    ///
    /// The explicit stencil is only stable while this stays below `1/sqrt(2)`.
    pub fn courant_number(&self) -> f32 {
        self.speed_m_per_s * self.time_step_s / self.spacing_m
    }
}

/// Timer-driven random disturbances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleParams {
    /// Time between ripples (seconds)
    pub interval_s: f32,

    /// Cells kept clear of each grid edge when picking a ripple center
    pub margin_cells: usize,

    /// Smallest ripple magnitude (meters)
    pub min_magnitude_m: f32,

    /// Largest ripple magnitude (meters, exclusive)
    pub max_magnitude_m: f32,

    /// RNG seed
    pub seed: u64,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            interval_s: 0.25,
            margin_cells: 5,
            min_magnitude_m: 1.0,
            max_magnitude_m: 2.0,
            seed: 42,
        }
    }
}

impl RippleParams {
    /// Check the ripple settings against the grid they will disturb.
    pub fn validate(&self, waves: &WaveParams) -> Result<()> {
        if !(self.interval_s > 0.0) {
            return Err(Error::invalid(
                "ripples.interval_s",
                format!("must be positive, got {}", self.interval_s),
            ));
        }
        // Disturb touches the center's neighbours, so centers need a 1-cell border.
        let margin = self.margin_cells.max(1);
        if waves.rows <= 2 * margin || waves.cols <= 2 * margin {
            return Err(Error::invalid(
                "ripples.margin_cells",
                format!(
                    "margin {} leaves no room on a {}x{} grid",
                    self.margin_cells, waves.rows, waves.cols
                ),
            ));
        }
        if self.min_magnitude_m > self.max_magnitude_m {
            return Err(Error::invalid(
                "ripples.min_magnitude_m",
                format!(
                    "min {} exceeds max {}",
                    self.min_magnitude_m, self.max_magnitude_m
                ),
            ));
        }
        Ok(())
    }
}
