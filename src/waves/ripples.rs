//! Timer-driven random disturbances that keep the surface moving.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::WaveGrid;
use crate::params::RippleParams;

/// A disturbance applied to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub row: usize,
    pub col: usize,
    pub magnitude: f32,
}

/// Drops a random ripple onto the grid once per interval.
pub struct RippleScheduler {
    params: RippleParams,
    rng: StdRng,
    /// Start of the current interval (seconds).
    t_base: f32,
}

impl RippleScheduler {
    pub fn new(params: RippleParams) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            params,
            rng,
            t_base: 0.0,
        }
    }

    /// Apply at most one ripple if an interval has elapsed by `time_s`.
    ///
    /// Centers are drawn from `[margin, rows - margin)` x `[margin, cols - margin)`
    /// and magnitudes from `[min_magnitude_m, max_magnitude_m)`.
    pub fn tick(&mut self, time_s: f32, grid: &mut WaveGrid) -> Option<Ripple> {
        if time_s - self.t_base < self.params.interval_s {
            return None;
        }
        self.t_base += self.params.interval_s;

        let margin = self.params.margin_cells.max(1);
        let rows = grid.row_count();
        let cols = grid.column_count();
        assert!(
            rows > 2 * margin && cols > 2 * margin,
            "ripple margin {margin} leaves no room on a {rows}x{cols} grid"
        );

        let row = self.rng.gen_range(margin..rows - margin);
        let col = self.rng.gen_range(margin..cols - margin);
        let magnitude = if self.params.max_magnitude_m > self.params.min_magnitude_m {
            self.rng
                .gen_range(self.params.min_magnitude_m..self.params.max_magnitude_m)
        } else {
            self.params.min_magnitude_m
        };

        grid.disturb(row, col, magnitude);
        log::trace!("ripple at ({row}, {col}) magnitude {magnitude:.3}");

        Some(Ripple {
            row,
            col,
            magnitude,
        })
    }

    pub fn params(&self) -> &RippleParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> WaveGrid {
        WaveGrid::new(30, 20, 1.0, 0.03, 3.25, 0.4)
    }

    #[test]
    fn test_one_ripple_per_interval() {
        let mut grid = grid();
        let mut scheduler = RippleScheduler::new(RippleParams::default());

        assert!(scheduler.tick(0.1, &mut grid).is_none());
        assert!(scheduler.tick(0.25, &mut grid).is_some());
        assert!(scheduler.tick(0.3, &mut grid).is_none());
        assert!(scheduler.tick(0.5, &mut grid).is_some());
    }

    #[test]
    fn test_late_tick_catches_up_one_interval_at_a_time() {
        let mut grid = grid();
        let mut scheduler = RippleScheduler::new(RippleParams::default());

        // A long stall still yields a single ripple per tick.
        assert!(scheduler.tick(1.0, &mut grid).is_some());
        assert!(scheduler.tick(1.0, &mut grid).is_some());
        assert!(scheduler.tick(1.0, &mut grid).is_some());
        assert!(scheduler.tick(1.0, &mut grid).is_some());
        assert!(scheduler.tick(1.0, &mut grid).is_none());
    }

    #[test]
    fn test_ripples_stay_inside_margin() {
        let mut grid = grid();
        let params = RippleParams::default();
        let mut scheduler = RippleScheduler::new(params.clone());

        for n in 1..=200 {
            let ripple = scheduler
                .tick(n as f32 * params.interval_s, &mut grid)
                .expect("interval elapsed");
            assert!(ripple.row >= 5 && ripple.row < 25);
            assert!(ripple.col >= 5 && ripple.col < 15);
            assert!(ripple.magnitude >= 1.0 && ripple.magnitude < 2.0);
        }
    }

    #[test]
    fn test_ripple_mutates_grid() {
        let mut grid = grid();
        let mut scheduler = RippleScheduler::new(RippleParams::default());
        let ripple = scheduler.tick(0.25, &mut grid).unwrap();
        assert_eq!(grid.height_at(ripple.row, ripple.col), ripple.magnitude);
    }

    #[test]
    fn test_same_seed_same_ripples() {
        let mut a = RippleScheduler::new(RippleParams::default());
        let mut b = RippleScheduler::new(RippleParams::default());
        let mut grid_a = grid();
        let mut grid_b = grid();
        for n in 1..=20 {
            let t = n as f32 * 0.25;
            assert_eq!(a.tick(t, &mut grid_a), b.tick(t, &mut grid_b));
        }
    }
}
