//! Wave height-field simulation and its random disturbance driver.

mod grid;
mod ripples;

pub use grid::WaveGrid;
pub use ripples::{Ripple, RippleScheduler};
