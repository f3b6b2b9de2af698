//! Hillwaves library - wave height-field simulation over analytic hills

pub mod camera;
pub mod error;
pub mod lighting;
pub mod mesh;
pub mod params;
pub mod recording;
pub mod scene;
pub mod terrain;
pub mod waves;

pub use error::{Error, Result};
