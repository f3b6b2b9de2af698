//! Heightmap frame capture for offline inspection of the water surface.

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

use crate::error::{Error, Result};
use crate::params::RecordingConfig;
use crate::waves::WaveGrid;

/// Writes the wave heights of successive frames as grayscale PNGs
pub struct HeightmapRecorder {
    frames_dir: PathBuf,
    height_range_m: f32,
    frames_written: usize,
}

impl HeightmapRecorder {
    /// Create the frame directory and a recorder writing into it.
    pub fn new(config: &RecordingConfig) -> Result<Self> {
        let frames_dir = PathBuf::from(config.frames_dir());
        std::fs::create_dir_all(&frames_dir)?;

        Ok(Self {
            frames_dir,
            height_range_m: config.height_range_m,
            frames_written: 0,
        })
    }

    /// Render heights into an image, one pixel per grid sample.
    ///
    /// `-range` maps to black, `+range` to white, zero to mid gray.
    pub fn heightmap(grid: &WaveGrid, height_range_m: f32) -> GrayImage {
        let cols = grid.column_count();
        let mut img = GrayImage::new(cols as u32, grid.row_count() as u32);

        for (idx, &h) in grid.heights().iter().enumerate() {
            let gray = ((h / height_range_m + 1.0) * 127.5).clamp(0.0, 255.0) as u8;
            img.put_pixel((idx % cols) as u32, (idx / cols) as u32, Luma([gray]));
        }

        img
    }

    /// Save the current solution as the next numbered frame.
    pub fn capture(&mut self, grid: &WaveGrid) -> Result<PathBuf> {
        let path = self
            .frames_dir
            .join(format!("frame_{:05}.png", self.frames_written));

        Self::heightmap(grid, self.height_range_m)
            .save(&path)
            .map_err(|source| Error::FrameWrite {
                path: path.clone(),
                source,
            })?;

        self.frames_written += 1;
        Ok(path)
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    pub fn frames_dir(&self) -> &Path {
        &self.frames_dir
    }
}
