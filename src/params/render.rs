//! Rendering and recording configuration.

use serde::{Deserialize, Serialize};

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical offset of the water surface below the hills (meters)
    pub water_offset_y_m: f32,

    /// Water texture repeat count
    pub water_tex_scale: f32,

    /// Water texture scroll speed along U (texture units per second)
    pub water_scroll_u_per_s: f32,

    /// Water texture scroll speed along V (texture units per second)
    pub water_scroll_v_per_s: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            water_offset_y_m: -3.0,
            water_tex_scale: 5.0,
            water_scroll_u_per_s: 0.1,
            water_scroll_v_per_s: 0.05,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Recording mode configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingConfig {
    /// Duration to simulate (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: String,

    /// Frame rate (FPS)
    pub fps: u32,

    /// Height mapped to full white; `-range` maps to black (meters)
    pub height_range_m: f32,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: "recording".to_string(),
            fps: 60,
            height_range_m: 1.0,
        }
    }

    /// Total number of frames to simulate
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Seconds between frames
    pub fn frame_interval_s(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> String {
        format!("{}/frames", self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_frames_rounds_up() {
        let mut config = RecordingConfig::new(1.01);
        config.fps = 60;
        assert_eq!(config.total_frames(), 61);
    }

    #[test]
    fn test_frames_dir() {
        let config = RecordingConfig::new(1.0);
        assert_eq!(config.frames_dir(), "recording/frames");
    }

    #[test]
    fn test_aspect_ratio() {
        let config = RenderConfig::default();
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}
