//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers of the hills-and-waves scene live here with:
//! - Physical units (meters, seconds, radians)
//! - Documented ranges and meanings
//! - `Default` values matching the reference scene
//!
//! Every struct deserializes with `#[serde(default)]`, so a JSON parameter
//! file only needs to name the fields it overrides.

mod camera;
mod render;
mod terrain;
mod waves;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Re-export all types
pub use camera::CameraParams;
pub use render::{RecordingConfig, RenderConfig};
pub use terrain::TerrainParams;
pub use waves::{RippleParams, WaveParams};

/// Every parameter the scene needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub waves: WaveParams,
    pub ripples: RippleParams,
    pub terrain: TerrainParams,
    pub camera: CameraParams,
    pub render: RenderConfig,
    pub recording: RecordingConfig,
}

impl SceneParams {
    /// Load parameters from a JSON file; missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.waves.validate()?;
        self.ripples.validate(&self.waves)?;
        self.terrain.validate()?;
        if self.recording.fps == 0 {
            return Err(Error::invalid("recording.fps", "must be at least 1"));
        }
        if !(self.recording.height_range_m > 0.0) {
            return Err(Error::invalid(
                "recording.height_range_m",
                format!("must be positive, got {}", self.recording.height_range_m),
            ));
        }
        if self.render.window_width == 0 {
            return Err(Error::invalid("render.window_width", "must be at least 1"));
        }
        if self.render.window_height == 0 {
            return Err(Error::invalid("render.window_height", "must be at least 1"));
        }
        if !(self.camera.near_plane_m > 0.0 && self.camera.near_plane_m < self.camera.far_plane_m)
        {
            return Err(Error::invalid(
                "camera.near_plane_m",
                format!(
                    "need 0 < near < far, got near {} far {}",
                    self.camera.near_plane_m, self.camera.far_plane_m
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SceneParams::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params: SceneParams =
            serde_json::from_str(r#"{ "waves": { "rows": 64, "damping": 0.1 } }"#).unwrap();
        assert_eq!(params.waves.rows, 64);
        assert_eq!(params.waves.damping, 0.1);
        assert_eq!(params.waves.cols, WaveParams::default().cols);
        assert_eq!(params.ripples, RippleParams::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneParams::load("/nonexistent/hillwaves.json").unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_load_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = SceneParams::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_non_positive_height_range_rejected() {
        let mut params = SceneParams::default();
        params.recording.height_range_m = 0.0;
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParams { name: "recording.height_range_m", .. })
        ));
        params.recording.height_range_m = -1.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_zero_window_width_rejected() {
        let mut params = SceneParams::default();
        params.render.window_width = 0;
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParams { name: "render.window_width", .. })
        ));
    }

    #[test]
    fn test_bad_clip_planes_rejected() {
        let mut params = SceneParams::default();
        params.camera.near_plane_m = 0.0;
        assert!(params.validate().is_err());

        let mut params = SceneParams::default();
        params.camera.near_plane_m = 2000.0;
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParams { name: "camera.near_plane_m", .. })
        ));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut params = SceneParams::default();
        params.recording.fps = 0;
        assert!(params.validate().is_err());
    }
}
