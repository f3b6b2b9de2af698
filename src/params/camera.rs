//! Orbit camera configuration.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Camera orbiting the origin on a sphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Distance from the origin (meters)
    pub radius_m: f32,

    /// Polar angle measured from +Y (radians)
    pub phi: f32,

    /// Azimuth in the XZ plane measured from +X (radians)
    pub theta: f32,

    /// Vertical field of view (radians)
    pub fov_y: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            radius_m: 80.0,
            phi: 0.1 * PI,
            theta: 1.5 * PI,
            fov_y: 0.25 * PI,
            near_plane_m: 0.1,
            far_plane_m: 1000.0,
        }
    }
}
