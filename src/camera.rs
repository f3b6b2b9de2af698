//! Orbit camera looking at the scene origin.

use glam::{Mat4, Vec3};

use crate::params::{CameraParams, RenderConfig};

/// Camera on a sphere around the origin
pub struct OrbitCamera {
    params: CameraParams,
}

impl OrbitCamera {
    pub fn new(params: CameraParams) -> Self {
        Self { params }
    }

    /// Eye position from spherical coordinates (radius, polar `phi`, azimuth `theta`)
    pub fn eye_position(&self) -> Vec3 {
        let CameraParams {
            radius_m: r,
            phi,
            theta,
            ..
        } = self.params;

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.cos(),
            r * phi.sin() * theta.sin(),
        )
    }

    /// Left-handed view matrix looking at the origin with +Y up
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye_position(), Vec3::ZERO, Vec3::Y)
    }

    /// Left-handed perspective projection for the configured window
    pub fn projection(&self, render_config: &RenderConfig) -> Mat4 {
        Mat4::perspective_lh(
            self.params.fov_y,
            render_config.aspect_ratio(),
            self.params.near_plane_m,
            self.params.far_plane_m,
        )
    }

    /// Combined view-projection matrix and eye position
    pub fn view_proj(&self, render_config: &RenderConfig) -> (Mat4, Vec3) {
        (self.projection(render_config) * self.view(), self.eye_position())
    }

    /// Move along the sphere, keeping the camera off the poles
    pub fn orbit(&mut self, d_theta: f32, d_phi: f32) {
        self.params.theta += d_theta;
        self.params.phi = (self.params.phi + d_phi).clamp(0.1, std::f32::consts::PI - 0.1);
    }

    pub fn params(&self) -> &CameraParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_default_eye_position() {
        let camera = OrbitCamera::new(CameraParams::default());
        let eye = camera.eye_position();

        // theta = 1.5π puts the camera on the -Z side, phi = 0.1π high above.
        assert!(eye.x.abs() < 1e-3);
        assert!((eye.y - 80.0 * (0.1 * PI).cos()).abs() < 1e-3);
        assert!((eye.z + 80.0 * (0.1 * PI).sin()).abs() < 1e-3);
        assert!((eye.length() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let camera = OrbitCamera::new(CameraParams::default());
        let (view_proj, _) = camera.view_proj(&RenderConfig::default());

        let clip = view_proj * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_orbit_clamps_phi() {
        let mut camera = OrbitCamera::new(CameraParams::default());
        camera.orbit(0.0, -10.0);
        assert_eq!(camera.params().phi, 0.1);
        camera.orbit(0.5, 100.0);
        assert_eq!(camera.params().phi, PI - 0.1);
        assert!((camera.params().theta - (1.5 * PI + 0.5)).abs() < 1e-5);
    }
}
