//! Light and material constants in the layout the lighting shader expects.
//!
//! Every struct is padded to whole 16-byte registers so it can be copied
//! straight into a constant buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::terrain::hill_height;

/// Surface reflectance; `specular[3]` holds the specular power
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub reflect: [f32; 4],
}

impl Material {
    /// Grassy hills
    pub fn land() -> Self {
        Self {
            ambient: [0.48, 0.77, 0.46, 1.0],
            diffuse: [0.48, 0.77, 0.46, 1.0],
            specular: [0.2, 0.2, 0.2, 16.0],
            reflect: [0.0; 4],
        }
    }

    /// Glossy blue water
    pub fn water() -> Self {
        Self {
            ambient: [0.137, 0.42, 0.556, 1.0],
            diffuse: [0.137, 0.42, 0.556, 1.0],
            specular: [0.8, 0.8, 0.8, 96.0],
            reflect: [0.0; 4],
        }
    }

    pub fn specular_power(&self) -> f32 {
        self.specular[3]
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub direction: [f32; 3],
    pub _pad: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            ambient: [0.2, 0.2, 0.2, 1.0],
            diffuse: [0.5, 0.5, 0.5, 1.0],
            specular: [0.5, 0.5, 0.5, 1.0],
            direction: [0.57735, -0.57735, 0.57735],
            _pad: 0.0,
        }
    }
}

/// Omni light with `1 / (a0 + a1 d + a2 d^2)` attenuation
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub position: [f32; 3],
    pub range: f32,
    pub attenuation: [f32; 3],
    pub _pad: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            ambient: [0.3, 0.3, 0.3, 1.0],
            diffuse: [0.7, 0.7, 0.7, 1.0],
            specular: [0.7, 0.7, 0.7, 1.0],
            position: [0.0; 3],
            range: 25.0,
            attenuation: [0.0, 0.1, 0.0],
            _pad: 0.0,
        }
    }
}

/// Cone light; `spot` is the falloff exponent
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpotLight {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub position: [f32; 3],
    pub range: f32,
    pub direction: [f32; 3],
    pub spot: f32,
    pub attenuation: [f32; 3],
    pub _pad: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            ambient: [0.0, 0.0, 0.0, 1.0],
            diffuse: [1.0, 1.0, 0.0, 1.0],
            specular: [1.0, 1.0, 1.0, 1.0],
            position: [0.0; 3],
            range: 10000.0,
            direction: [0.0, 0.0, 1.0],
            spot: 96.0,
            attenuation: [1.0, 0.0, 0.0],
            _pad: 0.0,
        }
    }
}

/// Per-frame constant buffer layout
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameConstants {
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub spot: SpotLight,
    pub eye_position: [f32; 3],
    pub _pad: f32,
}

/// The scene's three lights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneLights {
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub spot: SpotLight,
}

impl SceneLights {
    /// Point light circles over the hills, spot light shines from the eye at the origin.
    pub fn animate(&mut self, time_s: f32, eye: Vec3, water_level_m: f32) {
        let x = 70.0 * (0.2 * time_s).cos();
        let z = 70.0 * (0.2 * time_s).sin();
        let y = hill_height(x, z).max(water_level_m) + 10.0;
        self.point.position = [x, y, z];

        self.spot.position = eye.to_array();
        self.spot.direction = (-eye).normalize_or_zero().to_array();
    }

    pub fn constants(&self, eye: Vec3) -> FrameConstants {
        FrameConstants {
            directional: self.directional,
            point: self.point,
            spot: self.spot,
            eye_position: eye.to_array(),
            _pad: 0.0,
        }
    }
}
