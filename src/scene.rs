//! Hills-and-waves scene: owns the simulation and the CPU side of every buffer.
//!
//! The scene advances the water, keeps the dynamic vertex buffer in sync with
//! the simulation, and produces the per-object constants a renderer needs.
//! Uploading and drawing are left to the caller.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::camera::OrbitCamera;
use crate::lighting::{FrameConstants, Material, SceneLights};
use crate::mesh::{grid_indices, write_wave_vertices, Vertex};
use crate::params::{RenderConfig, SceneParams};
use crate::terrain::LandMesh;
use crate::waves::{Ripple, RippleScheduler, WaveGrid};

/// Per-object constant buffer layout
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ObjectConstants {
    pub world: [[f32; 4]; 4],
    pub world_inv_transpose: [[f32; 4]; 4],
    pub world_view_proj: [[f32; 4]; 4],
    pub tex_transform: [[f32; 4]; 4],
    pub material: Material,
}

impl ObjectConstants {
    pub fn new(world: Mat4, view_proj: Mat4, tex_transform: Mat4, material: Material) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            world_inv_transpose: inverse_transpose(world).to_cols_array_2d(),
            world_view_proj: (view_proj * world).to_cols_array_2d(),
            tex_transform: tex_transform.to_cols_array_2d(),
            material,
        }
    }
}

/// Inverse-transpose for transforming normals; translation is dropped first.
pub fn inverse_transpose(m: Mat4) -> Mat4 {
    let mut a = m;
    a.w_axis = Vec4::W;
    a.inverse().transpose()
}

/// What happened during one call to [`HillsAndWaves::frame_move`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    pub steps: u32,
    pub ripple: Option<Ripple>,
}

/// The scene's mutable state, passed explicitly to the per-frame driver
pub struct HillsAndWaves {
    pub waves: WaveGrid,
    pub wave_vertices: Vec<Vertex>,
    pub wave_indices: Vec<u32>,
    pub land: LandMesh,
    pub camera: OrbitCamera,
    pub lights: SceneLights,
    ripples: RippleScheduler,
    render_config: RenderConfig,
    land_tex_scale: f32,
    land_world: Mat4,
    water_world: Mat4,
    water_tex_offset: Vec2,
}

impl HillsAndWaves {
    /// Build the scene. Parameters should already be validated.
    pub fn new(params: &SceneParams) -> Self {
        let waves = WaveGrid::from_params(&params.waves);
        let wave_indices = grid_indices(waves.row_count(), waves.column_count());
        let mut wave_vertices = vec![Vertex::default(); waves.vertex_count()];
        write_wave_vertices(&waves, &mut wave_vertices);

        let land = LandMesh::new(&params.terrain);

        log::debug!(
            "scene built: water {}x{} ({} triangles), land {}x{} ({} indices)",
            waves.row_count(),
            waves.column_count(),
            waves.triangle_count(),
            land.row_count(),
            land.column_count(),
            land.index_count()
        );

        Self {
            waves,
            wave_vertices,
            wave_indices,
            land,
            camera: OrbitCamera::new(params.camera.clone()),
            lights: SceneLights::default(),
            ripples: RippleScheduler::new(params.ripples.clone()),
            render_config: params.render.clone(),
            land_tex_scale: params.terrain.tex_scale,
            land_world: Mat4::IDENTITY,
            water_world: Mat4::from_translation(Vec3::new(
                0.0,
                params.render.water_offset_y_m,
                0.0,
            )),
            water_tex_offset: Vec2::ZERO,
        }
    }

    /// Advance the scene to `time_s`, `elapsed_s` after the previous frame.
    ///
    /// Drops a ripple when its interval is due, steps the water, refreshes the
    /// water vertex buffer, scrolls the water texture and moves the lights.
    pub fn frame_move(&mut self, time_s: f32, elapsed_s: f32) -> FrameStats {
        let ripple = self.ripples.tick(time_s, &mut self.waves);
        let steps = self.waves.update(elapsed_s);

        if steps > 0 || ripple.is_some() {
            write_wave_vertices(&self.waves, &mut self.wave_vertices);
        }

        self.water_tex_offset += Vec2::new(
            self.render_config.water_scroll_u_per_s,
            self.render_config.water_scroll_v_per_s,
        ) * elapsed_s;

        self.lights
            .animate(time_s, self.camera.eye_position(), self.render_config.water_offset_y_m);

        FrameStats { steps, ripple }
    }

    /// Water texture transform: tile, then scroll by the accumulated offset.
    pub fn water_tex_transform(&self) -> Mat4 {
        let scale = self.render_config.water_tex_scale;
        Mat4::from_translation(self.water_tex_offset.extend(0.0))
            * Mat4::from_scale(Vec3::new(scale, scale, 0.0))
    }

    pub fn land_tex_transform(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(self.land_tex_scale, self.land_tex_scale, 0.0))
    }

    pub fn water_tex_offset(&self) -> Vec2 {
        self.water_tex_offset
    }

    pub fn land_constants(&self) -> ObjectConstants {
        let (view_proj, _) = self.camera.view_proj(&self.render_config);
        ObjectConstants::new(
            self.land_world,
            view_proj,
            self.land_tex_transform(),
            Material::land(),
        )
    }

    pub fn water_constants(&self) -> ObjectConstants {
        let (view_proj, _) = self.camera.view_proj(&self.render_config);
        ObjectConstants::new(
            self.water_world,
            view_proj,
            self.water_tex_transform(),
            Material::water(),
        )
    }

    /// Lights and eye position for the current frame
    pub fn frame_constants(&self) -> FrameConstants {
        self.lights.constants(self.camera.eye_position())
    }

    pub fn eye_position(&self) -> Vec3 {
        self.camera.eye_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{TerrainParams, WaveParams};

    fn small_params() -> SceneParams {
        SceneParams {
            waves: WaveParams {
                rows: 40,
                cols: 40,
                ..WaveParams::default()
            },
            terrain: TerrainParams {
                rows: 20,
                cols: 20,
                ..TerrainParams::default()
            },
            ..SceneParams::default()
        }
    }

    #[test]
    fn test_buffers_sized_from_grid() {
        let scene = HillsAndWaves::new(&small_params());
        assert_eq!(scene.wave_vertices.len(), 1600);
        assert_eq!(scene.wave_indices.len(), 3 * scene.waves.triangle_count());
        assert_eq!(scene.land.vertices.len(), 400);
    }

    #[test]
    fn test_frame_move_drives_ripples_and_steps() {
        let mut scene = HillsAndWaves::new(&small_params());
        let dt = 1.0 / 64.0;

        let mut ripples = 0;
        let mut steps = 0;
        for frame in 1..=64 {
            let stats = scene.frame_move(frame as f32 * dt, dt);
            ripples += stats.ripple.is_some() as u32;
            steps += stats.steps;
        }

        // One second: a ripple every quarter second, a step every 30 ms.
        assert_eq!(ripples, 4);
        assert!((32..=34).contains(&steps), "steps = {steps}");
        assert!(scene.waves.total_energy() > 0.0);
    }

    #[test]
    fn test_vertex_buffer_tracks_simulation() {
        let mut scene = HillsAndWaves::new(&small_params());
        for frame in 1..=30 {
            scene.frame_move(frame as f32 * 0.02, 0.02);
        }
        for (idx, v) in scene.wave_vertices.iter().enumerate() {
            assert_eq!(v.position[1], scene.waves.height(idx));
        }
    }

    #[test]
    fn test_water_texture_scrolls() {
        let mut scene = HillsAndWaves::new(&small_params());
        scene.frame_move(0.5, 0.5);
        scene.frame_move(1.0, 0.5);

        let offset = scene.water_tex_offset();
        assert!((offset.x - 0.1).abs() < 1e-6);
        assert!((offset.y - 0.05).abs() < 1e-6);

        // Texture origin is scaled first, then shifted by the offset.
        let uv = scene.water_tex_transform() * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert!((uv.x - 5.1).abs() < 1e-5);
        assert!((uv.y - 5.05).abs() < 1e-5);
    }

    #[test]
    fn test_water_world_is_lowered() {
        let scene = HillsAndWaves::new(&small_params());
        let constants = scene.water_constants();
        let world = Mat4::from_cols_array_2d(&constants.world);
        let p = world.transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn test_object_constants_carry_materials() {
        let scene = HillsAndWaves::new(&small_params());
        assert_eq!(scene.land_constants().material, Material::land());
        assert_eq!(scene.water_constants().material, Material::water());
        assert_eq!(std::mem::size_of::<ObjectConstants>(), 4 * 64 + 64);
    }

    #[test]
    fn test_frame_constants_follow_camera_and_time() {
        let mut scene = HillsAndWaves::new(&small_params());
        scene.frame_move(0.0, 0.0);
        let before = scene.frame_constants();
        assert_eq!(before.eye_position, scene.eye_position().to_array());
        assert_eq!(before.spot.position, scene.eye_position().to_array());

        scene.frame_move(2.0, 2.0);
        let after = scene.frame_constants();
        assert_ne!(before.point.position, after.point.position);
        assert_eq!(after.directional, before.directional);
    }

    #[test]
    fn test_inverse_transpose_ignores_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(inverse_transpose(m), Mat4::IDENTITY);

        let s = Mat4::from_scale(Vec3::new(2.0, 4.0, 1.0));
        let it = inverse_transpose(s);
        assert!((it.x_axis.x - 0.5).abs() < 1e-6);
        assert!((it.y_axis.y - 0.25).abs() < 1e-6);
    }
}
