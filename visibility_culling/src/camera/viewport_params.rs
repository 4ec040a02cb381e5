/// Per-viewport shader parameters derived from a camera.
///
/// Layout matches the renderer's viewport uniform block: `#[repr(C)]`
/// with explicit padding so `vec3`/`vec2` members land on 16-byte rows.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use super::camera::Camera;

/// GPU-ready viewport parameters
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewportParams {
    pub camera_pos: [f32; 3],
    pub _pad0: f32,
    pub view_size: [f32; 2],
    /// Sub-pixel projection offset (temporal anti-aliasing), in pixels
    pub jitter: [f32; 2],
    pub view_projection: [[f32; 4]; 4],
    pub inv_view_projection: [[f32; 4]; 4],
    /// Last frame's view-projection (motion vectors)
    pub prev_view_projection: [[f32; 4]; 4],
}

impl ViewportParams {
    pub fn new(
        view_projection: Mat4,
        camera_pos: Vec3,
        view_size: Vec2,
        jitter: Vec2,
        prev_view_projection: Mat4,
    ) -> Self {
        Self {
            camera_pos: camera_pos.to_array(),
            _pad0: 0.0,
            view_size: view_size.to_array(),
            jitter: jitter.to_array(),
            view_projection: view_projection.to_cols_array_2d(),
            inv_view_projection: view_projection.inverse().to_cols_array_2d(),
            prev_view_projection: prev_view_projection.to_cols_array_2d(),
        }
    }

    /// Parameters of the final pass for `camera`.
    ///
    /// The jitter is applied in clip space: a pixel offset becomes
    /// `2 * jitter / view_size` in NDC.
    pub fn from_camera(
        camera: &Camera,
        view_size: Vec2,
        jitter: Vec2,
        prev_view_projection: Mat4,
    ) -> Self {
        let ndc_offset = jitter * 2.0 / view_size;
        let jitter_matrix = Mat4::from_translation(ndc_offset.extend(0.0));
        Self::new(
            jitter_matrix * camera.view_projection_matrix(),
            camera.position,
            view_size,
            jitter,
            prev_view_projection,
        )
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view_projection)
    }

    pub fn inv_view_projection_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.inv_view_projection)
    }
}

#[cfg(test)]
#[path = "viewport_params_tests.rs"]
mod tests;
