/// Camera: perspective viewpoint of the main (final) pass.
///
/// A plain record owned by the renderer and updated every frame by
/// input and animation code. All matrices are left-handed: +Z points
/// into the screen and projected depth maps to [0, 1].

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::cull_err;

/// Up reference used by the camera's look-at
pub const CAMERA_UP: Vec3 = Vec3::Y;

/// Perspective camera looking at a target point.
///
/// Invariants (caller obligations, see [`Camera::validate`]):
/// `position != target`, `target - position` not parallel to +Y,
/// `near > 0`, `far > near`, `aspect_ratio > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Orbit angle in radians, driven by the animator (not used by the matrices)
    pub rotation: f32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Half of the vertical field of view, in radians
    pub fov_vert_half: f32,
    /// Near plane distance
    pub distance_near: f32,
    /// Far plane distance
    pub distance_far: f32,
}

impl Camera {
    /// Create a camera with zero rotation
    pub fn new(
        position: Vec3,
        target: Vec3,
        aspect_ratio: f32,
        fov_vert_half: f32,
        distance_near: f32,
        distance_far: f32,
    ) -> Self {
        Self {
            position,
            target,
            rotation: 0.0,
            aspect_ratio,
            fov_vert_half,
            distance_near,
            distance_far,
        }
    }

    /// Left-handed look-at view matrix for (position, target, +Y).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.target, CAMERA_UP)
    }

    /// Left-handed perspective projection (full vertical FOV = 2 × half-FOV).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fov_vert_half * 2.0,
            self.aspect_ratio,
            self.distance_near,
            self.distance_far,
        )
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Check the invariants the matrices rely on.
    ///
    /// The culling path never calls this; renderers validate scene data
    /// once, at load time or after editing.
    pub fn validate(&self) -> Result<()> {
        let look = self.target - self.position;
        if look.length_squared() <= f32::EPSILON {
            return Err(cull_err!("visibility::Camera", Error::InvalidCamera(
                "position and target coincide".to_string()
            )));
        }
        if look.normalize().cross(CAMERA_UP).length() <= 1e-6 {
            return Err(cull_err!("visibility::Camera", Error::InvalidCamera(
                "view direction is parallel to the up vector".to_string()
            )));
        }
        if !(self.aspect_ratio > 0.0) {
            return Err(cull_err!("visibility::Camera", Error::InvalidCamera(
                format!("aspect ratio must be positive, got {}", self.aspect_ratio)
            )));
        }
        if !(self.fov_vert_half > 0.0 && self.fov_vert_half < std::f32::consts::FRAC_PI_2) {
            return Err(cull_err!("visibility::Camera", Error::InvalidCamera(
                format!("half vertical FOV must be in (0, π/2), got {}", self.fov_vert_half)
            )));
        }
        validate_depth_range("visibility::Camera", self.distance_near, self.distance_far)
    }
}

/// Shared near/far check for cameras and probes
pub(crate) fn validate_depth_range(source: &str, near: f32, far: f32) -> Result<()> {
    if !(near > 0.0) {
        return Err(cull_err!(source, Error::InvalidCamera(
            format!("near distance must be positive, got {}", near)
        )));
    }
    if !(far > near) {
        return Err(cull_err!(source, Error::InvalidCamera(
            format!("far distance ({}) must exceed near distance ({})", far, near)
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
