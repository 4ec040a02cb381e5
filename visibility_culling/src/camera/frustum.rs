/// FrustumCuller: sphere visibility tests against a symmetric frustum.
///
/// Plane normals are derived from the view matrix and the field of view
/// rather than extracted from a view-projection matrix:
/// - near, left and bottom normals come from the inverse view rotation
/// - right and top normals are the left and bottom normals mirrored
///   across the view axis
/// - the far plane reuses the near normal, flipped
///
/// All normals are unit length and point toward the frustum interior.
///
/// Limitation: the mirror construction only holds for symmetric frusta
/// (same half-angle on both sides of the view axis). Off-axis frusta need
/// the four side planes computed independently.

use glam::{Mat3, Mat4, Vec3};
use std::f32::consts::FRAC_PI_4;
use crate::scene::BoundingSphere;
use super::camera::Camera;
use super::camera_probe::{CameraProbe, CubeFace};

/// Transient culling helper, rebuilt once per pass (or per cube face).
///
/// Starts *unset*; [`reset`](Self::reset) (or one of its overloads) moves it
/// to *ready*. Every reset overwrites the whole state, so one instance can be
/// reused across frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrustumCuller {
    /// Frustum origin
    position: Vec3,
    norm_near: Vec3,
    norm_left: Vec3,
    norm_right: Vec3,
    norm_bottom: Vec3,
    norm_top: Vec3,
    /// Near distance from the origin
    dist_near: f32,
    /// Far distance from the origin
    dist_far: f32,
    ready: bool,
}

impl FrustumCuller {
    /// Create an unset culler
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready culler for a camera (`view` must be `camera.view_matrix()`).
    pub fn from_camera(view: &Mat4, camera: &Camera) -> Self {
        let mut culler = Self::new();
        culler.reset_from_camera(view, camera);
        culler
    }

    /// Ready culler for one face of a probe.
    pub fn from_probe_face(probe: &CameraProbe, face: CubeFace) -> Self {
        let mut culler = Self::new();
        culler.reset_from_probe(&probe.view_matrix_for_face(face), probe);
        culler
    }

    /// Recompute every plane for a left-handed view.
    ///
    /// # Arguments
    ///
    /// * `view` - World to view transform
    /// * `position` - Frustum origin in world space
    /// * `aspect` - Width / height
    /// * `half_fov_vertical` - Half of the vertical aperture, in radians
    /// * `near` / `far` - Distances of the clip planes from the origin
    pub fn reset(
        &mut self,
        view: &Mat4,
        position: Vec3,
        aspect: f32,
        half_fov_vertical: f32,
        near: f32,
        far: f32,
    ) {
        self.position = position;
        self.dist_near = near;
        self.dist_far = far;

        let half_fov_horizontal = half_fov_vertical * aspect;
        let rotation = Mat3::from_mat4(*view).inverse();

        self.norm_near = rotation * Vec3::Z;

        let (sin_w, cos_w) = half_fov_horizontal.sin_cos();
        self.norm_left = rotation * Vec3::new(cos_w, 0.0, sin_w);

        let (sin_h, cos_h) = half_fov_vertical.sin_cos();
        self.norm_bottom = rotation * Vec3::new(0.0, cos_h, sin_h);

        self.norm_right = reflect_across(self.norm_left, self.norm_near);
        self.norm_top = reflect_across(self.norm_bottom, self.norm_near);

        self.ready = true;
    }

    /// Reset from a camera. `view` is passed in because the caller
    /// already computed it for the pass.
    pub fn reset_from_camera(&mut self, view: &Mat4, camera: &Camera) {
        self.reset(
            view,
            camera.position,
            camera.aspect_ratio,
            camera.fov_vert_half,
            camera.distance_near,
            camera.distance_far,
        );
    }

    /// Reset from a probe face view (square, 90° aperture).
    pub fn reset_from_probe(&mut self, view: &Mat4, probe: &CameraProbe) {
        self.reset(
            view,
            probe.position,
            CameraProbe::ASPECT,
            FRAC_PI_4,
            probe.distance_near,
            probe.distance_far,
        );
    }

    /// Conservative sphere test.
    ///
    /// `sphere.center` is relative to `actor_position`. Each plane is pushed
    /// outward by the radius and the sphere center is tested against the
    /// inflated frustum: a sphere that is really visible is never rejected,
    /// one near an edge or corner may be accepted while outside.
    pub fn intersects(&self, actor_position: Vec3, sphere: &BoundingSphere) -> bool {
        debug_assert!(self.ready, "FrustumCuller::intersects called before reset");

        let radius = sphere.radius;
        let to_sphere = actor_position + sphere.center - self.position;

        if (to_sphere + self.norm_near * (radius - self.dist_near)).dot(self.norm_near) < 0.0 {
            return false;
        }
        if (to_sphere - self.norm_near * (radius + self.dist_far)).dot(-self.norm_near) < 0.0 {
            return false;
        }

        for normal in [self.norm_left, self.norm_right, self.norm_bottom, self.norm_top] {
            if (to_sphere + normal * radius).dot(normal) < 0.0 {
                return false;
            }
        }

        true
    }

    // ===== GETTERS =====

    /// Whether a reset happened since construction
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// View direction (also the inward normal of the near plane)
    pub fn near_normal(&self) -> Vec3 {
        self.norm_near
    }

    /// Inward normal of the far plane
    pub fn far_normal(&self) -> Vec3 {
        -self.norm_near
    }

    pub fn left_normal(&self) -> Vec3 {
        self.norm_left
    }

    pub fn right_normal(&self) -> Vec3 {
        self.norm_right
    }

    pub fn bottom_normal(&self) -> Vec3 {
        self.norm_bottom
    }

    pub fn top_normal(&self) -> Vec3 {
        self.norm_top
    }

    pub fn distance_near(&self) -> f32 {
        self.dist_near
    }

    pub fn distance_far(&self) -> f32 {
        self.dist_far
    }
}

/// Mirror `v` across the axis `axis` (unit length).
fn reflect_across(v: Vec3, axis: Vec3) -> Vec3 {
    -v + axis * (axis.dot(v) * 2.0)
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
