/// CameraProbe: cubemap capture point for the reflection pass.
///
/// A probe has a position and a depth range but no orientation: it looks
/// along the six axis directions, one view matrix per cube face, all
/// sharing a single 90° square projection so the faces stitch seamlessly.

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;
use crate::error::{Error, Result};
use crate::cull_err;
use super::camera::validate_depth_range;

/// Number of faces of a cubemap
pub const CUBE_FACE_COUNT: usize = 6;

/// One face of a cubemap, in the fixed order +X, -X, +Y, -Y, +Z, -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CubeFace {
    PositiveX = 0,
    NegativeX = 1,
    PositiveY = 2,
    NegativeY = 3,
    PositiveZ = 4,
    NegativeZ = 5,
}

impl CubeFace {
    /// All faces in cubemap layer order
    pub const ALL: [CubeFace; CUBE_FACE_COUNT] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Layer index of this face (0..6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look direction of this face
    pub fn direction(self) -> Vec3 {
        match self {
            CubeFace::PositiveX => Vec3::X,
            CubeFace::NegativeX => Vec3::NEG_X,
            CubeFace::PositiveY => Vec3::Y,
            CubeFace::NegativeY => Vec3::NEG_Y,
            CubeFace::PositiveZ => Vec3::Z,
            CubeFace::NegativeZ => Vec3::NEG_Z,
        }
    }

    /// Up vector of this face.
    ///
    /// The ±Y faces look along the default up axis, so they use ∓Z instead.
    pub fn up(self) -> Vec3 {
        match self {
            CubeFace::PositiveY => Vec3::NEG_Z,
            CubeFace::NegativeY => Vec3::Z,
            _ => Vec3::Y,
        }
    }

    /// Bit of this face in a per-actor face mask
    pub fn mask(self) -> u8 {
        1 << self.index()
    }
}

impl TryFrom<usize> for CubeFace {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        CubeFace::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidFaceIndex(index))
    }
}

/// Fixed reflection capture point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraProbe {
    /// Capture position in world space
    pub position: Vec3,
    /// Near plane distance
    pub distance_near: f32,
    /// Far plane distance
    pub distance_far: f32,
}

impl CameraProbe {
    /// Vertical field of view shared by all faces
    pub const FOV: f32 = FRAC_PI_2;

    /// Aspect ratio shared by all faces
    pub const ASPECT: f32 = 1.0;

    pub fn new(position: Vec3, distance_near: f32, distance_far: f32) -> Self {
        Self {
            position,
            distance_near,
            distance_far,
        }
    }

    /// Left-handed look-at view matrix for one cube face.
    pub fn view_matrix_for_face(&self, face: CubeFace) -> Mat4 {
        Mat4::look_at_lh(self.position, self.position + face.direction(), face.up())
    }

    /// Same as [`view_matrix_for_face`](Self::view_matrix_for_face), from a raw layer index.
    pub fn view_matrix_for_face_index(&self, index: usize) -> Result<Mat4> {
        let face = CubeFace::try_from(index)
            .map_err(|err| cull_err!("visibility::CameraProbe", err))?;
        Ok(self.view_matrix_for_face(face))
    }

    /// View matrices of all six faces, in layer order.
    pub fn view_matrices(&self) -> [Mat4; CUBE_FACE_COUNT] {
        CubeFace::ALL.map(|face| self.view_matrix_for_face(face))
    }

    /// 90° square left-handed projection, identical for every face.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(Self::FOV, Self::ASPECT, self.distance_near, self.distance_far)
    }

    /// Check near/far.
    pub fn validate(&self) -> Result<()> {
        validate_depth_range("visibility::CameraProbe", self.distance_near, self.distance_far)
    }
}

#[cfg(test)]
#[path = "camera_probe_tests.rs"]
mod tests;
