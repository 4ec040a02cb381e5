/// Actor types for the scene system.
///
/// An actor is a plain record: the culling data (bounding sphere, pass
/// subscription, per-pass results) plus the rendering attributes the
/// renderer needs, with meshes and pipelines referenced by handle into
/// renderer-owned tables.

use glam::{Mat4, Quat, Vec3, Vec4};
use slotmap::new_key_type;
use crate::error::{Error, Result};
use crate::cull_err;
use super::pass_flags::PassFlags;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for an actor within a Scene.
    pub struct ActorKey;
}

// ===== HANDLES =====

/// Index of a mesh in the renderer's mesh table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(pub u32);

/// Index of a pipeline in the renderer's pipeline table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineHandle(pub u32);

// ===== BOUNDING SPHERE =====

/// Sphere enclosing an actor's geometry.
///
/// The center is relative to the actor's model position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Unpack from `xyz = center, w = radius`
    pub fn from_vec4(packed: Vec4) -> Self {
        Self {
            center: packed.truncate(),
            radius: packed.w,
        }
    }

    /// Pack as `xyz = center, w = radius`
    pub fn to_vec4(&self) -> Vec4 {
        self.center.extend(self.radius)
    }

    /// Same sphere moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }
}

impl From<Vec4> for BoundingSphere {
    fn from(packed: Vec4) -> Self {
        Self::from_vec4(packed)
    }
}

// ===== ACTOR DATA =====

/// One object of the scene.
///
/// `bounding_sphere` and `pass_flags` are set at load time and read-only
/// while culling. `instance_count_in_reflection` and `visible_in_final`
/// are written back by the culling loop every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorData {
    /// Mesh drawn for this actor
    pub mesh: MeshHandle,
    /// Pipeline used to draw this actor
    pub pipeline: PipelineHandle,
    /// Bounding sphere, center relative to `model_position`
    pub bounding_sphere: BoundingSphere,
    /// Color multiplier, lets actors sharing a mesh look different
    pub diffuse_multiplier: Vec3,
    /// Offset from the rotation point
    pub translation: Vec3,
    /// Point the actor orbits around
    pub rotation_point: Vec3,
    /// Current angle around `rotation_axis`, in radians
    pub rotation_amount: f32,
    /// Radians per second
    pub rotation_speed: f32,
    pub rotation_axis: Vec3,
    /// Position in the world
    pub model_position: Vec3,
    /// Passes this actor must be rendered to
    pub pass_flags: PassFlags,
    /// Number of probe faces this actor is drawn into (one instance per face)
    pub instance_count_in_reflection: u8,
    /// Whether the main camera sees this actor
    pub visible_in_final: bool,
}

impl ActorData {
    /// Create an actor at the origin, not rotating, with no visibility yet.
    pub fn new(
        mesh: MeshHandle,
        pipeline: PipelineHandle,
        bounding_sphere: BoundingSphere,
        pass_flags: PassFlags,
    ) -> Self {
        Self {
            mesh,
            pipeline,
            bounding_sphere,
            diffuse_multiplier: Vec3::ONE,
            translation: Vec3::ZERO,
            rotation_point: Vec3::ZERO,
            rotation_amount: 0.0,
            rotation_speed: 0.0,
            rotation_axis: Vec3::Y,
            model_position: Vec3::ZERO,
            pass_flags,
            instance_count_in_reflection: 0,
            visible_in_final: false,
        }
    }

    /// Whether this actor takes part in `pass`
    pub fn participates_in(&self, pass: PassFlags) -> bool {
        self.pass_flags.participates_in(pass)
    }

    /// Rotation around `rotation_axis` by `rotation_amount`.
    ///
    /// A zero axis means no rotation.
    pub fn rotation(&self) -> Quat {
        match self.rotation_axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, self.rotation_amount),
            None => Quat::IDENTITY,
        }
    }

    /// Re-derive `model_position` from the orbit parameters.
    pub fn update_model_position(&mut self) {
        self.model_position = self.rotation_point + self.rotation() * self.translation;
    }

    /// Advance the orbit by `delta_seconds` and refresh `model_position`.
    pub fn advance_rotation(&mut self, delta_seconds: f32) {
        self.rotation_amount += self.rotation_speed * delta_seconds;
        self.update_model_position();
    }

    /// World transform: orbit rotation, then translation to `model_position`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.model_position)
    }

    /// Bounding sphere in world space
    pub fn world_bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere.translated(self.model_position)
    }

    /// Check that the bounding sphere can be culled.
    pub fn validate(&self) -> Result<()> {
        let sphere = &self.bounding_sphere;
        if !sphere.center.is_finite() {
            return Err(cull_err!("visibility::ActorData", Error::InvalidActor(
                format!("bounding sphere center is not finite: {:?}", sphere.center)
            )));
        }
        if !sphere.radius.is_finite() || sphere.radius < 0.0 {
            return Err(cull_err!("visibility::ActorData", Error::InvalidActor(
                format!("bounding sphere radius must be finite and >= 0, got {}", sphere.radius)
            )));
        }
        if !self.model_position.is_finite() {
            return Err(cull_err!("visibility::ActorData", Error::InvalidActor(
                format!("model position is not finite: {:?}", self.model_position)
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "actor_tests.rs"]
mod tests;
