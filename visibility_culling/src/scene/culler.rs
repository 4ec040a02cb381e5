/// Pass culling strategies.
///
/// A PassCuller decides which actors subscribed to a pass are visible
/// from that pass's viewpoint. Implementations range from brute-force
/// (return every subscriber) to the sphere/frustum test.

use glam::Mat4;
use crate::camera::{Camera, CameraProbe, CubeFace, FrustumCuller, RenderView};
use super::actor::ActorKey;
use super::pass_flags::PassFlags;
use super::scene::Scene;

/// Everything needed to cull one pass: which pass, the matrices it will
/// be drawn with, and a ready frustum built from them.
#[derive(Debug, Clone, Copy)]
pub struct PassView {
    pub pass: PassFlags,
    pub face: Option<CubeFace>,
    pub view_matrix: Mat4,
    pub projection_matrix: Mat4,
    pub frustum: FrustumCuller,
}

impl PassView {
    /// Final pass seen from the main camera
    pub fn for_camera(camera: &Camera) -> Self {
        let view_matrix = camera.view_matrix();
        Self {
            pass: PassFlags::FINAL,
            face: None,
            view_matrix,
            projection_matrix: camera.projection_matrix(),
            frustum: FrustumCuller::from_camera(&view_matrix, camera),
        }
    }

    /// Reflection pass seen from one face of a probe
    pub fn for_probe_face(probe: &CameraProbe, face: CubeFace) -> Self {
        let view_matrix = probe.view_matrix_for_face(face);
        let mut frustum = FrustumCuller::new();
        frustum.reset_from_probe(&view_matrix, probe);
        Self {
            pass: PassFlags::REFLECTION,
            face: Some(face),
            view_matrix,
            projection_matrix: probe.projection_matrix(),
            frustum,
        }
    }
}

/// Strategy for determining the visible actors of one pass.
///
/// Takes `&self` so a single strategy can cull several faces or passes
/// concurrently; each call only reads the scene and returns its own view.
pub trait PassCuller: Send + Sync {
    /// Cull the actors subscribed to `view.pass`.
    fn cull(&self, scene: &Scene, view: &PassView) -> RenderView;
}

/// Brute-force culler: returns every subscribed actor (no frustum test).
///
/// Baseline for comparison, or for passes that must draw everything.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl PassCuller for BruteForceCuller {
    fn cull(&self, scene: &Scene, view: &PassView) -> RenderView {
        let visible: Vec<ActorKey> = scene
            .actors_in_pass(view.pass)
            .map(|(key, _)| key)
            .collect();
        RenderView::new(view.pass, view.face, view.view_matrix, view.projection_matrix, visible)
    }
}

/// Sphere culler: tests each subscribed actor's bounding sphere
/// against the pass frustum.
#[derive(Debug, Default)]
pub struct SphereCuller;

impl SphereCuller {
    pub fn new() -> Self {
        Self
    }
}

impl PassCuller for SphereCuller {
    fn cull(&self, scene: &Scene, view: &PassView) -> RenderView {
        let visible: Vec<ActorKey> = scene
            .actors_in_pass(view.pass)
            .filter(|(_, actor)| {
                view.frustum.intersects(actor.model_position, &actor.bounding_sphere)
            })
            .map(|(key, _)| key)
            .collect();
        RenderView::new(view.pass, view.face, view.view_matrix, view.projection_matrix, visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
