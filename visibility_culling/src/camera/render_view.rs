/// RenderView: result of culling one pass, or one face of a probe.
///
/// Ephemeral: lives for one frame. Contains the matrices the pass was
/// culled with and the keys of the actors that survived.

use glam::Mat4;
use crate::scene::{ActorKey, PassFlags};
use super::camera_probe::CubeFace;

/// Visible actors of one pass. Created by the culling strategies.
#[derive(Debug, Clone)]
pub struct RenderView {
    pass: PassFlags,
    face: Option<CubeFace>,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    visible_actors: Vec<ActorKey>,
}

impl RenderView {
    pub(crate) fn new(
        pass: PassFlags,
        face: Option<CubeFace>,
        view_matrix: Mat4,
        projection_matrix: Mat4,
        visible_actors: Vec<ActorKey>,
    ) -> Self {
        Self {
            pass,
            face,
            view_matrix,
            projection_matrix,
            visible_actors,
        }
    }

    /// Pass this view was culled for
    pub fn pass(&self) -> PassFlags {
        self.pass
    }

    /// Cube face, for probe views
    pub fn face(&self) -> Option<CubeFace> {
        self.face
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Keys of the visible actors, in scene iteration order
    pub fn visible_actors(&self) -> &[ActorKey] {
        &self.visible_actors
    }

    pub fn visible_count(&self) -> usize {
        self.visible_actors.len()
    }

    pub fn contains(&self, key: ActorKey) -> bool {
        self.visible_actors.contains(&key)
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
