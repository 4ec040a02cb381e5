/// Frame culling loop.
///
/// Culls the final pass from the main camera and the reflection pass
/// from every face of every probe, then condenses the per-face results
/// into the per-actor values the draw code consumes: how many probe
/// faces each actor is instanced into, and whether the camera sees it.

use rayon::prelude::*;
use slotmap::SecondaryMap;
use crate::camera::{Camera, CameraProbe, CubeFace, RenderView};
use crate::cull_debug;
use super::actor::ActorKey;
use super::culler::{PassCuller, PassView};
use super::scene::{ProbeKey, Scene};

/// Culling loop configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CullingConfig {
    /// Cull the six faces of a probe on the rayon thread pool.
    /// Results are identical to the sequential path.
    pub parallel_faces: bool,
    /// Log per-frame visibility counts at Debug severity
    pub log_statistics: bool,
}

/// Reflection-pass results for one probe.
#[derive(Debug, Clone)]
pub struct ProbeVisibility {
    probe: ProbeKey,
    /// One view per face, in layer order
    faces: Vec<RenderView>,
    /// Bit `i` set: actor visible in face `i`
    face_masks: SecondaryMap<ActorKey, u8>,
}

impl ProbeVisibility {
    fn new(probe: ProbeKey, faces: Vec<RenderView>) -> Self {
        let mut face_masks = SecondaryMap::new();
        for view in &faces {
            let Some(face) = view.face() else { continue };
            for &key in view.visible_actors() {
                match face_masks.get_mut(key) {
                    Some(mask) => *mask |= face.mask(),
                    None => {
                        face_masks.insert(key, face.mask());
                    }
                }
            }
        }
        Self {
            probe,
            faces,
            face_masks,
        }
    }

    pub fn probe(&self) -> ProbeKey {
        self.probe
    }

    /// Culling result of one face
    pub fn face_view(&self, face: CubeFace) -> &RenderView {
        &self.faces[face.index()]
    }

    /// All face views, in layer order
    pub fn face_views(&self) -> &[RenderView] {
        &self.faces
    }

    /// Faces that see `key`, as a bitmask over [`CubeFace::mask`]
    pub fn face_mask(&self, key: ActorKey) -> u8 {
        self.face_masks.get(key).copied().unwrap_or(0)
    }

    /// Faces that see `key`, in layer order (one draw instance each)
    pub fn faces_of(&self, key: ActorKey) -> impl Iterator<Item = CubeFace> {
        let mask = self.face_mask(key);
        CubeFace::ALL.into_iter().filter(move |face| mask & face.mask() != 0)
    }

    /// Number of faces that see `key`
    pub fn instance_count(&self, key: ActorKey) -> u8 {
        self.face_mask(key).count_ones() as u8
    }
}

/// Culling results of one frame. Ephemeral, applied to the scene with
/// [`Scene::apply_visibility`].
#[derive(Debug, Clone)]
pub struct FrameVisibility {
    final_view: RenderView,
    probes: Vec<ProbeVisibility>,
    final_visible: SecondaryMap<ActorKey, ()>,
}

impl FrameVisibility {
    fn new(final_view: RenderView, probes: Vec<ProbeVisibility>) -> Self {
        let mut final_visible = SecondaryMap::new();
        for &key in final_view.visible_actors() {
            final_visible.insert(key, ());
        }
        Self {
            final_view,
            probes,
            final_visible,
        }
    }

    /// Final-pass view (main camera)
    pub fn final_view(&self) -> &RenderView {
        &self.final_view
    }

    /// Reflection results, one entry per probe
    pub fn probes(&self) -> &[ProbeVisibility] {
        &self.probes
    }

    pub fn probe(&self, key: ProbeKey) -> Option<&ProbeVisibility> {
        self.probes.iter().find(|probe| probe.probe() == key)
    }

    pub fn visible_in_final(&self, key: ActorKey) -> bool {
        self.final_visible.contains_key(key)
    }

    /// Probe faces `key` must be instanced into, summed over all probes.
    pub fn reflection_instance_count(&self, key: ActorKey) -> u8 {
        self.probes
            .iter()
            .fold(0u8, |count, probe| count.saturating_add(probe.instance_count(key)))
    }
}

/// Cull the six faces of `probe`.
pub fn cull_probe(
    scene: &Scene,
    probe_key: ProbeKey,
    probe: &CameraProbe,
    culler: &dyn PassCuller,
    config: &CullingConfig,
) -> ProbeVisibility {
    let cull_face = |face: &CubeFace| culler.cull(scene, &PassView::for_probe_face(probe, *face));

    let faces: Vec<RenderView> = if config.parallel_faces {
        CubeFace::ALL.par_iter().map(cull_face).collect()
    } else {
        CubeFace::ALL.iter().map(cull_face).collect()
    };

    ProbeVisibility::new(probe_key, faces)
}

/// Cull one frame: the final pass from `camera`, the reflection pass
/// from every probe of the scene.
pub fn cull_frame(
    scene: &Scene,
    camera: &Camera,
    culler: &dyn PassCuller,
    config: &CullingConfig,
) -> FrameVisibility {
    let final_view = culler.cull(scene, &PassView::for_camera(camera));

    let probes: Vec<ProbeVisibility> = scene
        .probes()
        .map(|(key, probe)| cull_probe(scene, key, probe, culler, config))
        .collect();

    let visibility = FrameVisibility::new(final_view, probes);

    if config.log_statistics {
        let reflection_instances: usize = scene
            .actor_keys()
            .map(|key| visibility.reflection_instance_count(key) as usize)
            .sum();
        cull_debug!(
            "visibility::cull_frame",
            "{}/{} actors visible in final pass, {} reflection instances over {} probes",
            visibility.final_view().visible_count(),
            scene.actor_count(),
            reflection_instances,
            visibility.probes().len()
        );
    }

    visibility
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
