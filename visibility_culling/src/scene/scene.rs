/// Scene: actors and reflection probes owned by the renderer.
///
/// Uses SlotMaps for O(1) insert/remove with stable keys. Actors are
/// stored contiguously for cache-friendly iteration by the culling loop.

use slotmap::{new_key_type, SlotMap};
use crate::camera::CameraProbe;
use crate::error::{Error, Result};
use crate::{cull_err, cull_info, cull_trace};
use super::actor::{ActorData, ActorKey};
use super::pass_flags::PassFlags;
use super::visibility::FrameVisibility;

new_key_type! {
    /// Stable key for a reflection probe within a Scene.
    pub struct ProbeKey;
}

/// Actors and probes of one world.
#[derive(Debug, Default)]
pub struct Scene {
    actors: SlotMap<ActorKey, ActorData>,
    probes: SlotMap<ProbeKey, CameraProbe>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            probes: SlotMap::with_key(),
        }
    }

    // ===== ACTORS =====

    /// Add an actor. The key stays valid until this actor is removed.
    pub fn create_actor(&mut self, actor: ActorData) -> ActorKey {
        let key = self.actors.insert(actor);
        cull_trace!("visibility::Scene", "Actor {:?} created", key);
        key
    }

    /// Remove an actor, returning its data. `None` if the key is stale.
    pub fn remove_actor(&mut self, key: ActorKey) -> Option<ActorData> {
        let removed = self.actors.remove(key);
        if removed.is_some() {
            cull_trace!("visibility::Scene", "Actor {:?} removed", key);
        }
        removed
    }

    pub fn actor(&self, key: ActorKey) -> Option<&ActorData> {
        self.actors.get(key)
    }

    pub fn actor_mut(&mut self, key: ActorKey) -> Option<&mut ActorData> {
        self.actors.get_mut(key)
    }

    /// Like [`actor`](Self::actor), reporting a stale key as an error.
    pub fn try_actor(&self, key: ActorKey) -> Result<&ActorData> {
        self.actors.get(key).ok_or_else(|| {
            cull_err!("visibility::Scene", Error::InvalidKey(format!("actor {:?} not in scene", key)))
        })
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Iterate over all actors.
    pub fn actors(&self) -> impl Iterator<Item = (ActorKey, &ActorData)> + '_ {
        self.actors.iter()
    }

    /// Iterate over all actor keys.
    pub fn actor_keys(&self) -> impl Iterator<Item = ActorKey> + '_ {
        self.actors.keys()
    }

    /// Iterate over the actors subscribed to `pass`.
    pub fn actors_in_pass(
        &self,
        pass: PassFlags,
    ) -> impl Iterator<Item = (ActorKey, &ActorData)> + '_ {
        self.actors
            .iter()
            .filter(move |(_, actor)| actor.participates_in(pass))
    }

    /// Advance every actor's orbit by `delta_seconds`.
    pub fn advance_animation(&mut self, delta_seconds: f32) {
        for actor in self.actors.values_mut() {
            actor.advance_rotation(delta_seconds);
        }
    }

    // ===== PROBES =====

    /// Add a reflection probe.
    pub fn add_probe(&mut self, probe: CameraProbe) -> ProbeKey {
        let key = self.probes.insert(probe);
        cull_trace!("visibility::Scene", "Probe {:?} added at {:?}", key, probe.position);
        key
    }

    pub fn remove_probe(&mut self, key: ProbeKey) -> Option<CameraProbe> {
        self.probes.remove(key)
    }

    pub fn probe(&self, key: ProbeKey) -> Option<&CameraProbe> {
        self.probes.get(key)
    }

    pub fn probe_mut(&mut self, key: ProbeKey) -> Option<&mut CameraProbe> {
        self.probes.get_mut(key)
    }

    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Iterate over all probes.
    pub fn probes(&self) -> impl Iterator<Item = (ProbeKey, &CameraProbe)> + '_ {
        self.probes.iter()
    }

    // ===== CULLING =====

    /// Validate every actor and probe. Stops at the first error.
    ///
    /// Meant for load time: the culling loop assumes valid data.
    pub fn validate(&self) -> Result<()> {
        for (_, actor) in self.actors.iter() {
            actor.validate()?;
        }
        for (_, probe) in self.probes.iter() {
            probe.validate()?;
        }
        cull_info!(
            "visibility::Scene",
            "Scene validated: {} actors, {} probes",
            self.actors.len(),
            self.probes.len()
        );
        Ok(())
    }

    /// Write a frame's culling results back into the actors.
    ///
    /// Actors missing from `visibility` (created after culling, or not
    /// subscribed to a pass) end up invisible with zero reflection instances.
    pub fn apply_visibility(&mut self, visibility: &FrameVisibility) {
        for (key, actor) in self.actors.iter_mut() {
            actor.visible_in_final = visibility.visible_in_final(key);
            actor.instance_count_in_reflection = visibility.reflection_instance_count(key);
        }
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
