//! Scene module
//!
//! Provides actors, pass subscription flags, the scene container, and
//! the culling strategies and frame loop that feed each pass's draw list.

mod actor;
mod pass_flags;
mod scene;
mod culler;
mod visibility;

pub use actor::{ActorData, ActorKey, BoundingSphere, MeshHandle, PipelineHandle};
pub use pass_flags::PassFlags;
pub use scene::{Scene, ProbeKey};
pub use culler::{PassCuller, PassView, BruteForceCuller, SphereCuller};
pub use visibility::{
    CullingConfig, FrameVisibility, ProbeVisibility, cull_frame, cull_probe,
};
