/*!
# Visibility Culling

Per-pass visibility culling for a renderer with a main camera and cubemap
reflection probes.

Given a camera or a reflection probe, this crate decides for each render pass
which scene actors must be submitted for drawing. Draw submission itself,
shading and GPU resource management live in the renderer that consumes it.

## Architecture

- **Camera**: perspective viewpoint (left-handed look-at + perspective)
- **CameraProbe**: six-face cubemap viewpoint with a shared 90° projection
- **FrustumCuller**: plane normals derived from a view matrix, sphere tests
- **ActorData / PassFlags**: per-actor bounding sphere and pass subscription
- **Scene**: renderer-owned actor and probe storage with stable keys
- **PassCuller**: culling strategies producing per-pass RenderViews
*/

// Internal modules
mod error;
mod log_hub;
pub mod log;
pub mod camera;
pub mod scene;
pub mod utils;

// Main namespace module
pub mod visibility {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logging hub
    pub use crate::log_hub::Log;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Utilities
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
