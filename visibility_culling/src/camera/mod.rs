//! Camera module: viewpoints, frustum culling helper, and render views.
//!
//! Cameras and probes are plain records owned by the renderer. The
//! FrustumCuller is rebuilt from them for every pass or cube face.

mod camera;
mod camera_probe;
mod frustum;
mod render_view;
mod viewport_params;

pub use camera::{Camera, CAMERA_UP};
pub use camera_probe::{CameraProbe, CubeFace, CUBE_FACE_COUNT};
pub use frustum::FrustumCuller;
pub use render_view::RenderView;
pub use viewport_params::ViewportParams;
