//! Small helpers shared with the renderer's buffer layout code.

mod align;

pub use align::{align, BUFFER_OFFSET_ALIGN};
