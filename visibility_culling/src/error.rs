//! Error types for the visibility culling crate
//!
//! The culling math itself never fails: its preconditions are caller
//! obligations. These errors are produced by the validation helpers
//! and the fallible conversions at the crate boundary.

use std::fmt;

/// Result type for visibility culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Visibility culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera or probe parameters that would yield meaningless matrices
    InvalidCamera(String),

    /// Cube face index outside 0..6
    InvalidFaceIndex(usize),

    /// Actor data that cannot be culled (negative or non-finite radius, ...)
    InvalidActor(String),

    /// Stale or unknown scene key
    InvalidKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCamera(msg) => write!(f, "Invalid camera: {}", msg),
            Error::InvalidFaceIndex(index) => {
                write!(f, "Invalid cube face index: {} (expected 0..6)", index)
            }
            Error::InvalidActor(msg) => write!(f, "Invalid actor: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line information and evaluate to it.
///
/// ```ignore
/// return Err(cull_err!("visibility::Camera", Error::InvalidCamera("near <= 0".into())));
/// ```
#[macro_export]
macro_rules! cull_err {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::cull_error!($source, "{}", err);
        err
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
