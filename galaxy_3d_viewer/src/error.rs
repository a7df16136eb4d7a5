//! Error types for the Galaxy3D viewer
//!
//! This module defines the error type shared by the scene façade and the
//! renderer collaborators, plus the `engine_err!` / `engine_bail!` helpers
//! that log an error before handing it back to the caller.

use std::fmt;

/// Result type for Galaxy3D viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D viewer errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Renderer backend failure (scene creation, proxy upload, etc.)
    BackendError(String),

    /// Invalid resource (geometry, material, reserved or empty name)
    InvalidResource(String),

    /// Initialization failed (scene, default view)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::ViewerScene", "Scene {:?} not found", handle);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Engine::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the current function
///
/// # Example
///
/// ```ignore
/// engine_bail!("galaxy3d::MockScene", "Geometry '{}' is empty", name);
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
