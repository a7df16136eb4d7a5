//! Camera module: low-level camera data.
//!
//! The camera is a passive data container owned by a `View`. The scene
//! façade reads and replaces it; the renderer consumes it.

mod camera;

pub use camera::Camera;
