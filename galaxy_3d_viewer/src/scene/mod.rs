//! Scene module
//!
//! The scene façade (`ViewerScene`) and its registry types.

mod config;
mod geometry_entry;
mod viewer_scene;

pub use config::SceneConfig;
pub use geometry_entry::{GeometryEntry, LOD};
pub use viewer_scene::{ViewerScene, AXIS_OBJECT_NAME, FAST_SUFFIX};
