/// Scene façade configuration

use crate::renderer::Viewport;
use super::geometry_entry::LOD;

/// Configuration for a `ViewerScene`
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// LOD mode right after construction
    pub initial_lod: LOD,
    /// Viewport of the default view and of views made by `create_view`
    pub default_viewport: Viewport,
    /// Geometries with more points than this get a fast copy (when requested)
    pub fast_copy_min_points: usize,
    /// Approximate point count of a fast copy
    pub fast_copy_target_points: usize,
    /// Skybox state right after construction
    pub show_skybox: bool,
    /// Axes state right after construction
    pub show_axes: bool,
    /// Shortest axis gizmo length, in scene units
    pub axis_min_length: f32,
    /// Axis gizmo length as a fraction of the bounding box's largest extent
    pub axis_length_fraction: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_lod: LOD::HighDetail,
            default_viewport: Viewport::default(),
            fast_copy_min_points: 6_000_000,
            fast_copy_target_points: 3_000_000,
            show_skybox: false,
            show_axes: false,
            axis_min_length: 0.1,
            axis_length_fraction: 0.2,
        }
    }
}
