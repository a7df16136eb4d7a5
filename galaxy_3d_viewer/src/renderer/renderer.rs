/// Renderer collaborator traits
///
/// The viewer does not render anything itself. A backend implements these
/// traits; the scene façade drives them through handles and names.

use std::sync::{Arc, Mutex};
use slotmap::new_key_type;

use crate::camera::Camera;
use crate::error::Result;
use crate::geometry::Geometry3D;
use crate::material::Material;

// ============================================================================
// Handles
// ============================================================================

new_key_type! {
    /// Opaque handle to a scene owned by a Renderer.
    pub struct SceneHandle;

    /// Opaque handle to a view owned by a Scene.
    ///
    /// Handles stay valid until their own view is removed; a removed
    /// handle is never reused for another view.
    pub struct ViewHandle;
}

// ============================================================================
// Viewport
// ============================================================================

/// Viewport rectangle and depth range, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport at the origin with the full [0, 1] depth range
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width / height, or 1.0 for a degenerate viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// Factory for scenes. Implemented by backend-specific renderers.
pub trait Renderer: Send + Sync {
    /// Create an empty scene
    fn create_scene(&mut self) -> Result<SceneHandle>;

    /// Shared access to a scene, `None` if the handle is unknown
    fn scene(&self, handle: SceneHandle) -> Option<Arc<Mutex<dyn Scene>>>;

    /// Destroy a scene and every view and proxy it holds.
    ///
    /// Returns false if the handle is unknown.
    fn destroy_scene(&mut self, handle: SceneHandle) -> bool;
}

// ============================================================================
// Scene trait
// ============================================================================

/// Renderer-side container of named proxies and views
pub trait Scene: Send + Sync {
    /// Add a view rendering this scene
    fn add_view(&mut self, viewport: Viewport) -> Result<ViewHandle>;

    /// Remove a view. Returns false if the handle is unknown.
    fn remove_view(&mut self, handle: ViewHandle) -> bool;

    /// Shared access to a view, `None` if the handle is unknown
    fn view(&self, handle: ViewHandle) -> Option<Arc<Mutex<dyn View>>>;

    /// Upload a geometry as a named proxy. Proxies start visible.
    fn add_geometry(
        &mut self,
        name: &str,
        geometry: Arc<dyn Geometry3D>,
        material: &Material,
    ) -> Result<()>;

    /// Remove a proxy. Returns false if no proxy has this name.
    fn remove_geometry(&mut self, name: &str) -> bool;

    /// True if a proxy with this name exists
    fn has_geometry(&self, name: &str) -> bool;

    /// Show or hide a proxy. Returns false if no proxy has this name.
    fn show_geometry(&mut self, name: &str, show: bool) -> bool;

    /// Visibility of a proxy, `None` if no proxy has this name
    fn is_geometry_visible(&self, name: &str) -> Option<bool>;

    /// Replace the material of a proxy. Returns false if no proxy has this name.
    fn override_material(&mut self, name: &str, material: &Material) -> bool;

    /// Enable or disable the skybox
    fn show_skybox(&mut self, enable: bool);

    /// Current skybox state
    fn is_skybox_visible(&self) -> bool;
}

// ============================================================================
// View trait
// ============================================================================

/// A viewport with its camera, bound to one scene
pub trait View: Send + Sync {
    fn camera(&self) -> &Camera;

    fn camera_mut(&mut self) -> &mut Camera;

    fn viewport(&self) -> Viewport;

    /// Set the viewport (the camera viewport follows)
    fn set_viewport(&mut self, viewport: Viewport);
}
