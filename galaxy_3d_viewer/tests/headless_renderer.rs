//! Headless renderer for integration tests
//!
//! Implements the public collaborator traits the way a host backend would,
//! keeping only what a draw pass needs: named proxies, their visibility and
//! their point counts.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use galaxy_3d_viewer::galaxy3d::{Error, Result, Renderer, Scene, View};
use galaxy_3d_viewer::galaxy3d::camera::Camera;
use galaxy_3d_viewer::galaxy3d::geometry::Geometry3D;
use galaxy_3d_viewer::galaxy3d::material::Material;
use galaxy_3d_viewer::galaxy3d::render::{SceneHandle, ViewHandle, Viewport};
use slotmap::SlotMap;

// ============================================================================
// VIEW
// ============================================================================

pub struct HeadlessView {
    camera: Camera,
}

impl View for HeadlessView {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn viewport(&self) -> Viewport {
        *self.camera.viewport()
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.camera.set_viewport(viewport);
    }
}

// ============================================================================
// SCENE
// ============================================================================

struct Proxy {
    geometry: Arc<dyn Geometry3D>,
    shader: String,
    visible: bool,
}

#[derive(Default)]
pub struct HeadlessScene {
    views: SlotMap<ViewHandle, Arc<Mutex<HeadlessView>>>,
    proxies: HashMap<String, Proxy>,
    skybox: bool,
}

impl HeadlessScene {
    /// Points a draw pass would submit
    pub fn drawn_point_count(&self) -> usize {
        self.proxies
            .values()
            .filter(|proxy| proxy.visible)
            .map(|proxy| proxy.geometry.point_count())
            .sum()
    }

    /// Sorted names of the proxies a draw pass would submit
    pub fn drawn_proxies(&self) -> Vec<String> {
        let mut names: Vec<String> = self.proxies
            .iter()
            .filter(|(_, proxy)| proxy.visible)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    pub fn shader_of(&self, name: &str) -> Option<&str> {
        self.proxies.get(name).map(|proxy| proxy.shader.as_str())
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}

impl Scene for HeadlessScene {
    fn add_view(&mut self, viewport: Viewport) -> Result<ViewHandle> {
        let view = HeadlessView { camera: Camera::with_viewport(viewport) };
        Ok(self.views.insert(Arc::new(Mutex::new(view))))
    }

    fn remove_view(&mut self, handle: ViewHandle) -> bool {
        self.views.remove(handle).is_some()
    }

    fn view(&self, handle: ViewHandle) -> Option<Arc<Mutex<dyn View>>> {
        self.views.get(handle).map(|view| Arc::clone(view) as Arc<Mutex<dyn View>>)
    }

    fn add_geometry(
        &mut self,
        name: &str,
        geometry: Arc<dyn Geometry3D>,
        material: &Material,
    ) -> Result<()> {
        if self.proxies.contains_key(name) {
            return Err(Error::InvalidResource(format!("Proxy '{}' already exists", name)));
        }
        self.proxies.insert(name.to_string(), Proxy {
            geometry,
            shader: material.shader().to_string(),
            visible: true,
        });
        Ok(())
    }

    fn remove_geometry(&mut self, name: &str) -> bool {
        self.proxies.remove(name).is_some()
    }

    fn has_geometry(&self, name: &str) -> bool {
        self.proxies.contains_key(name)
    }

    fn show_geometry(&mut self, name: &str, show: bool) -> bool {
        self.proxies.get_mut(name).map(|proxy| proxy.visible = show).is_some()
    }

    fn is_geometry_visible(&self, name: &str) -> Option<bool> {
        self.proxies.get(name).map(|proxy| proxy.visible)
    }

    fn override_material(&mut self, name: &str, material: &Material) -> bool {
        self.proxies
            .get_mut(name)
            .map(|proxy| proxy.shader = material.shader().to_string())
            .is_some()
    }

    fn show_skybox(&mut self, enable: bool) {
        self.skybox = enable;
    }

    fn is_skybox_visible(&self) -> bool {
        self.skybox
    }
}

// ============================================================================
// RENDERER
// ============================================================================

#[derive(Default)]
pub struct HeadlessRenderer {
    scenes: SlotMap<SceneHandle, Arc<Mutex<HeadlessScene>>>,
}

impl HeadlessRenderer {
    pub fn headless_scene(&self, handle: SceneHandle) -> Option<Arc<Mutex<HeadlessScene>>> {
        self.scenes.get(handle).cloned()
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

impl Renderer for HeadlessRenderer {
    fn create_scene(&mut self) -> Result<SceneHandle> {
        Ok(self.scenes.insert(Arc::new(Mutex::new(HeadlessScene::default()))))
    }

    fn scene(&self, handle: SceneHandle) -> Option<Arc<Mutex<dyn Scene>>> {
        self.scenes.get(handle).map(|scene| Arc::clone(scene) as Arc<Mutex<dyn Scene>>)
    }

    fn destroy_scene(&mut self, handle: SceneHandle) -> bool {
        self.scenes.remove(handle).is_some()
    }
}

/// Shared renderer, typed for inspection and as the trait object the viewer takes
pub fn create_renderer() -> (Arc<Mutex<HeadlessRenderer>>, Arc<Mutex<dyn Renderer>>) {
    let renderer = Arc::new(Mutex::new(HeadlessRenderer::default()));
    let dyn_renderer: Arc<Mutex<dyn Renderer>> = renderer.clone();
    (renderer, dyn_renderer)
}
