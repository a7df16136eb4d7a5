/// Mock Renderer for unit tests (no GPU required)
///
/// Records every proxy, material and visibility change so tests can check
/// what the scene façade asked the renderer to do.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::camera::Camera;
use crate::error::Result;
use crate::engine_bail;
use crate::geometry::Geometry3D;
use crate::material::Material;
use crate::renderer::{Renderer, Scene, SceneHandle, View, ViewHandle, Viewport};

// ============================================================================
// Mock View
// ============================================================================

#[derive(Debug)]
pub struct MockView {
    pub camera: Camera,
}

impl MockView {
    pub fn new(viewport: Viewport) -> Self {
        Self { camera: Camera::with_viewport(viewport) }
    }
}

impl View for MockView {
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
// Mock Scene
// ============================================================================

/// A proxy as seen by the renderer
#[derive(Debug, Clone)]
pub struct MockProxy {
    pub geometry: Arc<dyn Geometry3D>,
    pub material: Material,
    pub visible: bool,
}

#[derive(Default)]
pub struct MockScene {
    pub views: SlotMap<ViewHandle, Arc<Mutex<MockView>>>,
    pub proxies: FxHashMap<String, MockProxy>,
    pub skybox: bool,
    /// Names passed to add_geometry, in call order
    pub added: Vec<String>,
    /// Names passed to remove_geometry (successful calls only), in call order
    pub removed: Vec<String>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proxy(&self, name: &str) -> Option<&MockProxy> {
        self.proxies.get(name)
    }

    /// Sorted names of visible proxies
    pub fn visible_proxies(&self) -> Vec<String> {
        let mut names: Vec<String> = self.proxies
            .iter()
            .filter(|(_, proxy)| proxy.visible)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Sorted names of all proxies
    pub fn proxy_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.proxies.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Scene for MockScene {
    fn add_view(&mut self, viewport: Viewport) -> Result<ViewHandle> {
        Ok(self.views.insert(Arc::new(Mutex::new(MockView::new(viewport)))))
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
            engine_bail!("galaxy3d::MockScene", "Proxy '{}' already exists", name);
        }
        if geometry.is_empty() {
            engine_bail!("galaxy3d::MockScene", "Proxy '{}' has no points", name);
        }
        self.added.push(name.to_string());
        self.proxies.insert(name.to_string(), MockProxy {
            geometry,
            material: material.clone(),
            visible: true,
        });
        Ok(())
    }

    fn remove_geometry(&mut self, name: &str) -> bool {
        let removed = self.proxies.remove(name).is_some();
        if removed {
            self.removed.push(name.to_string());
        }
        removed
    }

    fn has_geometry(&self, name: &str) -> bool {
        self.proxies.contains_key(name)
    }

    fn show_geometry(&mut self, name: &str, show: bool) -> bool {
        match self.proxies.get_mut(name) {
            Some(proxy) => {
                proxy.visible = show;
                true
            }
            None => false,
        }
    }

    fn is_geometry_visible(&self, name: &str) -> Option<bool> {
        self.proxies.get(name).map(|proxy| proxy.visible)
    }

    fn override_material(&mut self, name: &str, material: &Material) -> bool {
        match self.proxies.get_mut(name) {
            Some(proxy) => {
                proxy.material = material.clone();
                true
            }
            None => false,
        }
    }

    fn show_skybox(&mut self, enable: bool) {
        self.skybox = enable;
    }

    fn is_skybox_visible(&self) -> bool {
        self.skybox
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

#[derive(Default)]
pub struct MockRenderer {
    pub scenes: SlotMap<SceneHandle, Arc<Mutex<MockScene>>>,
    /// Handles passed to destroy_scene (successful calls only)
    pub destroyed_scenes: Vec<SceneHandle>,
    /// When set, create_scene fails
    pub fail_create_scene: bool,
}

impl MockRenderer {
    /// Create a new mock renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Concrete access to a scene for assertions
    pub fn mock_scene(&self, handle: SceneHandle) -> Option<Arc<Mutex<MockScene>>> {
        self.scenes.get(handle).cloned()
    }
}

impl Renderer for MockRenderer {
    fn create_scene(&mut self) -> Result<SceneHandle> {
        if self.fail_create_scene {
            engine_bail!("galaxy3d::MockRenderer", "Scene creation disabled");
        }
        Ok(self.scenes.insert(Arc::new(Mutex::new(MockScene::new()))))
    }

    fn scene(&self, handle: SceneHandle) -> Option<Arc<Mutex<dyn Scene>>> {
        self.scenes.get(handle).map(|scene| Arc::clone(scene) as Arc<Mutex<dyn Scene>>)
    }

    fn destroy_scene(&mut self, handle: SceneHandle) -> bool {
        let destroyed = self.scenes.remove(handle).is_some();
        if destroyed {
            self.destroyed_scenes.push(handle);
        }
        destroyed
    }
}
