/// ViewerScene: scene façade for an interactive viewer.
///
/// Owns one renderer scene and its default view, keeps a name-keyed registry
/// of geometries, switches every entry between its full-detail and fast
/// proxies, and tracks the union of all registered bounds.
///
/// Single-threaded by intent: the renderer and scene are shared behind
/// `Arc<Mutex<..>>` only so the host can reach them too. Each call locks
/// for its own duration.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::geometry::{AABB, Geometry3D, TriangleMesh};
use crate::material::Material;
use crate::renderer::{Renderer, Scene, SceneHandle, View, ViewHandle};
use crate::{engine_debug, engine_error, engine_info, engine_warn};
use super::config::SceneConfig;
use super::geometry_entry::{FastCopy, GeometryEntry, LOD};

const SOURCE: &str = "galaxy3d::ViewerScene";

/// Suffix appended to a geometry name to name its fast proxy
pub const FAST_SUFFIX: &str = "__fast__";

/// Proxy name of the axis gizmo (never part of the registry)
pub const AXIS_OBJECT_NAME: &str = "__axis__";

/// Lock a shared collaborator, recovering the guard if a previous holder panicked
fn lock<T: ?Sized>(mutex: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scene façade: geometry registry, LOD switching and bounds over a renderer scene.
pub struct ViewerScene {
    renderer: Arc<Mutex<dyn Renderer>>,
    scene_handle: SceneHandle,
    scene: Arc<Mutex<dyn Scene>>,
    default_view: ViewHandle,
    config: SceneConfig,
    lod: LOD,
    geometries: BTreeMap<String, GeometryEntry>,
    bounds: AABB,
    axes_visible: bool,
}

impl ViewerScene {
    /// Create a scene and its default view on `renderer`
    ///
    /// # Errors
    ///
    /// Propagates renderer failures. Returns `Error::InitializationFailed`
    /// if the renderer does not expose the scene it just created.
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>, config: SceneConfig) -> Result<Self> {
        let (scene_handle, scene) = {
            let mut renderer_lock = lock(&renderer);
            let handle = renderer_lock.create_scene()?;
            match renderer_lock.scene(handle) {
                Some(scene) => (handle, scene),
                None => {
                    renderer_lock.destroy_scene(handle);
                    return Err(Self::log_and_return_error(Error::InitializationFailed(
                        "Renderer did not expose the created scene".to_string(),
                    )));
                }
            }
        };

        let view_result = lock(&scene).add_view(config.default_viewport);
        let default_view = match view_result {
            Ok(view) => view,
            Err(err) => {
                lock(&renderer).destroy_scene(scene_handle);
                return Err(err);
            }
        };

        lock(&scene).show_skybox(config.show_skybox);

        let mut viewer_scene = Self {
            renderer,
            scene_handle,
            scene,
            default_view,
            lod: config.initial_lod,
            config,
            geometries: BTreeMap::new(),
            bounds: AABB::empty(),
            axes_visible: false,
        };
        if viewer_scene.config.show_axes {
            viewer_scene.show_axes(true);
        }

        engine_info!(SOURCE, "Scene {:?} created with default view {:?}", scene_handle, default_view);
        Ok(viewer_scene)
    }

    /// Log an error before returning it
    fn log_and_return_error(error: Error) -> Error {
        engine_error!(SOURCE, "{}", error);
        error
    }

    // ===== VIEWS =====

    /// Create an additional view of this scene
    pub fn create_view(&mut self) -> Result<ViewHandle> {
        let handle = lock(&self.scene).add_view(self.config.default_viewport)?;
        engine_debug!(SOURCE, "Created view {:?}", handle);
        Ok(handle)
    }

    /// Destroy a view made by `create_view`.
    ///
    /// Returns false for unknown or already destroyed handles and for the
    /// default view, which lives as long as the scene.
    pub fn destroy_view(&mut self, handle: ViewHandle) -> bool {
        if handle == self.default_view {
            engine_warn!(SOURCE, "Refusing to destroy the default view {:?}", handle);
            return false;
        }
        if lock(&self.scene).remove_view(handle) {
            engine_debug!(SOURCE, "Destroyed view {:?}", handle);
            true
        } else {
            engine_warn!(SOURCE, "Cannot destroy unknown view {:?}", handle);
            false
        }
    }

    /// Shared access to a view, `None` if the handle is unknown
    pub fn view(&self, handle: ViewHandle) -> Option<Arc<Mutex<dyn View>>> {
        lock(&self.scene).view(handle)
    }

    /// Handle of the view created with the scene
    pub fn default_view(&self) -> ViewHandle {
        self.default_view
    }

    // ===== DISPLAY TOGGLES =====

    pub fn show_skybox(&mut self, enable: bool) {
        lock(&self.scene).show_skybox(enable);
    }

    /// Show or hide the axis gizmo.
    ///
    /// The gizmo is built on first use, sized to the current bounding box,
    /// and rebuilt whenever the bounding box changes.
    pub fn show_axes(&mut self, enable: bool) {
        self.axes_visible = enable;
        let scene = Arc::clone(&self.scene);
        let mut scene = lock(&scene);
        if enable && !scene.has_geometry(AXIS_OBJECT_NAME) {
            self.build_axes(&mut *scene);
        }
        scene.show_geometry(AXIS_OBJECT_NAME, enable);
    }

    pub fn axes_visible(&self) -> bool {
        self.axes_visible
    }

    fn build_axes(&self, scene: &mut dyn Scene) {
        let length = (self.config.axis_length_fraction * self.bounds.max_extent())
            .max(self.config.axis_min_length);
        let origin = if self.bounds.is_empty() { Vec3::ZERO } else { self.bounds.min };
        let axes: Arc<dyn Geometry3D> = Arc::new(TriangleMesh::create_coordinate_frame(length, origin));

        scene.remove_geometry(AXIS_OBJECT_NAME);
        match scene.add_geometry(AXIS_OBJECT_NAME, axes, &Material::default_unlit()) {
            Ok(()) => {
                scene.show_geometry(AXIS_OBJECT_NAME, self.axes_visible);
            }
            Err(err) => engine_warn!(SOURCE, "Axis gizmo unavailable: {}", err),
        }
    }

    /// Resize an existing gizmo after a bounds change
    fn refresh_axes(&self, scene: &mut dyn Scene) {
        if scene.has_geometry(AXIS_OBJECT_NAME) {
            self.build_axes(scene);
        }
    }

    // ===== GEOMETRY =====

    /// Remove every geometry and reset the bounding box
    pub fn clear_geometry(&mut self) {
        let scene = Arc::clone(&self.scene);
        let mut scene = lock(&scene);
        for entry in self.geometries.values() {
            Self::remove_proxies(&mut *scene, entry);
        }
        let count = self.geometries.len();
        self.geometries.clear();
        self.bounds = AABB::empty();
        self.refresh_axes(&mut *scene);
        engine_debug!(SOURCE, "Cleared {} geometries", count);
    }

    /// Register `geometry` under `name`, replacing any entry with that name.
    ///
    /// With `add_fast_copy`, geometries above `fast_copy_min_points` that
    /// support downsampling also get a fast proxy named `{name}__fast__`.
    /// The new entry is visible.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` for an empty or reserved name. Renderer
    /// failures while adding the full proxy are propagated, and an entry
    /// being replaced is put back as it was. A failed fast proxy only drops
    /// the fast copy.
    pub fn add_geometry(
        &mut self,
        name: &str,
        geometry: Arc<dyn Geometry3D>,
        material: &Material,
        add_fast_copy: bool,
    ) -> Result<()> {
        Self::validate_name(name)?;

        let scene = Arc::clone(&self.scene);
        let mut scene = lock(&scene);

        let previous = self.geometries.remove(name);
        if let Some(previous) = &previous {
            engine_debug!(SOURCE, "Replacing geometry '{}'", name);
            Self::remove_proxies(&mut *scene, previous);
        }

        if let Err(err) = scene.add_geometry(name, Arc::clone(&geometry), material) {
            if let Some(previous) = previous {
                self.restore_entry(&mut *scene, previous);
            }
            return Err(err);
        }
        if previous.is_some() {
            self.recompute_bounds();
        }

        let fast = if add_fast_copy {
            self.add_fast_proxy(&mut *scene, name, &geometry, material)
        } else {
            None
        };

        let entry = GeometryEntry::new(name, fast, geometry, material.clone());
        self.bounds.merge(entry.bounds());
        Self::apply_lod(&mut *scene, &entry, self.lod);
        engine_debug!(
            SOURCE,
            "Added geometry '{}' ({} points, fast copy: {})",
            name,
            entry.geometry().point_count(),
            entry.fast_name().is_some()
        );
        self.geometries.insert(name.to_string(), entry);
        self.refresh_axes(&mut *scene);
        Ok(())
    }

    /// Remove a geometry and its fast proxy. Returns false if `name` is unknown.
    pub fn remove_geometry(&mut self, name: &str) -> bool {
        let Some(entry) = self.geometries.remove(name) else {
            engine_warn!(SOURCE, "Cannot remove unknown geometry '{}'", name);
            return false;
        };

        let scene = Arc::clone(&self.scene);
        let mut scene = lock(&scene);
        Self::remove_proxies(&mut *scene, &entry);
        self.recompute_bounds();
        self.refresh_axes(&mut *scene);
        engine_debug!(SOURCE, "Removed geometry '{}'", name);
        true
    }

    /// Show or hide a geometry. Returns false if `name` is unknown.
    pub fn show_geometry(&mut self, name: &str, show: bool) -> bool {
        let lod = self.lod;
        let Some(entry) = self.geometries.get_mut(name) else {
            engine_warn!(SOURCE, "Cannot show/hide unknown geometry '{}'", name);
            return false;
        };
        entry.set_visible(show);
        Self::apply_lod(&mut *lock(&self.scene), entry, lod);
        true
    }

    /// Apply `material` to every registered proxy, full and fast
    pub fn update_material(&mut self, material: &Material) {
        let mut scene = lock(&self.scene);
        for entry in self.geometries.values_mut() {
            entry.set_material(material);
            scene.override_material(entry.name(), material);
            if let Some(fast_name) = entry.fast_name() {
                scene.override_material(fast_name, material);
            }
        }
    }

    pub fn has_geometry(&self, name: &str) -> bool {
        self.geometries.contains_key(name)
    }

    /// Registered names in ascending order
    pub fn geometry_names(&self) -> Vec<&str> {
        self.geometries.keys().map(String::as_str).collect()
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn geometry_entry(&self, name: &str) -> Option<&GeometryEntry> {
        self.geometries.get(name)
    }

    /// Visibility flag of an entry, `None` if `name` is unknown
    pub fn is_geometry_visible(&self, name: &str) -> Option<bool> {
        self.geometries.get(name).map(GeometryEntry::is_visible)
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Self::log_and_return_error(Error::InvalidResource(
                "Geometry name is empty".to_string(),
            )));
        }
        if name == AXIS_OBJECT_NAME || name.ends_with(FAST_SUFFIX) {
            return Err(Self::log_and_return_error(Error::InvalidResource(format!(
                "Geometry name '{}' is reserved",
                name
            ))));
        }
        Ok(())
    }

    fn add_fast_proxy(
        &self,
        scene: &mut dyn Scene,
        name: &str,
        geometry: &Arc<dyn Geometry3D>,
        material: &Material,
    ) -> Option<FastCopy> {
        let point_count = geometry.point_count();
        if point_count <= self.config.fast_copy_min_points {
            return None;
        }
        let target = self.config.fast_copy_target_points.max(1);
        let every_k_points = point_count.div_ceil(target).max(2);
        let fast = geometry.uniform_downsample(every_k_points)?;

        let fast_name = format!("{}{}", name, FAST_SUFFIX);
        match scene.add_geometry(&fast_name, Arc::clone(&fast), material) {
            Ok(()) => Some(FastCopy { name: fast_name, geometry: fast }),
            Err(err) => {
                engine_warn!(SOURCE, "Fast copy of '{}' dropped: {}", name, err);
                None
            }
        }
    }

    fn remove_proxies(scene: &mut dyn Scene, entry: &GeometryEntry) {
        scene.remove_geometry(entry.name());
        if let Some(fast_name) = entry.fast_name() {
            scene.remove_geometry(fast_name);
        }
    }

    /// Upload the proxies of an entry taken out by a failed replacement and register it again
    fn restore_entry(&mut self, scene: &mut dyn Scene, mut entry: GeometryEntry) {
        let material = entry.material().clone();
        if let Err(err) = scene.add_geometry(entry.name(), Arc::clone(entry.geometry()), &material) {
            engine_warn!(SOURCE, "Geometry '{}' lost while restoring it: {}", entry.name(), err);
            self.recompute_bounds();
            self.refresh_axes(scene);
            return;
        }
        if let Some(fast) = entry.fast_copy().cloned() {
            if let Err(err) = scene.add_geometry(&fast.name, fast.geometry, &material) {
                engine_warn!(SOURCE, "Fast copy of '{}' dropped while restoring it: {}", entry.name(), err);
                entry.drop_fast_copy();
            }
        }
        Self::apply_lod(scene, &entry, self.lod);
        self.geometries.insert(entry.name().to_string(), entry);
    }

    fn recompute_bounds(&mut self) {
        self.bounds = self.geometries
            .values()
            .fold(AABB::empty(), |acc, entry| acc.merged(entry.bounds()));
    }

    // ===== LOD =====

    /// Switch every entry to the proxies of `lod`. Setting the current mode does nothing.
    pub fn set_lod(&mut self, lod: LOD) {
        if lod == self.lod {
            return;
        }
        self.lod = lod;
        let mut scene = lock(&self.scene);
        for entry in self.geometries.values() {
            Self::apply_lod(&mut *scene, entry, lod);
        }
        engine_debug!(SOURCE, "LOD set to {:?}", lod);
    }

    pub fn lod(&self) -> LOD {
        self.lod
    }

    /// Show the proxy matching `lod`; entries without a fast copy always use the full proxy
    fn apply_lod(scene: &mut dyn Scene, entry: &GeometryEntry, lod: LOD) {
        let visible = entry.is_visible();
        match entry.fast_name() {
            Some(fast_name) => {
                scene.show_geometry(entry.name(), lod == LOD::HighDetail && visible);
                scene.show_geometry(fast_name, lod == LOD::Fast && visible);
            }
            None => {
                scene.show_geometry(entry.name(), visible);
            }
        }
    }

    // ===== ACCESSORS =====

    /// Union of the bounds of every registered geometry
    pub fn bounding_box(&self) -> &AABB {
        &self.bounds
    }

    /// The renderer scene behind this façade
    pub fn scene(&self) -> Arc<Mutex<dyn Scene>> {
        Arc::clone(&self.scene)
    }

    pub fn scene_handle(&self) -> SceneHandle {
        self.scene_handle
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Snapshot of the default view's camera
    pub fn camera(&self) -> Option<Camera> {
        let view = self.view(self.default_view)?;
        let camera = lock(&view).camera().clone();
        Some(camera)
    }

    /// Replace the default view's camera. Returns false if the view is gone.
    pub fn set_camera(&mut self, camera: Camera) -> bool {
        match self.view(self.default_view) {
            Some(view) => {
                *lock(&view).camera_mut() = camera;
                true
            }
            None => false,
        }
    }

    /// Point the default view's camera at the bounding box.
    ///
    /// The camera looks down -Z at the box center from the distance where the
    /// box's bounding sphere fits the narrower of the two fields of view. An
    /// empty scene is framed as a unit sphere at the origin.
    ///
    /// Returns false, leaving the camera untouched, if the default view is
    /// gone or its viewport has no area.
    pub fn setup_camera(&mut self, fov_y_degrees: f32) -> bool {
        let Some(view) = self.view(self.default_view) else {
            engine_warn!(SOURCE, "Default view {:?} is gone", self.default_view);
            return false;
        };
        let mut view = lock(&view);

        let viewport = view.viewport();
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            engine_warn!(
                SOURCE,
                "Cannot frame the camera in a {}x{} viewport",
                viewport.width,
                viewport.height
            );
            return false;
        }
        let aspect = viewport.aspect_ratio();
        let fov_y = fov_y_degrees.clamp(1.0, 179.0).to_radians();
        let half_fov_x = ((fov_y * 0.5).tan() * aspect).atan();
        let half_fov = (fov_y * 0.5).min(half_fov_x);

        let (center, radius) = if self.bounds.is_empty() {
            (Vec3::ZERO, 1.0)
        } else {
            let radius = self.bounds.bounding_radius();
            (self.bounds.center(), if radius > 0.0 { radius } else { 1.0 })
        };

        let distance = radius / half_fov.sin();
        let eye = center + Vec3::Z * distance;
        let near = (distance - radius) * 0.5;
        let far = distance + radius * 2.0;

        let camera = view.camera_mut();
        camera.set_view(Mat4::look_at_rh(eye, center, Vec3::Y));
        camera.set_projection(Mat4::perspective_rh(fov_y, aspect, near, far));
        true
    }
}

impl Drop for ViewerScene {
    fn drop(&mut self) {
        // Gizmo first, so clearing does not rebuild it
        lock(&self.scene).remove_geometry(AXIS_OBJECT_NAME);
        self.clear_geometry();
        lock(&self.renderer).destroy_scene(self.scene_handle);
        engine_debug!(SOURCE, "Scene {:?} destroyed", self.scene_handle);
    }
}

#[cfg(test)]
#[path = "viewer_scene_tests.rs"]
mod tests;
