/// Registry entry types for the scene façade.

use std::sync::Arc;
use crate::geometry::{AABB, Geometry3D};
use crate::material::Material;

/// Level of detail used to pick which proxy of each entry is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LOD {
    /// Full-resolution proxies (rendering time is not critical)
    #[default]
    HighDetail,
    /// Downsampled proxies where available (interaction, e.g. rotating)
    Fast,
}

/// Downsampled proxy of an entry
#[derive(Debug, Clone)]
pub(crate) struct FastCopy {
    pub(crate) name: String,
    pub(crate) geometry: Arc<dyn Geometry3D>,
}

/// One named geometry registered with a `ViewerScene`.
///
/// The full-detail proxy uses `name`; the downsampled proxy, if any,
/// uses `fast_name`. The entry keeps what was uploaded so its proxies
/// can be put back after a failed replacement.
#[derive(Debug, Clone)]
pub struct GeometryEntry {
    name: String,
    fast: Option<FastCopy>,
    visible: bool,
    geometry: Arc<dyn Geometry3D>,
    material: Material,
    bounds: AABB,
}

impl GeometryEntry {
    /// New entry, visible by default
    pub(crate) fn new(
        name: &str,
        fast: Option<FastCopy>,
        geometry: Arc<dyn Geometry3D>,
        material: Material,
    ) -> Self {
        let bounds = geometry.bounding_box();
        Self {
            name: name.to_string(),
            fast,
            visible: true,
            geometry,
            material,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the downsampled proxy, `None` if no fast copy exists
    pub fn fast_name(&self) -> Option<&str> {
        self.fast.as_ref().map(|fast| fast.name.as_str())
    }

    pub(crate) fn fast_copy(&self) -> Option<&FastCopy> {
        self.fast.as_ref()
    }

    pub(crate) fn drop_fast_copy(&mut self) {
        self.fast = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The shared geometry as registered by the caller
    pub fn geometry(&self) -> &Arc<dyn Geometry3D> {
        &self.geometry
    }

    /// Material currently applied to both proxies
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub(crate) fn set_material(&mut self, material: &Material) {
        self.material = material.clone();
    }

    /// Bounds captured at registration
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }
}
