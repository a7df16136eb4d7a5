//! Geometry module
//!
//! CPU-side geometry handed to the scene façade. Geometry is shared as
//! `Arc<dyn Geometry3D>` between the caller, the façade and the renderer,
//! and is never mutated once registered.

mod bounding_box;
mod point_cloud;
mod triangle_mesh;

use std::fmt;
use std::sync::Arc;

pub use bounding_box::AABB;
pub use point_cloud::PointCloud;
pub use triangle_mesh::TriangleMesh;

/// Concrete kind of a geometry object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    PointCloud,
    TriangleMesh,
}

/// Read-only interface every renderable geometry implements.
pub trait Geometry3D: Send + Sync + fmt::Debug {
    /// Concrete kind of this geometry
    fn geometry_type(&self) -> GeometryType;

    /// True if the geometry has no points/vertices
    fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Axis-aligned bounds in scene space
    fn bounding_box(&self) -> AABB;

    /// Number of points (point clouds) or vertices (meshes)
    fn point_count(&self) -> usize;

    /// Keep every `every_k_points`-th point, producing a lighter copy.
    ///
    /// Returns `None` if the geometry does not support decimation or
    /// `every_k_points` is zero.
    fn uniform_downsample(&self, _every_k_points: usize) -> Option<Arc<dyn Geometry3D>> {
        None
    }
}
