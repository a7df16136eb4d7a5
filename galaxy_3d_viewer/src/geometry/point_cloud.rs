/// Point cloud geometry with optional per-point colors and normals.

use std::sync::Arc;
use glam::Vec3;
use crate::error::{Error, Result};
use super::{AABB, Geometry3D, GeometryType};

/// A set of points with optional per-point attributes.
///
/// Attribute vectors are either empty or exactly as long as `points`.
#[derive(Debug, Clone)]
pub struct PointCloud {
    points: Vec<Vec3>,
    colors: Vec<Vec3>,
    normals: Vec<Vec3>,
    bounds: AABB,
}

impl PointCloud {
    /// Create a point cloud without colors or normals
    pub fn new(points: Vec<Vec3>) -> Self {
        let bounds = AABB::from_points(&points);
        Self {
            points,
            colors: Vec::new(),
            normals: Vec::new(),
            bounds,
        }
    }

    /// Attach per-point colors (RGB in [0, 1])
    pub fn with_colors(mut self, colors: Vec<Vec3>) -> Result<Self> {
        Self::check_attribute_len("colors", colors.len(), self.points.len())?;
        self.colors = colors;
        Ok(self)
    }

    /// Attach per-point normals
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Result<Self> {
        Self::check_attribute_len("normals", normals.len(), self.points.len())?;
        self.normals = normals;
        Ok(self)
    }

    fn check_attribute_len(attribute: &str, len: usize, expected: usize) -> Result<()> {
        if len != expected {
            return Err(Error::InvalidResource(format!(
                "PointCloud {} count {} does not match point count {}",
                attribute, len, expected
            )));
        }
        Ok(())
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Keep points 0, k, 2k, ... along with their attributes
    pub fn downsampled(&self, every_k_points: usize) -> Option<PointCloud> {
        if every_k_points == 0 {
            return None;
        }
        let pick = |v: &[Vec3]| -> Vec<Vec3> { v.iter().step_by(every_k_points).copied().collect() };

        let points = pick(&self.points);
        let bounds = AABB::from_points(&points);
        Some(PointCloud {
            colors: pick(&self.colors),
            normals: pick(&self.normals),
            points,
            bounds,
        })
    }
}

impl Geometry3D for PointCloud {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::PointCloud
    }

    fn bounding_box(&self) -> AABB {
        self.bounds
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn uniform_downsample(&self, every_k_points: usize) -> Option<Arc<dyn Geometry3D>> {
        self.downsampled(every_k_points)
            .map(|cloud| Arc::new(cloud) as Arc<dyn Geometry3D>)
    }
}

#[cfg(test)]
#[path = "point_cloud_tests.rs"]
mod tests;
