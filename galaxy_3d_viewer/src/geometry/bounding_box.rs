/// Axis-aligned bounding box used for scene extents.
///
/// The empty box stores `min = +inf` and `max = -inf` so that it is the
/// identity of `merge`: unioning any box with it yields that box unchanged.

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create a box from two corners (components are reordered if needed)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// The empty box (contains nothing, identity of `merge`)
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point. Empty input gives the empty box.
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::empty(), |mut aabb, &p| {
            aabb.include_point(p);
            aabb
        })
    }

    /// True if the box contains no point at all
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to contain `point`
    pub fn include_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box in place to contain `other`
    pub fn merge(&mut self, other: &AABB) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Union of two boxes
    pub fn merged(&self, other: &AABB) -> AABB {
        let mut result = *self;
        result.merge(other);
        result
    }

    /// Center point (origin for the empty box)
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }

    /// Size along each axis (zero for the empty box)
    pub fn extent(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Largest of the three extents
    pub fn max_extent(&self) -> f32 {
        self.extent().max_element()
    }

    /// Radius of the sphere circumscribing the box
    pub fn bounding_radius(&self) -> f32 {
        self.extent().length() * 0.5
    }

    /// Transform this box by a matrix, returning a new box.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the box extents
    /// for an exact (tight) result without transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        if self.is_empty() {
            return *self;
        }
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Test if this box fully contains another box.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this box intersects (overlaps or touches) another box.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;
