/// Indexed triangle mesh geometry.
///
/// Also provides the procedural shapes the viewer needs for itself
/// (boxes and the coordinate-frame gizmo drawn by `show_axes`).

use glam::Vec3;
use crate::error::{Error, Result};
use super::{AABB, Geometry3D, GeometryType};

/// Triangle mesh with optional per-vertex colors.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    vertex_colors: Vec<Vec3>,
}

/// Triangles of an axis-aligned box whose corners are indexed as
/// `x_bit | y_bit << 1 | z_bit << 2`, wound counter-clockwise seen from outside.
const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 2, 3], [0, 3, 1], // -Z
    [4, 5, 7], [4, 7, 6], // +Z
    [0, 1, 5], [0, 5, 4], // -Y
    [2, 6, 7], [2, 7, 3], // +Y
    [0, 4, 6], [0, 6, 2], // -X
    [1, 3, 7], [1, 7, 5], // +X
];

impl TriangleMesh {
    /// Create a mesh, validating that every index refers to a vertex
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        let vertex_count = vertices.len();
        if let Some(bad) = triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(Error::InvalidResource(format!(
                "TriangleMesh index {} out of range ({} vertices)",
                bad, vertex_count
            )));
        }
        Ok(Self {
            vertices,
            triangles,
            vertex_colors: Vec::new(),
        })
    }

    /// Axis-aligned box with its minimum corner at the origin
    pub fn create_box(width: f32, height: f32, depth: f32) -> Self {
        let vertices = (0..8u32)
            .map(|i| Vec3::new(
                if i & 1 != 0 { width } else { 0.0 },
                if i & 2 != 0 { height } else { 0.0 },
                if i & 4 != 0 { depth } else { 0.0 },
            ))
            .collect();
        Self {
            vertices,
            triangles: BOX_TRIANGLES.to_vec(),
            vertex_colors: Vec::new(),
        }
    }

    /// Coordinate-frame gizmo: red X, green Y and blue Z arms of length `size`
    /// starting at `origin`, joined by a small grey cube.
    pub fn create_coordinate_frame(size: f32, origin: Vec3) -> Self {
        let thickness = size * 0.05;
        let half = thickness * 0.5;

        let mut center = Self::create_box(thickness, thickness, thickness);
        center.translate(Vec3::splat(-half));
        center.paint_uniform_color(Vec3::splat(0.5));

        let arms = [
            (Vec3::new(size, thickness, thickness), Vec3::new(1.0, 0.0, 0.0)),
            (Vec3::new(thickness, size, thickness), Vec3::new(0.0, 1.0, 0.0)),
            (Vec3::new(thickness, thickness, size), Vec3::new(0.0, 0.0, 1.0)),
        ];

        let mut frame = center;
        for (dims, color) in arms {
            let mut arm = Self::create_box(dims.x, dims.y, dims.z);
            arm.translate(Vec3::splat(-half));
            arm.paint_uniform_color(color);
            frame.append(&arm);
        }
        frame.translate(origin);
        frame
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn vertex_colors(&self) -> &[Vec3] {
        &self.vertex_colors
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Move every vertex by `offset`
    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Set every vertex color to `color`
    pub fn paint_uniform_color(&mut self, color: Vec3) {
        self.vertex_colors = vec![color; self.vertices.len()];
    }

    /// Append another mesh, re-indexing its triangles.
    ///
    /// Colors survive only if both meshes carry them.
    pub fn append(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        let keep_colors = self.vertex_colors.len() == self.vertices.len()
            && other.vertex_colors.len() == other.vertices.len();

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other.triangles.iter().map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]),
        );
        if keep_colors {
            self.vertex_colors.extend_from_slice(&other.vertex_colors);
        } else {
            self.vertex_colors.clear();
        }
    }
}

impl Geometry3D for TriangleMesh {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::TriangleMesh
    }

    fn bounding_box(&self) -> AABB {
        AABB::from_points(&self.vertices)
    }

    fn point_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
#[path = "triangle_mesh_tests.rs"]
mod tests;
