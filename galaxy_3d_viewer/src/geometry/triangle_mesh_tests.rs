use glam::Vec3;
use crate::error::Error;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_valid_mesh() {
    let mesh = TriangleMesh::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        vec![[0, 1, 2]],
    ).unwrap();
    assert_eq!(mesh.geometry_type(), GeometryType::TriangleMesh);
    assert_eq!(mesh.point_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn test_new_rejects_out_of_range_index() {
    let result = TriangleMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1, 2]]);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_create_box_bounds() {
    let mesh = TriangleMesh::create_box(1.0, 2.0, 3.0);
    assert_eq!(mesh.point_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(mesh.bounding_box(), AABB::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn test_create_box_faces_point_outward() {
    let mesh = TriangleMesh::create_box(1.0, 1.0, 1.0);
    let center = Vec3::splat(0.5);
    for t in mesh.triangles() {
        let [a, b, c] = t.map(|i| mesh.vertices()[i as usize]);
        let normal = (b - a).cross(c - a);
        let face_center = (a + b + c) / 3.0;
        assert!(normal.dot(face_center - center) > 0.0);
    }
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_translate_moves_bounds() {
    let mut mesh = TriangleMesh::create_box(1.0, 1.0, 1.0);
    mesh.translate(Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(mesh.bounding_box().min, Vec3::new(0.0, 0.0, -5.0));
}

#[test]
fn test_append_reindexes_triangles() {
    let mut a = TriangleMesh::create_box(1.0, 1.0, 1.0);
    let b = TriangleMesh::create_box(1.0, 1.0, 1.0);
    a.append(&b);
    assert_eq!(a.point_count(), 16);
    assert_eq!(a.triangle_count(), 24);
    assert!(a.triangles()[12..].iter().flatten().all(|&i| i >= 8));
}

#[test]
fn test_append_drops_colors_when_one_side_has_none() {
    let mut a = TriangleMesh::create_box(1.0, 1.0, 1.0);
    a.paint_uniform_color(Vec3::X);
    a.append(&TriangleMesh::create_box(1.0, 1.0, 1.0));
    assert!(a.vertex_colors().is_empty());
}

// ============================================================================
// Coordinate frame
// ============================================================================

#[test]
fn test_coordinate_frame_extent() {
    let frame = TriangleMesh::create_coordinate_frame(2.0, Vec3::new(1.0, 1.0, 1.0));
    let half = 2.0 * 0.05 * 0.5;
    let bounds = frame.bounding_box();
    assert!((bounds.min - Vec3::splat(1.0 - half)).abs().max_element() < 1e-5);
    assert!((bounds.max - Vec3::splat(3.0 - half)).abs().max_element() < 1e-5);
}

#[test]
fn test_coordinate_frame_is_colored() {
    let frame = TriangleMesh::create_coordinate_frame(1.0, Vec3::ZERO);
    assert_eq!(frame.point_count(), 32);
    assert_eq!(frame.vertex_colors().len(), frame.point_count());
    assert!(frame.vertex_colors().contains(&Vec3::new(1.0, 0.0, 0.0)));
    assert!(frame.vertex_colors().contains(&Vec3::new(0.0, 0.0, 1.0)));
}
