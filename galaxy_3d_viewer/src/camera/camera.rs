/// Camera: low-level passive data container.
///
/// The Camera computes nothing. Whoever drives it (the UI layer, or
/// `ViewerScene::setup_camera`) computes and sets the view matrix,
/// projection matrix and viewport.

use glam::{Mat4, Vec3};
use crate::renderer::Viewport;

/// Low-level camera. A passive data container.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
}

impl Camera {
    /// Create a new camera with the given parameters.
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
        }
    }

    /// Identity view and projection covering `viewport`
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, viewport)
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Eye position in world space
    pub fn position(&self) -> Vec3 {
        self.view_matrix.inverse().col(3).truncate()
    }

    /// Viewport dimensions and depth range.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ===== SETTERS =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Set the viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
