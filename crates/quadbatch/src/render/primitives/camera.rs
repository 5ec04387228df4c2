//! # Orthographic Camera
//!
//! A [`MatrixProvider`] with a movable position and target. Matrices are
//! cached and recomputed only when position, target or viewport change, so
//! handing the camera to every `begin` call is cheap.
//!
//! Only orthographic projection is implemented; the projection always spans
//! the viewport in pixels, with near = 1 and far = 1000.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::api::matrix_provider::screen_projection;
use crate::render::api::{MatrixProvider, Viewport};
use crate::render::primitives::Frustum;
use crate::render::{RenderError, RenderResult};

/// Camera for pixel-space orthographic rendering
///
/// # Coordinate System
/// Right-handed, Y-up view space. The projection flips Y so that world
/// `(0, 0)` maps to the top-left corner of the viewport.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    viewport: Viewport,
    orthographic: bool,

    view: Mat4,
    projection: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Default camera position
    pub const DEFAULT_POSITION: [f32; 3] = [0.0, 0.0, 1.0];

    /// Create a camera at (0, 0, 1) looking at the origin
    ///
    /// # Arguments
    /// * `viewport` - Current viewport of the device the camera renders to
    pub fn new(viewport: Viewport) -> Self {
        let [x, y, z] = Self::DEFAULT_POSITION;
        let mut camera = Self {
            position: Vec3::new(x, y, z),
            target: Vec3::zeros(),
            up: Vec3::y(),
            viewport,
            orthographic: true,
            view: Mat4::identity(),
            projection: Mat4::identity(),
            frustum: Frustum::from_matrix(&Mat4::identity()),
        };
        camera.recalculate_matrices();
        camera
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera; matrices are recomputed only if the position changed
    pub fn set_position(&mut self, position: Vec3) {
        if self.position != position {
            self.position = position;
            log::trace!("Camera position updated to: {:?}", position);
            self.recalculate_matrices();
        }
    }

    /// Point the camera is looking at
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Change the look-at point; matrices are recomputed only if it changed
    pub fn set_target(&mut self, target: Vec3) {
        if self.target != target {
            self.target = target;
            log::trace!("Camera target updated to: {:?}", target);
            self.recalculate_matrices();
        }
    }

    /// Viewport the projection spans
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after the render target was resized
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            log::debug!(
                "Camera viewport changed: {}x{} -> {}x{}",
                self.viewport.width,
                self.viewport.height,
                viewport.width,
                viewport.height
            );
            self.viewport = viewport;
            self.recalculate_matrices();
        }
    }

    /// Whether the camera uses orthographic projection (always true)
    pub fn is_orthographic(&self) -> bool {
        self.orthographic
    }

    /// Select the projection mode
    ///
    /// # Errors
    /// [`RenderError::NotSupported`] when asked for a non-orthographic mode.
    pub fn set_orthographic(&mut self, orthographic: bool) -> RenderResult<()> {
        if !orthographic {
            return Err(RenderError::NotSupported(
                "non-orthographic camera mode is not supported".to_string(),
            ));
        }
        if !self.orthographic {
            self.orthographic = true;
            self.recalculate_matrices();
        }
        Ok(())
    }

    /// Move the camera back to (0, 0, 1) looking at the origin
    pub fn reset(&mut self) {
        let [x, y, z] = Self::DEFAULT_POSITION;
        self.position = Vec3::new(x, y, z);
        self.target = Vec3::zeros();
        self.recalculate_matrices();
    }

    /// Check if a point lies within the current view frustum
    pub fn is_visible(&self, point: Vec3) -> bool {
        self.frustum.contains_point(point)
    }

    /// Current view frustum
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    fn recalculate_matrices(&mut self) {
        self.view = Mat4::look_at(self.position, self.target, self.up);
        self.projection = screen_projection(self.viewport);
        self.frustum = Frustum::from_matrix(&(self.projection * self.view));
    }
}

impl MatrixProvider for Camera {
    fn world_matrix(&self) -> Mat4 {
        Mat4::identity()
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }
}
