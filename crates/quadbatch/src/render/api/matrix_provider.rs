//! World/view/projection matrix sources

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::api::Viewport;

/// Distance to the near clipping plane of the screen-space projection
pub const SCREEN_NEAR_PLANE: f32 = 1.0;

/// Distance to the far clipping plane of the screen-space projection
pub const SCREEN_FAR_PLANE: f32 = 1000.0;

/// Supplies the matrices a batch renders with
///
/// Queried once per `begin`; later changes to the provider do not affect an
/// already started batch.
pub trait MatrixProvider {
    /// Object-to-world transform
    fn world_matrix(&self) -> Mat4;

    /// World-to-camera transform
    fn view_matrix(&self) -> Mat4;

    /// Camera-to-clip transform
    fn projection_matrix(&self) -> Mat4;

    /// `projection * view`
    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pixel-space orthographic projection with a Y-down origin at the top-left
/// corner of the viewport.
pub(crate) fn screen_projection(viewport: Viewport) -> Mat4 {
    Mat4::orthographic_off_center(
        0.0,
        viewport.width as f32,
        viewport.height as f32,
        0.0,
        SCREEN_NEAR_PLANE,
        SCREEN_FAR_PLANE,
    )
}

/// Matrices used when `begin` is given no provider
///
/// Identity world, a camera at (0, 0, 1) looking at the origin, and an
/// orthographic projection spanning the viewport in pixels, so a quad at
/// `(x, y, 0)` lands on pixel `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenOrthographic {
    view: Mat4,
    projection: Mat4,
}

impl ScreenOrthographic {
    /// Camera position of the screen-space view
    pub const EYE: [f32; 3] = [0.0, 0.0, 1.0];

    /// Build the screen-space matrices for a viewport
    pub fn new(viewport: Viewport) -> Self {
        let [x, y, z] = Self::EYE;
        Self {
            view: Mat4::look_at(Vec3::new(x, y, z), Vec3::zeros(), Vec3::y()),
            projection: screen_projection(viewport),
        }
    }
}

impl MatrixProvider for ScreenOrthographic {
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
