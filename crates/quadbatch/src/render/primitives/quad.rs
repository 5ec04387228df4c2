//! Per-quad draw parameters

use crate::foundation::math::{Vec2, Vec3, Vec4};
use crate::render::primitives::Color;

/// Everything needed to place one quad
///
/// `rotation` holds yaw (about Y), pitch (about X) and roll (about Z) in
/// radians. `source_rect` is `(x, y, width, height)` in texture coordinates
/// and is ignored by the effect when no texture is bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Center of the quad
    pub position: Vec3,
    /// Yaw, pitch, roll in radians
    pub rotation: Vec3,
    /// Unscaled width and height
    pub size: Vec2,
    /// Scale applied along the quad's local X and Y
    pub scale: Vec2,
    /// Texture region `(x, y, width, height)`
    pub source_rect: Vec4,
    /// Uniform vertex color
    pub color: Color,
}

impl Default for Quad {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            size: Vec2::new(1.0, 1.0),
            scale: Vec2::new(1.0, 1.0),
            source_rect: Vec4::zeros(),
            color: Color::WHITE,
        }
    }
}

impl Quad {
    /// Create an unrotated, unscaled white quad
    pub fn new(position: Vec3, size: Vec2) -> Self {
        Self {
            position,
            size,
            ..Default::default()
        }
    }

    /// Set yaw, pitch, roll
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Set the texture region
    pub fn with_source_rect(mut self, source_rect: Vec4) -> Self {
        self.source_rect = source_rect;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
