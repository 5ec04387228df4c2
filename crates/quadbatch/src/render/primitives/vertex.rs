//! Vertex layout for batched quads
//!
//! Position, packed RGBA color and texture coordinate. The struct is
//! `#[repr(C)]` and `Pod`, so a backend can upload a vertex slice verbatim
//! with [`VertexPositionColorTexture::as_bytes`].

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{Vec2, Vec3, Vec4};

/// 8-bit RGBA color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create a color from 8-bit channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from normalized channels, clamped to `[0, 1]`
    pub fn from_f32(rgba: [f32; 4]) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(channel(rgba[0]), channel(rgba[1]), channel(rgba[2]), channel(rgba[3]))
    }

    /// Normalized channels
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32) / 255.0
    }
}

/// Vertex attribute formats understood by backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    /// Two 32-bit floats
    Float32x2,
    /// Three 32-bit floats
    Float32x3,
    /// Four normalized unsigned bytes
    Unorm8x4,
}

/// One attribute in the vertex layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Byte offset inside the vertex
    pub offset: usize,
    /// Attribute format
    pub format: VertexFormat,
}

/// A quad corner as stored in the batch buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct VertexPositionColorTexture {
    /// Transformed position
    pub position: [f32; 3],
    /// Vertex color
    pub color: Color,
    /// Texture coordinate
    pub tex_coord: [f32; 2],
}

/// Vertex type used throughout the batch
pub type Vertex = VertexPositionColorTexture;

impl VertexPositionColorTexture {
    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    /// Attribute layout: position, color, texture coordinate
    pub const ATTRIBUTES: [VertexAttribute; 3] = [
        VertexAttribute {
            offset: std::mem::offset_of!(Self, position),
            format: VertexFormat::Float32x3,
        },
        VertexAttribute {
            offset: std::mem::offset_of!(Self, color),
            format: VertexFormat::Unorm8x4,
        },
        VertexAttribute {
            offset: std::mem::offset_of!(Self, tex_coord),
            format: VertexFormat::Float32x2,
        },
    ];

    /// Create a vertex
    pub fn new(position: Vec3, color: Color, tex_coord: Vec2) -> Self {
        Self {
            position: position.into(),
            color,
            tex_coord: tex_coord.into(),
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Texture coordinate as a vector
    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from(self.tex_coord)
    }

    /// Raw bytes of a vertex slice, ready for a GPU upload
    pub fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::ATTRIBUTES[0].offset, 0);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 12);
        assert_eq!(Vertex::ATTRIBUTES[2].offset, 16);
    }

    #[test]
    fn test_as_bytes_length() {
        let vertices = [Vertex::default(); 6];
        assert_eq!(Vertex::as_bytes(&vertices).len(), 6 * Vertex::STRIDE);
    }

    #[test]
    fn test_color_from_f32_clamps() {
        assert_eq!(Color::from_f32([2.0, -1.0, 0.5, 1.0]), Color::rgba(255, 0, 128, 255));
        assert_eq!(Color::WHITE.to_vec4(), Vec4::new(1.0, 1.0, 1.0, 1.0));
    }
}
