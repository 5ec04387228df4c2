//! Core rendering primitives

pub mod camera;
pub mod frustum;
pub mod quad;
pub mod vertex;

pub use camera::Camera;
pub use frustum::{Frustum, Plane};
pub use quad::Quad;
pub use vertex::{Color, Vertex, VertexAttribute, VertexFormat, VertexPositionColorTexture};
