//! # Rendering System
//!
//! Backend-agnostic quad batching. The batch never talks to a graphics API
//! directly; it goes through the [`GraphicsDevice`] trait, and takes its
//! camera matrices from any [`MatrixProvider`].
//!
//! ## Architecture
//!
//! - **api**: traits the host implements or supplies (device, matrices)
//! - **primitives**: vertex layout, quad parameters, camera and frustum
//! - **resources**: effect (shader) parameter block handed to the device
//! - **systems::batching**: the [`QuadBatch`] accumulator itself

pub mod api;
pub mod primitives;
pub mod resources;
pub mod systems;

pub use api::{
    BackendResult, CullMode, EffectHandle, GraphicsDevice, MatrixProvider, PrimitiveTopology,
    RasterizerState, ScreenOrthographic, TextureHandle, Viewport,
};
pub use primitives::{Camera, Color, Frustum, Quad, Vertex, VertexPositionColorTexture};
pub use resources::{EffectState, RenderFlags};
pub use systems::batching::{BatchState, BatchStats, QuadBatch, DEFAULT_CAPACITY, VERTICES_PER_QUAD};

use thiserror::Error;

/// Errors raised by the rendering system
///
/// Everything except [`RenderError::Backend`] is a contract violation by the
/// caller and is reported before any state is touched.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A constructor or setter received an unusable value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was called in the wrong lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The requested mode is not implemented
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Failure reported by a graphics device implementation
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
