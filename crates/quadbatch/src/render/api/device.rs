//! Graphics device abstraction
//!
//! Everything the batch needs from a graphics API: the viewport size, a
//! rasterizer-state slot, an effect (shader program) resource, and a call
//! that submits an array of vertices as primitives.

use crate::render::primitives::Vertex;
use crate::render::resources::EffectState;
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to an effect (shader program) owned by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u64);

/// Handle to a texture owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Size of the render target in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Which triangle winding gets discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Draw both windings
    #[default]
    None,
    /// Cull clockwise triangles
    Clockwise,
    /// Cull counter-clockwise triangles
    CounterClockwise,
}

/// Rasterizer settings applied before a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterizerState {
    /// Face culling
    pub cull_mode: CullMode,
}

impl RasterizerState {
    /// No face culling
    pub const CULL_NONE: Self = Self { cull_mode: CullMode::None };

    /// Create a rasterizer state with the given cull mode
    pub const fn new(cull_mode: CullMode) -> Self {
        Self { cull_mode }
    }
}

/// How submitted vertices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Every three vertices form an independent triangle
    TriangleList,
}

impl PrimitiveTopology {
    /// Number of primitives formed by `vertex_count` vertices
    pub const fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            Self::TriangleList => vertex_count / 3,
        }
    }
}

/// Graphics backend used by [`QuadBatch`](crate::render::QuadBatch)
///
/// Implementations wrap a real graphics API (or, in tests, record calls).
/// All methods run synchronously on the calling thread.
pub trait GraphicsDevice {
    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;

    /// Replace the rasterizer state used by subsequent submissions
    fn set_rasterizer_state(&mut self, state: RasterizerState);

    /// Create the effect a batch renders with
    fn create_effect(&mut self) -> BackendResult<EffectHandle>;

    /// Number of passes the effect needs for one submission
    fn effect_pass_count(&self, _effect: EffectHandle) -> usize {
        1
    }

    /// Bind `pass` of the effect with the given parameters
    fn apply_effect_pass(
        &mut self,
        effect: EffectHandle,
        state: &EffectState,
        pass: usize,
    ) -> BackendResult<()>;

    /// Release an effect created by [`GraphicsDevice::create_effect`]
    ///
    /// Called exactly once per handle.
    fn release_effect(&mut self, effect: EffectHandle);

    /// Submit `vertex_count` vertices starting at `start` as primitives
    fn draw_user_primitives(
        &mut self,
        topology: PrimitiveTopology,
        vertices: &[Vertex],
        start: usize,
        vertex_count: usize,
    ) -> BackendResult<()>;
}
