//! # Quad Batch
//!
//! Collects arbitrarily positioned, rotated and scaled quads into a
//! pre-allocated vertex buffer and submits them to a [`GraphicsDevice`] as
//! triangle lists.
//!
//! ## Protocol
//!
//! ```text
//! Idle --begin--> Accumulating --draw*--> Accumulating --end--> Idle
//!                       \______________reset_______________/
//! ```
//!
//! When the buffer is full, the next `draw` flushes the queued quads before
//! writing the new one. The buffer never grows.
//!
//! A device error during a flush leaves the batch as it was: the queued
//! quads stay queued and the state does not change. The caller can retry
//! (`draw` or `end` again) or give up with `reset`.
//!
//! ## Vertex order
//!
//! ```text
//! 0  3--4
//! |\  \ |
//! | \  \|
//! 1--2  5
//! ```

use crate::core::config::{validate_alpha, BatchConfig};
use crate::foundation::math::{Mat4, Mat4Ext, Point3, Vec2, Vec3, Vec4};
use crate::render::api::{
    EffectHandle, GraphicsDevice, MatrixProvider, PrimitiveTopology, RasterizerState,
    ScreenOrthographic, TextureHandle,
};
use crate::render::primitives::{Color, Quad, Vertex};
use crate::render::resources::EffectState;
use crate::render::systems::batching::BatchStats;
use crate::render::{RenderError, RenderResult};

/// Quads per flush when no capacity is given
pub const DEFAULT_CAPACITY: usize = 256;

/// Two triangles, no index buffer
pub const VERTICES_PER_QUAD: usize = 6;

const TRI_ONE_TOP_LEFT: usize = 0;
const TRI_ONE_BOTTOM_LEFT: usize = 1;
const TRI_ONE_BOTTOM_RIGHT: usize = 2;
const TRI_TWO_TOP_LEFT: usize = 3;
const TRI_TWO_TOP_RIGHT: usize = 4;
const TRI_TWO_BOTTOM_RIGHT: usize = 5;

/// Lifecycle state of a [`QuadBatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    /// Between `end` (or `reset`) and the next `begin`
    #[default]
    Idle,
    /// Between `begin` and `end`; `draw` is allowed
    Accumulating,
}

/// Fixed-capacity batch of textured, colored quads
pub struct QuadBatch<D: GraphicsDevice> {
    device: D,
    effect: Option<EffectHandle>,
    effect_state: EffectState,
    config: BatchConfig,

    vertices: Box<[Vertex]>,
    count: usize,
    state: BatchState,

    stats: BatchStats,
}

impl<D: GraphicsDevice> QuadBatch<D> {
    /// Create a batch holding [`DEFAULT_CAPACITY`] quads per flush
    pub fn with_default_capacity(device: D) -> RenderResult<Self> {
        Self::with_config(device, &BatchConfig::default())
    }

    /// Create a batch holding `capacity` quads per flush
    ///
    /// # Errors
    /// [`RenderError::InvalidArgument`] if `capacity` is zero, or whatever the
    /// device reports while creating the effect.
    pub fn new(device: D, capacity: usize) -> RenderResult<Self> {
        Self::with_config(device, &BatchConfig::new(capacity))
    }

    /// Create a batch from a configuration
    pub fn with_config(mut device: D, config: &BatchConfig) -> RenderResult<Self> {
        config.validate()?;
        let vertex_capacity = config.vertex_capacity()?;

        let effect = device.create_effect()?;
        let vertices = vec![Vertex::default(); vertex_capacity].into_boxed_slice();

        log::info!(
            "Created quad batch: capacity {} quads ({} vertices), alpha {}",
            config.capacity,
            vertices.len(),
            config.alpha
        );

        Ok(Self {
            device,
            effect: Some(effect),
            effect_state: EffectState::default(),
            config: config.clone(),
            vertices,
            count: 0,
            state: BatchState::Idle,
            stats: BatchStats::default(),
        })
    }

    /// Start a batch using screen-space matrices and no texture
    pub fn begin(&mut self) -> RenderResult<()> {
        self.begin_with(None, None)
    }

    /// Start a batch
    ///
    /// Matrices come from `matrices` when given, otherwise from a
    /// [`ScreenOrthographic`] built from the device viewport.
    ///
    /// # Errors
    /// [`RenderError::InvalidState`] if the batch is already started or has
    /// been unloaded.
    pub fn begin_with(
        &mut self,
        texture: Option<TextureHandle>,
        matrices: Option<&dyn MatrixProvider>,
    ) -> RenderResult<()> {
        if self.state == BatchState::Accumulating {
            return Err(RenderError::InvalidState("begin() has already been called".to_string()));
        }
        if self.effect.is_none() {
            return Err(RenderError::InvalidState("batch has been unloaded".to_string()));
        }

        match matrices {
            Some(provider) => self.effect_state.set_matrices(provider),
            None => {
                let viewport = self.device.viewport();
                self.effect_state.set_matrices(&ScreenOrthographic::new(viewport));
            }
        }
        self.effect_state.configure_unlit(self.config.alpha, texture);
        self.state = BatchState::Accumulating;

        log::debug!("Quad batch started (texture: {:?})", texture);
        Ok(())
    }

    /// Queue one quad
    ///
    /// # Arguments
    /// * `position` - Center of the quad
    /// * `rotation` - Yaw (about Y), pitch (about X), roll (about Z) in radians
    /// * `size` - Width and height before scaling
    /// * `scale` - Scale along the quad's X and Y
    /// * `source_rect` - Texture region `(x, y, width, height)`
    /// * `color` - Vertex color
    ///
    /// # Errors
    /// [`RenderError::InvalidState`] if `begin` has not been called; device
    /// errors from an implicit flush, in which case the quad is not queued
    /// and the previously queued quads are kept.
    pub fn draw(
        &mut self,
        position: Vec3,
        rotation: Vec3,
        size: Vec2,
        scale: Vec2,
        source_rect: Vec4,
        color: Color,
    ) -> RenderResult<()> {
        self.draw_quad(&Quad {
            position,
            rotation,
            size,
            scale,
            source_rect,
            color,
        })
    }

    /// Queue one quad described by a [`Quad`]
    pub fn draw_quad(&mut self, quad: &Quad) -> RenderResult<()> {
        if self.state != BatchState::Accumulating {
            return Err(RenderError::InvalidState("call begin() first".to_string()));
        }

        if self.count == self.vertices.len() {
            log::trace!("Quad batch full ({} quads), flushing", self.config.capacity);
            self.flush()?;
            self.stats.implicit_flushes += 1;
        }

        let transform = Mat4::new_translation(&quad.position)
            * Mat4::new_nonuniform_scaling(&Vec3::new(quad.scale.x, quad.scale.y, 1.0))
            * Mat4::yaw_pitch_roll(quad.rotation.x, quad.rotation.y, quad.rotation.z);

        let x2 = quad.size.x / 2.0;
        let x1 = -x2;
        let y2 = quad.size.y / 2.0;
        let y1 = -y2;

        let rect = quad.source_rect;
        let (tx1, ty1) = (rect.x, rect.y);
        let (tx2, ty2) = (rect.x + rect.z, rect.y + rect.w);

        let corner = |x: f32, y: f32, tx: f32, ty: f32| {
            let position = transform.transform_point(&Point3::new(x, y, 0.0));
            Vertex::new(position.coords, quad.color, Vec2::new(tx, ty))
        };

        let top_left = corner(x1, y1, tx1, ty1);
        let top_right = corner(x2, y1, tx2, ty1);
        let bottom_left = corner(x1, y2, tx1, ty2);
        let bottom_right = corner(x2, y2, tx2, ty2);

        let slots = &mut self.vertices[self.count..self.count + VERTICES_PER_QUAD];
        slots[TRI_ONE_TOP_LEFT] = top_left;
        slots[TRI_ONE_BOTTOM_LEFT] = bottom_left;
        slots[TRI_ONE_BOTTOM_RIGHT] = bottom_right;
        slots[TRI_TWO_TOP_LEFT] = top_left;
        slots[TRI_TWO_TOP_RIGHT] = top_right;
        slots[TRI_TWO_BOTTOM_RIGHT] = bottom_right;

        self.count += VERTICES_PER_QUAD;
        self.stats.quads_drawn += 1;
        Ok(())
    }

    /// Submit the remaining quads and finish the batch
    ///
    /// # Errors
    /// [`RenderError::InvalidState`] if `begin` has not been called. On a
    /// device error the batch stays started with its quads queued.
    pub fn end(&mut self) -> RenderResult<()> {
        if self.state != BatchState::Accumulating {
            return Err(RenderError::InvalidState("call begin() first".to_string()));
        }

        self.flush()?;

        self.state = BatchState::Idle;
        self.effect_state.bind_texture(None);

        log::debug!("Quad batch ended");
        Ok(())
    }

    /// Discard queued quads without submitting them and return to `Idle`
    pub fn reset(&mut self) {
        if self.count > 0 {
            log::debug!("Quad batch reset, discarding {} quads", self.queued_quads());
            self.stats.quads_discarded += self.queued_quads();
        }
        self.effect_state.bind_texture(None);
        self.state = BatchState::Idle;
        self.count = 0;
    }

    /// Release the device effect
    ///
    /// Further calls (and dropping the batch) do nothing. Queued quads are
    /// discarded; the batch cannot be started again.
    pub fn unload(&mut self) {
        if let Some(effect) = self.effect.take() {
            if self.count > 0 {
                log::warn!("Unloading quad batch with {} unsubmitted quads", self.queued_quads());
            }
            self.reset();
            self.device.release_effect(effect);
            log::info!("Quad batch unloaded");
        }
    }

    fn flush(&mut self) -> RenderResult<()> {
        if self.count == 0 {
            return Ok(());
        }
        let Some(effect) = self.effect else {
            return Err(RenderError::InvalidState("batch has been unloaded".to_string()));
        };

        let vertex_count = self.count;
        let topology = PrimitiveTopology::TriangleList;

        // Rotated quads may face away from the camera; both windings must draw.
        self.device.set_rasterizer_state(RasterizerState::CULL_NONE);

        let passes = self.device.effect_pass_count(effect);
        for pass in 0..passes {
            self.device.apply_effect_pass(effect, &self.effect_state, pass)?;
            self.device
                .draw_user_primitives(topology, &self.vertices[..vertex_count], 0, vertex_count)?;
        }

        self.count = 0;
        self.stats.flushes += 1;
        self.stats.draw_calls += passes;
        self.stats.vertices_submitted += vertex_count;
        log::trace!(
            "Flushed {} triangles in {} pass(es)",
            topology.primitive_count(vertex_count),
            passes
        );
        Ok(())
    }

    /// Quads per flush
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Vertices waiting for the next flush (always a multiple of 6)
    pub fn queued_vertices(&self) -> usize {
        self.count
    }

    /// Quads waiting for the next flush
    pub fn queued_quads(&self) -> usize {
        self.count / VERTICES_PER_QUAD
    }

    /// The queued vertices, in submission order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices[..self.count]
    }

    /// Current lifecycle state
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Whether `begin` has been called without a matching `end`/`reset`
    pub fn is_started(&self) -> bool {
        self.state == BatchState::Accumulating
    }

    /// Whether `unload` has released the effect
    pub fn is_unloaded(&self) -> bool {
        self.effect.is_none()
    }

    /// Effect parameters of the current (or last) batch cycle
    pub fn effect_state(&self) -> &EffectState {
        &self.effect_state
    }

    /// Blend alpha applied by the next `begin`
    pub fn alpha(&self) -> f32 {
        self.config.alpha
    }

    /// Change the blend alpha used from the next `begin` on
    ///
    /// # Errors
    /// [`RenderError::InvalidArgument`] outside `[0, 1]`;
    /// [`RenderError::InvalidState`] while accumulating.
    pub fn set_alpha(&mut self, alpha: f32) -> RenderResult<()> {
        if self.state == BatchState::Accumulating {
            return Err(RenderError::InvalidState(
                "cannot change alpha between begin() and end()".to_string(),
            ));
        }
        validate_alpha(alpha)?;
        self.config.alpha = alpha;
        Ok(())
    }

    /// Submission statistics
    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = BatchStats::default();
    }

    /// The device the batch submits to
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the device, e.g. to resize its viewport
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

impl<D: GraphicsDevice> Drop for QuadBatch<D> {
    fn drop(&mut self) {
        self.unload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::api::{BackendResult, Viewport};

    #[derive(Default)]
    struct CountingDevice {
        draws: Vec<usize>,
        released: usize,
    }

    impl GraphicsDevice for CountingDevice {
        fn viewport(&self) -> Viewport {
            Viewport::new(320, 240)
        }

        fn set_rasterizer_state(&mut self, _state: RasterizerState) {}

        fn create_effect(&mut self) -> BackendResult<EffectHandle> {
            Ok(EffectHandle(1))
        }

        fn apply_effect_pass(
            &mut self,
            _effect: EffectHandle,
            _state: &EffectState,
            _pass: usize,
        ) -> BackendResult<()> {
            Ok(())
        }

        fn release_effect(&mut self, _effect: EffectHandle) {
            self.released += 1;
        }

        fn draw_user_primitives(
            &mut self,
            _topology: PrimitiveTopology,
            _vertices: &[Vertex],
            _start: usize,
            vertex_count: usize,
        ) -> BackendResult<()> {
            self.draws.push(vertex_count);
            Ok(())
        }
    }

    fn unit_quad() -> Quad {
        Quad::new(Vec3::new(10.0, 10.0, 0.0), Vec2::new(2.0, 2.0))
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let result = QuadBatch::new(CountingDevice::default(), 0);
        assert!(matches!(result, Err(RenderError::InvalidArgument(_))));
    }

    #[test]
    fn test_default_capacity() {
        let batch = QuadBatch::with_default_capacity(CountingDevice::default()).unwrap();
        assert_eq!(batch.capacity(), DEFAULT_CAPACITY);
        assert_eq!(batch.state(), BatchState::Idle);
        assert_eq!(batch.queued_vertices(), 0);
    }

    #[test]
    fn test_fill_exactly_to_capacity_without_flushing() {
        let mut batch = QuadBatch::new(CountingDevice::default(), 3).unwrap();
        batch.begin().unwrap();
        for _ in 0..3 {
            batch.draw_quad(&unit_quad()).unwrap();
        }

        assert_eq!(batch.queued_vertices(), 18);
        assert!(batch.device().draws.is_empty());

        batch.draw_quad(&unit_quad()).unwrap();
        assert_eq!(batch.device().draws, vec![18]);
        assert_eq!(batch.queued_vertices(), 6);
        assert_eq!(batch.stats().implicit_flushes, 1);
    }

    #[test]
    fn test_empty_end_submits_nothing() {
        let mut batch = QuadBatch::new(CountingDevice::default(), 2).unwrap();
        batch.begin().unwrap();
        batch.end().unwrap();

        assert!(batch.device().draws.is_empty());
        assert_eq!(batch.stats().flushes, 0);
    }

    #[test]
    fn test_unload_blocks_begin() {
        let mut batch = QuadBatch::new(CountingDevice::default(), 2).unwrap();
        batch.unload();

        assert!(batch.is_unloaded());
        assert!(matches!(batch.begin(), Err(RenderError::InvalidState(_))));
        assert_eq!(batch.device().released, 1);
    }

    #[test]
    fn test_set_alpha() {
        let mut batch = QuadBatch::new(CountingDevice::default(), 2).unwrap();
        batch.set_alpha(0.5).unwrap();
        assert_eq!(batch.alpha(), 0.5);
        assert!(matches!(batch.set_alpha(-0.1), Err(RenderError::InvalidArgument(_))));

        batch.begin().unwrap();
        assert_eq!(batch.effect_state().alpha, 0.5);
        assert!(matches!(batch.set_alpha(1.0), Err(RenderError::InvalidState(_))));
    }
}
