//! Recording graphics device shared by the integration tests

#![allow(dead_code)]

use quadbatch::render::{
    BackendResult, EffectHandle, EffectState, GraphicsDevice, PrimitiveTopology, RasterizerState,
    RenderError, Vertex, Viewport,
};

/// One `draw_user_primitives` call
#[derive(Debug, Clone)]
pub struct Submission {
    pub topology: PrimitiveTopology,
    pub vertices: Vec<Vertex>,
    pub start: usize,
    pub vertex_count: usize,
    pub pass: usize,
    pub effect: EffectState,
    pub rasterizer: Option<RasterizerState>,
}

/// Device that records everything the batch asks of it
#[derive(Debug)]
pub struct RecordingDevice {
    pub viewport: Viewport,
    pub passes: usize,
    pub fail_draws: bool,

    pub rasterizer: Option<RasterizerState>,
    pub created_effects: Vec<EffectHandle>,
    pub released_effects: Vec<EffectHandle>,
    pub submissions: Vec<Submission>,

    next_effect: u64,
    applied: Option<(usize, EffectState)>,
}

impl RecordingDevice {
    pub fn new(width: u32, height: u32) -> Self {
        quadbatch::foundation::logging::init();
        Self {
            viewport: Viewport::new(width, height),
            passes: 1,
            fail_draws: false,
            rasterizer: None,
            created_effects: Vec::new(),
            released_effects: Vec::new(),
            submissions: Vec::new(),
            next_effect: 1,
            applied: None,
        }
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn vertex_counts(&self) -> Vec<usize> {
        self.submissions.iter().map(|s| s.vertex_count).collect()
    }
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl GraphicsDevice for RecordingDevice {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_rasterizer_state(&mut self, state: RasterizerState) {
        self.rasterizer = Some(state);
    }

    fn create_effect(&mut self) -> BackendResult<EffectHandle> {
        let handle = EffectHandle(self.next_effect);
        self.next_effect += 1;
        self.created_effects.push(handle);
        Ok(handle)
    }

    fn effect_pass_count(&self, _effect: EffectHandle) -> usize {
        self.passes
    }

    fn apply_effect_pass(
        &mut self,
        _effect: EffectHandle,
        state: &EffectState,
        pass: usize,
    ) -> BackendResult<()> {
        self.applied = Some((pass, state.clone()));
        Ok(())
    }

    fn release_effect(&mut self, effect: EffectHandle) {
        self.released_effects.push(effect);
    }

    fn draw_user_primitives(
        &mut self,
        topology: PrimitiveTopology,
        vertices: &[Vertex],
        start: usize,
        vertex_count: usize,
    ) -> BackendResult<()> {
        if self.fail_draws {
            return Err(RenderError::Backend("device lost".to_string()));
        }
        let (pass, effect) = self
            .applied
            .take()
            .ok_or_else(|| RenderError::Backend("no effect pass applied".to_string()))?;

        self.submissions.push(Submission {
            topology,
            vertices: vertices[start..start + vertex_count].to_vec(),
            start,
            vertex_count,
            pass,
            effect,
            rasterizer: self.rasterizer,
        });
        Ok(())
    }
}
