//! Effect parameter block
//!
//! `EffectState` is what the batch hands to
//! [`GraphicsDevice::apply_effect_pass`](crate::render::GraphicsDevice::apply_effect_pass):
//! the transform matrices, the bound texture and the fixed-function style
//! switches of a basic unlit shader.

use bitflags::bitflags;

use crate::foundation::math::{Mat4, Vec3};
use crate::render::api::{MatrixProvider, TextureHandle};

bitflags! {
    /// Shader feature switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u32 {
        /// Blend output with the target using the effect alpha
        const ALPHA_BLEND = 1 << 0;
        /// Multiply by the per-vertex color
        const VERTEX_COLOR = 1 << 1;
        /// Apply lighting
        const LIGHTING = 1 << 2;
        /// Sample the bound texture
        const TEXTURE = 1 << 3;
    }
}

/// Parameters of the effect used for one batch cycle
#[derive(Debug, Clone, PartialEq)]
pub struct EffectState {
    /// Object-to-world transform
    pub world: Mat4,
    /// World-to-camera transform
    pub view: Mat4,
    /// Camera-to-clip transform
    pub projection: Mat4,
    /// Global opacity in `[0, 1]`, used when `ALPHA_BLEND` is set
    pub alpha: f32,
    /// Diffuse material color
    pub diffuse_color: Vec3,
    /// Specular material color
    pub specular_color: Vec3,
    /// Ambient light color
    pub ambient_light_color: Vec3,
    /// Texture sampled when `TEXTURE` is set
    pub texture: Option<TextureHandle>,
    /// Enabled shader features
    pub flags: RenderFlags,
}

impl Default for EffectState {
    fn default() -> Self {
        Self {
            world: Mat4::identity(),
            view: Mat4::identity(),
            projection: Mat4::identity(),
            alpha: 1.0,
            diffuse_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_light_color: Vec3::new(1.0, 1.0, 1.0),
            texture: None,
            flags: RenderFlags::empty(),
        }
    }
}

impl EffectState {
    /// Copy world, view and projection from a provider
    pub fn set_matrices(&mut self, provider: &dyn MatrixProvider) {
        self.world = provider.world_matrix();
        self.view = provider.view_matrix();
        self.projection = provider.projection_matrix();
    }

    /// Configure for unlit, vertex-colored, alpha-blended quads
    pub fn configure_unlit(&mut self, alpha: f32, texture: Option<TextureHandle>) {
        let white = Vec3::new(1.0, 1.0, 1.0);
        self.alpha = alpha;
        self.diffuse_color = white;
        self.specular_color = white;
        self.ambient_light_color = white;

        self.flags = RenderFlags::ALPHA_BLEND | RenderFlags::VERTEX_COLOR;
        self.bind_texture(texture);
    }

    /// Bind (or unbind) the texture, keeping the `TEXTURE` flag in sync
    pub fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
        self.flags.set(RenderFlags::TEXTURE, texture.is_some());
    }

    /// `projection * view * world`
    pub fn world_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.world
    }
}
