//! Interfaces between the batch and its host
//!
//! The host supplies a [`GraphicsDevice`] when constructing a batch and may
//! pass a [`MatrixProvider`] to each `begin` call.

pub mod device;
pub mod matrix_provider;

pub use device::{
    BackendResult, CullMode, EffectHandle, GraphicsDevice, PrimitiveTopology, RasterizerState,
    TextureHandle, Viewport,
};
pub use matrix_provider::{MatrixProvider, ScreenOrthographic};
