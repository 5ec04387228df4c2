//! GPU-side resource descriptions

pub mod effect;

pub use effect::{EffectState, RenderFlags};
