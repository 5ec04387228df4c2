//! # quadbatch
//!
//! Immediate-mode batching of quads that can be positioned, scaled and
//! rotated along all three axes, submitted through a pluggable graphics
//! device.
//!
//! ## Features
//!
//! - **Fixed memory**: the vertex buffer is sized once; a full batch flushes
//!   itself instead of growing
//! - **One draw call per flush**: quads are expanded to triangle lists on the CPU
//! - **Backend agnostic**: implement [`render::GraphicsDevice`] for your API
//! - **Pixel-space default camera**: without a matrix provider, `(x, y, 0)`
//!   maps to pixel `(x, y)` with the origin at the top-left
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quadbatch::prelude::*;
//!
//! let mut batch = QuadBatch::new(device, 256)?;
//!
//! batch.begin()?;
//! batch.draw(
//!     Vec3::new(128.0, 128.0, 0.0),
//!     Vec3::zeros(),
//!     Vec2::new(64.0, 64.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec4::zeros(),
//!     Color::WHITE,
//! )?;
//! batch.end()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

/// Common imports for batch users
pub mod prelude {
    pub use crate::{
        config::Config,
        core::config::BatchConfig,
        foundation::math::{Mat4, Vec2, Vec3, Vec4},
        render::{
            BatchState, Camera, Color, GraphicsDevice, MatrixProvider, Quad, QuadBatch, RenderError,
            RenderResult, TextureHandle, Vertex, Viewport,
        },
    };
}
