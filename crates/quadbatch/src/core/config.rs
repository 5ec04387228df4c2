//! # Batch Configuration
//!
//! Serializable settings for a [`QuadBatch`](crate::render::QuadBatch).
//! Loadable from TOML or RON through the [`Config`] trait:
//!
//! ```toml
//! capacity = 512
//! alpha = 0.8
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::render::systems::batching::{DEFAULT_CAPACITY, VERTICES_PER_QUAD};
use crate::render::{RenderError, RenderResult};

/// Settings for a quad batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Quads per flush
    pub capacity: usize,
    /// Opacity applied through alpha blending, in `[0, 1]`
    pub alpha: f32,
}

impl BatchConfig {
    /// Create a configuration with the given capacity and default blending
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Set the quad capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the blend alpha
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check capacity and alpha
    pub fn validate(&self) -> RenderResult<()> {
        self.vertex_capacity()?;
        validate_alpha(self.alpha)
    }

    /// Size of the vertex buffer needed for `capacity` quads
    ///
    /// # Errors
    /// [`RenderError::InvalidArgument`] if the capacity is zero or the
    /// buffer size does not fit in `usize`.
    pub fn vertex_capacity(&self) -> RenderResult<usize> {
        if self.capacity < 1 {
            return Err(RenderError::InvalidArgument(
                "batch must have a capacity of at least one quad".to_string(),
            ));
        }
        self.capacity.checked_mul(VERTICES_PER_QUAD).ok_or_else(|| {
            RenderError::InvalidArgument(format!(
                "capacity of {} quads overflows the vertex buffer size",
                self.capacity
            ))
        })
    }
}

pub(crate) fn validate_alpha(alpha: f32) -> RenderResult<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(RenderError::InvalidArgument(format!(
            "alpha must be within [0, 1], got {alpha}"
        )));
    }
    Ok(())
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            alpha: 1.0,
        }
    }
}

impl Config for BatchConfig {}
