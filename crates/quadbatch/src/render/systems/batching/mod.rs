//! Batch rendering system
//!
//! Accumulates quads into a fixed buffer and submits them in as few draw
//! calls as the buffer size allows.

pub mod quad_batch;
pub mod stats;

pub use quad_batch::{BatchState, QuadBatch, DEFAULT_CAPACITY, VERTICES_PER_QUAD};
pub use stats::BatchStats;
