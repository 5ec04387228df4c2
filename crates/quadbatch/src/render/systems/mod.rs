//! Rendering systems

pub mod batching;
