//! Foundation module
//!
//! Math aliases and matrix constructors shared by the camera and the batch,
//! plus logger setup for hosts and tests.

pub mod logging;
pub mod math;
