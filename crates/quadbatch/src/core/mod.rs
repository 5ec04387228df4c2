//! Batch configuration

pub mod config;

pub use config::BatchConfig;
