//! # Core Engine Module
//!
//! Shared abstractions used throughout the engine. Currently this is the
//! unified configuration consumed by [`crate::Engine`].

pub mod config;

pub use config::{EngineConfig, TimingConfig};
pub use crate::config::{Config, ConfigError};
