//! # Engine Configuration
//!
//! Core engine behavior: logging, viewport size handed to the renderer,
//! frame timing and headless run limits. Loadable from TOML or RON through
//! [`Config`]; fields missing from a file keep their defaults.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// # Frame Timing Configuration
///
/// Controls how the frame delta handed to `Entity::update` is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delta used in place of a measured delta that exceeds `max_frame_delta`
    pub nominal_delta: f32,
    /// Largest measured delta accepted as-is
    pub max_frame_delta: f32,
    /// Use this delta for every frame instead of measuring wall-clock time
    pub fixed_delta: Option<f32>,
    /// Sleep between frames to approach this rate
    pub target_fps: Option<u32>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            nominal_delta: 0.016,
            max_frame_delta: 0.1,
            fixed_delta: None,
            target_fps: None,
        }
    }
}

impl TimingConfig {
    /// Validate the timing values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nominal_delta.is_nan() || self.nominal_delta <= 0.0 {
            return Err(ConfigError::Invalid("nominal_delta must be positive".to_string()));
        }
        if self.max_frame_delta.is_nan() || self.max_frame_delta <= 0.0 {
            return Err(ConfigError::Invalid("max_frame_delta must be positive".to_string()));
        }
        if self.nominal_delta > self.max_frame_delta {
            return Err(ConfigError::Invalid(format!(
                "nominal_delta ({}) exceeds max_frame_delta ({})",
                self.nominal_delta, self.max_frame_delta
            )));
        }
        if let Some(fixed) = self.fixed_delta {
            if fixed.is_nan() || fixed <= 0.0 {
                return Err(ConfigError::Invalid("fixed_delta must be positive".to_string()));
            }
        }
        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// # Engine Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Viewport width handed to the renderer
    pub width: u32,
    /// Viewport height handed to the renderer
    pub height: u32,
    /// Frame timing
    pub timing: TimingConfig,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            width: 800,
            height: 600,
            timing: TimingConfig::default(),
            max_frames: None,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set viewport size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Step every frame with a fixed delta
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.timing.fixed_delta = Some(delta);
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.timing.target_fps = Some(fps);
        self
    }

    /// Stop after a number of frames
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        self.timing.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.nominal_delta, 0.016);
        assert_eq!(config.timing.max_frame_delta, 0.1);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(EngineConfig::new().with_size(0, 600).validate().is_err());
        assert!(EngineConfig::new().with_fixed_delta(-0.1).validate().is_err());
        assert!(EngineConfig::new().with_target_fps(0).validate().is_err());

        let mut config = EngineConfig::new();
        config.timing.nominal_delta = 0.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_nan_deltas() {
        assert!(EngineConfig::new().with_fixed_delta(f32::NAN).validate().is_err());

        let mut config = EngineConfig::new();
        config.timing.nominal_delta = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::new();
        config.timing.max_frame_delta = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            log_level = "debug"
            max_frames = 40

            [timing]
            fixed_delta = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_frames, Some(40));
        assert_eq!(config.timing.fixed_delta, Some(0.1));
        assert_eq!(config.timing.max_frame_delta, 0.1);
        assert_eq!(config.width, 800);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::new().with_size(320, 240).with_max_frames(10);

        for name in ["engine.toml", "engine.ron"] {
            let path = dir.path().join(name);
            config.save_to_file(&path).unwrap();
            assert_eq!(EngineConfig::load_from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
