//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::ecs::EcsError;
use crate::engine::{Engine, EngineError};
use crate::render::Renderer;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine.
pub trait Application<R: Renderer> {
    /// Initialize the application
    ///
    /// Called once before the first frame. Use this to build the initial
    /// entities and subscribe to events.
    fn initialize(&mut self, engine: &mut Engine<R>) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame, before the world is updated and drawn.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Clamped frame time in seconds
    fn update(&mut self, engine: &mut Engine<R>, delta_time: f32) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once when the main loop ends, including after a failed update.
    fn cleanup(&mut self, _engine: &mut Engine<R>) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Entity assembly error
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
