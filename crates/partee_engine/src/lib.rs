//! # Partee Engine
//!
//! A small entity-component engine with dependency-ordered component updates
//! and a typed event bus.
//!
//! ## Features
//!
//! - **Component Dependencies**: Components attach their prerequisites and
//!   update after the components they depend on
//! - **Cached Update Order**: Each entity sorts its components only after its
//!   component set changes
//! - **Event Bus**: Typed publish/subscribe channel shared by all entities
//! - **Headless Rendering**: Renderer trait with recording and logging backends
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use partee_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application<LogRenderer> for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine<LogRenderer>) -> Result<(), AppError> {
//!         let entity = engine.world.create_entity();
//!         entity.add_component(RenderComponent::new(RenderShape::Square))?;
//!         entity.add_component(ColliderComponent::new())?;
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine<LogRenderer>, _delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default().with_max_frames(100);
//!     let mut app = MyApp;
//!     Engine::run(config, LogRenderer::new(), &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

// Core engine modules
pub mod core;

pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use crate::core::EngineConfig;
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::{EngineConfig, TimingConfig},
        ecs::components::{
            ColliderComponent, PhysicsComponent, PhysicsHandle, RenderComponent, RenderShape,
            TransformComponent,
        },
        ecs::{Component, ComponentType, EcsError, Entity, EntityId, World},
        events::{CollisionEvent, Event, EventBus},
        foundation::math::{Mat4, Vec3},
        render::{DrawCommand, LogRenderer, RecordingRenderer, Renderer},
        AppError, Application, Engine, EngineError,
    };
}
