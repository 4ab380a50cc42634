//! Entity-Component-System implementation
//!
//! Entities own their components directly and update them in dependency
//! order. The [`World`] issues entity identifiers and owns the event bus.

pub mod component;
pub mod components;
pub mod entity;
pub mod error;
pub mod world;

#[cfg(test)]
mod tests;

pub use component::{AsAny, Component, ComponentType};
pub use entity::{Entity, EntityId};
pub use error::EcsError;
pub use world::World;
