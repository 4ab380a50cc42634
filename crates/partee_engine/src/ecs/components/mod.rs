//! Built-in components
//!
//! Dependencies between them:
//! - `PhysicsComponent` ensures a `TransformComponent`
//! - `ColliderComponent` ensures a `PhysicsComponent` and updates after it
//! - `RenderComponent` ensures a `TransformComponent` and updates after it

pub mod transform;
pub mod physics;
pub mod collision;
pub mod renderable;

pub use transform::TransformComponent;
pub use physics::{PhysicsComponent, PhysicsHandle};
pub use collision::ColliderComponent;
pub use renderable::{RenderComponent, RenderShape};
