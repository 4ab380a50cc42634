//! Physics component
//!
//! Integrates velocity from acceleration and moves the owner's transform.
//! Motion state is shared with [`PhysicsHandle`]s so an event subscriber can
//! react to a collision synchronously, while the component stays owned by its
//! entity.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::ecs::components::TransformComponent;
use crate::ecs::{Component, EcsError, Entity, EntityId};
use crate::events::{CollisionEvent, EventBus};
use crate::foundation::math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Motion {
    velocity: Vec3,
    acceleration: Vec3,
}

impl Motion {
    fn bounce(&mut self) {
        self.acceleration = -self.acceleration;
    }
}

/// Velocity and acceleration of an entity
#[derive(Debug, Default)]
pub struct PhysicsComponent {
    motion: Rc<RefCell<Motion>>,
    owner: Option<EntityId>,
}

impl PhysicsComponent {
    /// Create a resting physics component
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a physics component with an initial velocity
    pub fn with_velocity(velocity: Vec3) -> Self {
        let physics = Self::new();
        physics.motion.borrow_mut().velocity = velocity;
        physics
    }

    /// Linear velocity in units per second
    pub fn velocity(&self) -> Vec3 {
        self.motion.borrow().velocity
    }

    /// Linear acceleration in units per second squared
    pub fn acceleration(&self) -> Vec3 {
        self.motion.borrow().acceleration
    }

    /// Set velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.motion.borrow_mut().velocity = velocity;
    }

    /// Accumulate a continuous force into the acceleration
    pub fn apply_force(&mut self, force: Vec3) {
        self.motion.borrow_mut().acceleration += force;
    }

    /// Add an instantaneous change of velocity
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.motion.borrow_mut().velocity += impulse;
    }

    /// Zero the acceleration
    pub fn reset_acceleration(&mut self) {
        self.motion.borrow_mut().acceleration = Vec3::zeros();
    }

    /// Collision response: invert the acceleration
    pub fn on_collide(&mut self, _event: &CollisionEvent) {
        self.motion.borrow_mut().bounce();
    }

    /// Entity this component was attached to, if it had an identifier then
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Non-owning handle for wiring [`on_collide`](Self::on_collide) into an
    /// event subscriber
    pub fn collision_response(&self) -> PhysicsHandle {
        PhysicsHandle { motion: Rc::downgrade(&self.motion), owner: self.owner }
    }
}

impl Component for PhysicsComponent {
    fn require_dependencies(&self, owner: &mut Entity) -> Result<(), EcsError> {
        owner.ensure_component::<TransformComponent>()
    }

    fn on_attach(&mut self, owner: &Entity) {
        self.owner = owner.id().ok();
    }

    fn update(&mut self, owner: &mut Entity, _events: &mut EventBus, dt: f32) {
        let step = {
            let mut motion = self.motion.borrow_mut();
            let acceleration = motion.acceleration;
            motion.velocity += acceleration * dt;
            motion.velocity * dt
        };

        match owner.get_component_mut::<TransformComponent>() {
            Some(transform) => transform.translate(step),
            None => log::debug!("Physics update skipped: entity has no transform"),
        }
    }
}

/// Weak handle onto a [`PhysicsComponent`]'s motion.
///
/// Does not keep the component alive; once it is destroyed the handle is inert.
#[derive(Debug, Clone)]
pub struct PhysicsHandle {
    motion: Weak<RefCell<Motion>>,
    owner: Option<EntityId>,
}

impl PhysicsHandle {
    /// Entity the component belonged to when the handle was made
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Whether the component still exists
    pub fn is_alive(&self) -> bool {
        self.motion.strong_count() > 0
    }

    /// Whether both handles point at the same component
    pub fn same_component(&self, other: &Self) -> bool {
        self.motion.ptr_eq(&other.motion)
    }

    /// Apply the collision response; returns whether it was applied
    pub fn on_collide(&self, event: &CollisionEvent) -> bool {
        let Some(motion) = self.motion.upgrade() else {
            return false;
        };
        let Ok(mut motion) = motion.try_borrow_mut() else {
            log::warn!("Collision at {:?} ignored: physics state is busy", event.position());
            return false;
        };
        motion.bounce();
        true
    }
}
