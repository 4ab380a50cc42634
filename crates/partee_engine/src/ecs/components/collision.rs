//! Collider component
//!
//! Runs after physics and raises a [`CollisionEvent`] for every update in which
//! the owner sits past the trigger plane.

use crate::ecs::components::{PhysicsComponent, TransformComponent};
use crate::ecs::{Component, ComponentType, EcsError, Entity, EntityId};
use crate::events::{CollisionEvent, EventBus};

/// Colliders fire while the owner's x coordinate is greater than this.
pub const TRIGGER_PLANE_X: f32 = 0.0;

/// Emits collision events for its owner
#[derive(Debug, Default)]
pub struct ColliderComponent {
    owner: Option<EntityId>,
    collisions: u64,
}

impl ColliderComponent {
    /// Create a new collider
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity this collider was attached to, if it had an identifier then
    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Number of collision events raised so far
    pub fn collision_count(&self) -> u64 {
        self.collisions
    }
}

impl Component for ColliderComponent {
    fn require_dependencies(&self, owner: &mut Entity) -> Result<(), EcsError> {
        owner.ensure_component::<PhysicsComponent>()
    }

    fn on_attach(&mut self, owner: &Entity) {
        self.owner = owner.id().ok();
    }

    fn update_dependencies(&self) -> Vec<ComponentType> {
        vec![ComponentType::of::<PhysicsComponent>()]
    }

    fn update(&mut self, owner: &mut Entity, events: &mut EventBus, _dt: f32) {
        let Some(transform) = owner.get_component::<TransformComponent>() else {
            return;
        };
        if transform.position.x <= TRIGGER_PLANE_X {
            return;
        }

        let event = CollisionEvent::new(owner.id().ok().or(self.owner), transform.position);
        self.collisions += 1;
        let delivered = events.emit(&event);
        log::debug!(
            "Collision at {:?} delivered to {} subscriber(s)",
            event.position(),
            delivered
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entity_at(x: f32) -> Entity {
        let mut entity = Entity::new();
        entity
            .add_component(TransformComponent::from_position(Vec3::new(x, 0.0, 0.0)))
            .unwrap();
        entity.add_component(ColliderComponent::new()).unwrap();
        entity
    }

    fn collect_collisions(bus: &mut EventBus) -> Rc<RefCell<Vec<CollisionEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe(move |event: &CollisionEvent| sink.borrow_mut().push(event.clone()));
        seen
    }

    #[test]
    fn test_attach_ensures_physics_and_transform() {
        let mut entity = Entity::new();
        entity.add_component(ColliderComponent::new()).unwrap();

        assert!(entity.has_component::<PhysicsComponent>());
        assert!(entity.has_component::<TransformComponent>());
        assert_eq!(entity.len(), 3);
    }

    #[test]
    fn test_updates_after_physics() {
        let mut entity = Entity::new();
        entity.add_component(ColliderComponent::new()).unwrap();

        let order = entity.update_order().to_vec();
        let physics = order.iter().position(|t| *t == ComponentType::of::<PhysicsComponent>());
        let collider = order.iter().position(|t| *t == ComponentType::of::<ColliderComponent>());
        assert!(physics < collider);
    }

    #[test]
    fn test_no_event_at_or_behind_trigger_plane() {
        let mut bus = EventBus::new();
        let seen = collect_collisions(&mut bus);

        for x in [-1.0, 0.0] {
            let mut entity = entity_at(x);
            entity.update(&mut bus, 0.1);
        }
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_event_past_trigger_plane() {
        let mut bus = EventBus::new();
        let seen = collect_collisions(&mut bus);

        let mut entity = entity_at(0.25);
        entity.update(&mut bus, 0.1);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].position(), Vec3::new(0.25, 0.0, 0.0));
        assert_eq!(seen.borrow()[0].entity(), None);
        assert_eq!(entity.get_component::<ColliderComponent>().unwrap().collision_count(), 1);
    }
}
