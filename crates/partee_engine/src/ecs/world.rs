//! ECS World implementation
//!
//! Owns every entity, issues their identifiers and carries the event bus that
//! components publish to during an update pass.

use std::collections::HashMap;

use slotmap::SlotMap;

use super::components::{PhysicsComponent, PhysicsHandle, RenderComponent};
use super::{EcsError, Entity, EntityId};
use crate::events::{CollisionEvent, EventBus};
use crate::render::Renderer;

/// ECS World containing all entities
#[derive(Debug, Default)]
pub struct World {
    entities: SlotMap<EntityId, Entity>,
    events: EventBus,
    /// Physics handles already wired to a collision response
    collision_responses: HashMap<EntityId, PhysicsHandle>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, empty entity with a fresh identifier
    pub fn create_entity(&mut self) -> &mut Entity {
        let id = self.entities.insert_with_key(Entity::with_id);
        log::debug!("Created entity {}", id);
        &mut self.entities[id]
    }

    /// Take ownership of an entity built outside the world.
    ///
    /// Components attached before this call saw no identifier and keep none.
    pub fn spawn(&mut self, entity: Entity) -> Result<EntityId, EcsError> {
        if let Ok(id) = entity.id() {
            return Err(EcsError::IdentityAlreadyAssigned { id });
        }
        let id = self.entities.insert(entity);
        self.entities[id].assign_id(id)?;
        log::debug!("Spawned entity {}", id);
        Ok(id)
    }

    /// Look up an entity
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Look up an entity mutably
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Remove an entity and drop its components
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(id);
        self.collision_responses.remove(&id);
        if removed.is_some() {
            log::debug!("Removed entity {}", id);
        }
        removed
    }

    /// Whether an entity with this identifier exists
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Iterate over all entities
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Event bus shared by all entities
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Mutable access to the event bus, for subscribing
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Update every entity once
    pub fn update(&mut self, dt: f32) {
        for (_, entity) in self.entities.iter_mut() {
            entity.update(&mut self.events, dt);
        }
    }

    /// Draw every renderable entity; returns the number of draw calls
    pub fn render(&self, renderer: &mut dyn Renderer) -> usize {
        self.entities
            .values()
            .filter_map(|entity| {
                let render = entity.get_component::<RenderComponent>()?;
                Some(render.render(entity, renderer))
            })
            .filter(|drawn| *drawn)
            .count()
    }

    /// Subscribe the entity's physics collision response to collision events
    /// that name this entity.
    ///
    /// Returns `false` without subscribing again if the entity's current
    /// physics component is already wired.
    pub fn subscribe_collision_response(&mut self, id: EntityId) -> Result<bool, EcsError> {
        let entity = self.entities.get(id).ok_or(EcsError::UnknownEntity(id))?;
        let handle = entity
            .get_component::<PhysicsComponent>()
            .ok_or(EcsError::ComponentUnavailable {
                component: std::any::type_name::<PhysicsComponent>(),
            })?
            .collision_response();

        if self
            .collision_responses
            .get(&id)
            .is_some_and(|wired| wired.is_alive() && wired.same_component(&handle))
        {
            log::debug!("Collision response for entity {} is already wired", id);
            return Ok(false);
        }
        self.collision_responses.insert(id, handle.clone());

        self.events.subscribe(move |event: &CollisionEvent| {
            if event.entity() == Some(id) {
                handle.on_collide(event);
            }
        });
        Ok(true)
    }
}
