//! Typed publish/subscribe event bus
//!
//! Key principles:
//! - Registration system (only subscribers of the emitted type are notified)
//! - Synchronous delivery, in subscription order
//! - Explicit bus instance, owned by the world and handed to component updates

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::ecs::EntityId;
use crate::foundation::math::Vec3;

/// Marker trait for values that can travel through an [`EventBus`]
pub trait Event: Any {}

type Subscriber = Box<dyn FnMut(&dyn Any)>;

/// Subscribers registered for one event type
struct Channel {
    name: &'static str,
    subscribers: Vec<Subscriber>,
}

/// Event bus keyed by event type
///
/// Subscribers only receive a shared reference to the event and cannot reach
/// the bus they are registered on, so an emission never re-enters itself.
#[derive(Default)]
pub struct EventBus {
    channels: HashMap<TypeId, Channel>,
}

impl EventBus {
    /// Create a new empty event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future emission of `E`
    ///
    /// There is no unsubscribe; callbacks live as long as the bus.
    pub fn subscribe<E: Event>(&mut self, mut callback: impl FnMut(&E) + 'static) {
        let channel = self.channels.entry(TypeId::of::<E>()).or_insert_with(|| Channel {
            name: std::any::type_name::<E>(),
            subscribers: Vec::new(),
        });

        channel.subscribers.push(Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                callback(event);
            }
        }));
        log::debug!(
            "Subscribed to {} ({} subscriber(s))",
            channel.name,
            channel.subscribers.len()
        );
    }

    /// Deliver `event` to every subscriber of `E`, in subscription order
    ///
    /// Returns the number of subscribers invoked; emitting with no subscribers
    /// is a no-op.
    pub fn emit<E: Event>(&mut self, event: &E) -> usize {
        let Some(channel) = self.channels.get_mut(&TypeId::of::<E>()) else {
            log::trace!("No subscribers for {}", std::any::type_name::<E>());
            return 0;
        };

        log::trace!("Emitting {} to {} subscriber(s)", channel.name, channel.subscribers.len());
        let event: &dyn Any = event;
        for subscriber in &mut channel.subscribers {
            subscriber(event);
        }
        channel.subscribers.len()
    }

    /// Number of subscribers registered for `E`
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.channels
            .get(&TypeId::of::<E>())
            .map_or(0, |channel| channel.subscribers.len())
    }

    /// Drop every subscriber
    pub fn clear(&mut self) {
        self.channels.clear();
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.channels.values().map(|channel| (channel.name, channel.subscribers.len())))
            .finish()
    }
}

/// Raised by a collider whose trigger condition holds during its update
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    entity: Option<EntityId>,
    position: Vec3,
}

impl CollisionEvent {
    /// Create a collision event for an entity at a position
    pub fn new(entity: Option<EntityId>, position: Vec3) -> Self {
        Self { entity, position }
    }

    /// Entity whose collider fired, if it belongs to a world
    pub fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    /// Position of the entity when the collider fired
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Event for CollisionEvent {}
