//! Entity implementation
//!
//! An entity owns at most one component per type and updates them in
//! dependency order: every component runs after the attached components it
//! names in [`Component::update_dependencies`].

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use slotmap::Key;

use super::{Component, ComponentType, EcsError};
use crate::events::EventBus;

slotmap::new_key_type! {
    /// Entity identifier issued by a [`World`](super::World)
    pub struct EntityId;
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data())
    }
}

/// A component slot is empty while its component is being updated.
type ComponentSlot = Option<Box<dyn Component>>;

/// Components in attachment order.
type ComponentMap = IndexMap<ComponentType, ComponentSlot>;

/// Container of components with a dependency-ordered update pass
pub struct Entity {
    id: Option<EntityId>,
    components: ComponentMap,
    update_order: Vec<ComponentType>,
    dirty: bool,
    /// Types whose prerequisite hooks are running
    attaching: Vec<ComponentType>,
}

impl Entity {
    /// Create an empty entity without an identifier
    pub fn new() -> Self {
        Self {
            id: None,
            components: IndexMap::new(),
            update_order: Vec::new(),
            dirty: true,
            attaching: Vec::new(),
        }
    }

    pub(crate) fn with_id(id: EntityId) -> Self {
        Self { id: Some(id), ..Self::new() }
    }

    /// Identifier assigned by the owning world
    pub fn id(&self) -> Result<EntityId, EcsError> {
        self.id.ok_or(EcsError::UnassignedIdentity)
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) -> Result<(), EcsError> {
        if let Some(existing) = self.id {
            return Err(EcsError::IdentityAlreadyAssigned { id: existing });
        }
        self.id = Some(id);
        Ok(())
    }

    /// Attach a component.
    ///
    /// Runs the component's prerequisite hook, then `on_attach`, then inserts it
    /// and invalidates the cached update order. Fails if a component of the same
    /// type is already attached, or if the prerequisite hook of a `T` being
    /// attached tries to attach another `T`. The existing component is untouched.
    pub fn add_component<T: Component>(&mut self, component: T) -> Result<&mut T, EcsError> {
        let component_type = ComponentType::of::<T>();
        self.ensure_absent(component_type)?;

        self.attaching.push(component_type);
        let prepared = component.require_dependencies(self);
        self.attaching.pop();
        prepared?;

        let mut component = component;
        component.on_attach(self);
        self.components.insert(component_type, Some(Box::new(component)));
        self.dirty = true;
        log::debug!("Attached {} to entity {}", component_type, self.label());

        self.components
            .get_mut(&component_type)
            .and_then(|slot| slot.as_deref_mut())
            .and_then(|component| component.downcast_mut::<T>())
            .ok_or(EcsError::ComponentUnavailable { component: component_type.name() })
    }

    /// Attach a default `T` unless one is already attached
    pub fn ensure_component<T: Component + Default>(&mut self) -> Result<(), EcsError> {
        if self.has_component::<T>() {
            return Ok(());
        }
        self.add_component(T::default()).map(|_| ())
    }

    /// Look up a component by type
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&ComponentType::of::<T>())
            .and_then(|slot| slot.as_deref())
            .and_then(|component| component.downcast_ref::<T>())
    }

    /// Mutably look up a component by type
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&ComponentType::of::<T>())
            .and_then(|slot| slot.as_deref_mut())
            .and_then(|component| component.downcast_mut::<T>())
    }

    /// Whether a component of type `T` is attached
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&ComponentType::of::<T>())
    }

    /// Attached components in attachment order
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.values().filter_map(|slot| slot.as_deref())
    }

    /// Types of the attached components in attachment order
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.components.keys().copied()
    }

    /// Number of attached components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component is attached
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Destroy every attached component
    pub fn clear_components(&mut self) {
        self.components.clear();
        self.update_order.clear();
        self.dirty = true;
    }

    /// Whether the cached update order is stale
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Component types in update order, recomputed first if stale
    pub fn update_order(&mut self) -> &[ComponentType] {
        self.resolve_update_order();
        &self.update_order
    }

    /// Update every component in dependency order
    pub fn update(&mut self, events: &mut EventBus, dt: f32) {
        self.resolve_update_order();

        let order = std::mem::take(&mut self.update_order);
        for component_type in &order {
            let Some(mut component) = self.components.get_mut(component_type).and_then(Option::take)
            else {
                continue;
            };

            log::trace!("Updating {} on entity {}", component_type, self.label());
            component.update(self, events, dt);

            // The slot is gone, or holds a replacement, if the component map
            // was cleared meanwhile.
            match self.components.get_mut(component_type) {
                Some(slot @ None) => *slot = Some(component),
                _ => log::debug!(
                    "Dropped detached {} on entity {}",
                    component_type,
                    self.label()
                ),
            }
        }
        self.update_order = order;
    }

    fn resolve_update_order(&mut self) {
        if !self.dirty {
            return;
        }
        self.sort_components();
        // A checked-out component hides its dependencies; sort again later.
        self.dirty = self.components.values().any(Option::is_none);
    }

    /// Depth-first, visit-once topological sort.
    ///
    /// Dependency cycles are not reported: the member reached first in
    /// attachment order is emitted after the other one.
    fn sort_components(&mut self) {
        let mut sorted = Vec::with_capacity(self.components.len());
        let mut visited = HashSet::with_capacity(self.components.len());

        for &component_type in self.components.keys() {
            visit(&self.components, component_type, &mut visited, &mut sorted);
        }

        log::trace!("Update order for entity {}: {:?}", self.label(), sorted);
        self.update_order = sorted;
    }

    fn ensure_absent(&self, component_type: ComponentType) -> Result<(), EcsError> {
        if self.components.contains_key(&component_type) || self.attaching.contains(&component_type) {
            log::warn!("Rejected duplicate {} on entity {}", component_type, self.label());
            return Err(EcsError::DuplicateComponent { component: component_type.name() });
        }
        Ok(())
    }

    fn label(&self) -> String {
        self.id.map_or_else(|| "<unassigned>".to_string(), |id| id.to_string())
    }
}

fn visit(
    components: &ComponentMap,
    component_type: ComponentType,
    visited: &mut HashSet<ComponentType>,
    sorted: &mut Vec<ComponentType>,
) {
    if !visited.insert(component_type) {
        return;
    }

    if let Some(component) = components.get(&component_type).and_then(|slot| slot.as_deref()) {
        for dependency in component.update_dependencies() {
            if components.contains_key(&dependency) {
                visit(components, dependency, visited, sorted);
            }
        }
    }

    sorted.push(component_type);
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .field("dirty", &self.dirty)
            .finish()
    }
}
