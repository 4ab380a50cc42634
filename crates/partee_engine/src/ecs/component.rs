//! Component trait and component type tags

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{EcsError, Entity};
use crate::events::EventBus;

/// Stable tag identifying a component variant.
///
/// Compares and hashes by [`TypeId`]; the type name is kept for diagnostics.
#[derive(Clone, Copy)]
pub struct ComponentType {
    id: TypeId,
    name: &'static str,
}

impl ComponentType {
    /// Tag of the component type `T`
    pub fn of<T: Component>() -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    /// Tag of a type-erased component
    pub fn of_val(component: &dyn Component) -> Self {
        Self { id: Any::type_id(component.as_any()), name: component.type_name() }
    }

    /// Full type name of the component
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentType {}

impl Hash for ComponentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Type-erased access to a component, implemented for every `'static` type
pub trait AsAny: Any {
    /// Borrow as [`Any`]
    fn as_any(&self) -> &dyn Any;
    /// Mutably borrow as [`Any`]
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Name of the concrete type
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Per-entity unit of state and behavior.
///
/// An entity holds at most one component of each type. Lifecycle of an attach:
/// [`require_dependencies`](Component::require_dependencies), then
/// [`on_attach`](Component::on_attach), then insertion into the entity. Every
/// hook has a no-op default.
pub trait Component: AsAny {
    /// Attach prerequisite components onto `owner` if they are missing.
    ///
    /// Runs before this component is inserted, so `owner` does not contain it yet.
    fn require_dependencies(&self, _owner: &mut Entity) -> Result<(), EcsError> {
        Ok(())
    }

    /// Called once, right before the component becomes reachable from `owner`
    fn on_attach(&mut self, _owner: &Entity) {}

    /// Component types that must be updated before this one.
    ///
    /// Types not attached to the entity are skipped.
    fn update_dependencies(&self) -> Vec<ComponentType> {
        Vec::new()
    }

    /// Advance by `dt` seconds.
    ///
    /// While this runs the component is checked out of `owner`: looking up its
    /// own type yields `None`.
    fn update(&mut self, _owner: &mut Entity, _events: &mut EventBus, _dt: f32) {}
}

impl dyn Component {
    /// Whether the component is a `T`
    pub fn is<T: Component>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to a concrete component
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete component
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Tag of this component's type
    pub fn component_type(&self) -> ComponentType {
        ComponentType::of_val(self)
    }
}
