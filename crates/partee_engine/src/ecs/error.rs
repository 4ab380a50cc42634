//! ECS error types

use thiserror::Error;

use super::EntityId;

/// Structural errors raised while assembling or addressing entities.
///
/// These indicate a mistake in how the entity graph was put together and are
/// not expected to be retried. A component that is simply absent is not an
/// error; lookups return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// A component of this type is already attached
    #[error("component {component} is already attached to this entity")]
    DuplicateComponent {
        /// Type name of the rejected component
        component: &'static str,
    },

    /// The entity identifier was read before the owning world assigned one
    #[error("entity has no identifier assigned")]
    UnassignedIdentity,

    /// The entity already carries an identifier
    #[error("entity already has identifier {id}")]
    IdentityAlreadyAssigned {
        /// The identifier the entity already has
        id: EntityId,
    },

    /// The operation needs a component the entity cannot provide right now
    /// (absent, or checked out for its own update)
    #[error("component {component} is not available on this entity")]
    ComponentUnavailable {
        /// Type name of the requested component
        component: &'static str,
    },

    /// No entity with this identifier exists in the world
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),
}
