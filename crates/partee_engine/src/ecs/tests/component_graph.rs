//! Dependency resolution and update ordering with the built-in components

use crate::ecs::components::{
    ColliderComponent, PhysicsComponent, RenderComponent, RenderShape, TransformComponent,
};
use crate::ecs::{ComponentType, EcsError, Entity, World};
use crate::events::EventBus;
use crate::foundation::math::Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    fn types(entity: &mut Entity) -> Vec<ComponentType> {
        entity.update_order().to_vec()
    }

    #[test]
    fn test_collider_pulls_in_its_prerequisites() {
        let mut entity = Entity::new();
        entity.add_component(ColliderComponent::new()).unwrap();

        assert_eq!(entity.len(), 3);
        assert!(entity.has_component::<TransformComponent>());
        assert!(entity.has_component::<PhysicsComponent>());
        assert!(entity.has_component::<ColliderComponent>());
    }

    #[test]
    fn test_prerequisites_are_attached_first() {
        let mut entity = Entity::new();
        entity.add_component(ColliderComponent::new()).unwrap();

        let attached: Vec<_> = entity.component_types().collect();
        assert_eq!(
            attached,
            vec![
                ComponentType::of::<TransformComponent>(),
                ComponentType::of::<PhysicsComponent>(),
                ComponentType::of::<ColliderComponent>(),
            ]
        );
    }

    #[test]
    fn test_existing_prerequisite_is_kept() {
        let mut entity = Entity::new();
        entity
            .add_component(TransformComponent::from_position(Vec3::new(4.0, 5.0, 6.0)))
            .unwrap();
        entity.add_component(PhysicsComponent::new()).unwrap();

        let transform = entity.get_component::<TransformComponent>().unwrap();
        assert_eq!(transform.position, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(entity.len(), 2);
    }

    #[test]
    fn test_duplicate_after_implicit_attach_is_rejected() {
        let mut entity = Entity::new();
        entity.add_component(ColliderComponent::new()).unwrap();

        let result = entity.add_component(TransformComponent::new());
        assert!(matches!(result, Err(EcsError::DuplicateComponent { .. })));
        assert_eq!(entity.len(), 3);
    }

    #[test]
    fn test_collider_updates_after_physics() {
        let mut entity = Entity::new();
        entity.add_component(PhysicsComponent::new()).unwrap();
        entity.add_component(RenderComponent::new(RenderShape::Cube)).unwrap();
        entity.add_component(ColliderComponent::new()).unwrap();

        let order = types(&mut entity);
        let position = |t: ComponentType| order.iter().position(|o| *o == t).unwrap();
        assert!(
            position(ComponentType::of::<PhysicsComponent>())
                < position(ComponentType::of::<ColliderComponent>())
        );
        assert!(
            position(ComponentType::of::<TransformComponent>())
                < position(ComponentType::of::<RenderComponent>())
        );
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_order_is_recomputed_after_attach() {
        let mut entity = Entity::new();
        entity.add_component(PhysicsComponent::new()).unwrap();
        entity.update(&mut EventBus::new(), 0.1);
        assert!(!entity.is_dirty());
        assert_eq!(types(&mut entity).len(), 2);

        entity.add_component(ColliderComponent::new()).unwrap();
        assert!(entity.is_dirty());
        assert_eq!(types(&mut entity).last(), Some(&ComponentType::of::<ColliderComponent>()));
        assert!(!entity.is_dirty());
    }

    #[test]
    fn test_world_entities_update_independently() {
        let mut world = World::new();
        let fast = world.create_entity();
        let fast_id = fast.id().unwrap();
        fast.add_component(PhysicsComponent::with_velocity(Vec3::new(1.0, 0.0, 0.0))).unwrap();
        let slow_id = world.create_entity().id().unwrap();
        world
            .entity_mut(slow_id)
            .unwrap()
            .add_component(TransformComponent::new())
            .unwrap();

        world.update(1.0);

        let position = |id| world.entity(id).unwrap().get_component::<TransformComponent>().unwrap().position;
        assert_eq!(position(fast_id), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(position(slow_id), Vec3::zeros());
    }
}
