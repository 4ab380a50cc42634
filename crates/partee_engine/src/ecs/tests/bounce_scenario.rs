//! A renderable, physical, colliding entity crossing the trigger plane

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;

use crate::ecs::components::{
    ColliderComponent, PhysicsComponent, RenderComponent, RenderShape, TransformComponent,
};
use crate::ecs::{EntityId, World};
use crate::events::CollisionEvent;
use crate::foundation::math::Vec3;
use crate::render::{DrawCommand, RecordingRenderer};

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.1;

    fn bounce_world() -> (World, EntityId) {
        let mut world = World::new();
        let entity = world.create_entity();
        let id = entity.id().unwrap();
        entity.add_component(RenderComponent::new(RenderShape::Square)).unwrap();
        entity
            .get_component_mut::<TransformComponent>()
            .unwrap()
            .set_position(Vec3::new(-3.0, -2.0, 0.0));
        let physics = entity.add_component(PhysicsComponent::new()).unwrap();
        physics.apply_impulse(Vec3::new(5.0, 0.0, 0.0));
        physics.apply_force(Vec3::new(0.0, 30.0, 0.0));
        entity.add_component(ColliderComponent::new()).unwrap();
        (world, id)
    }

    fn record_collisions(world: &mut World) -> Rc<RefCell<Vec<CollisionEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        world
            .events_mut()
            .subscribe(move |event: &CollisionEvent| sink.borrow_mut().push(event.clone()));
        seen
    }

    fn acceleration(world: &World, id: EntityId) -> Vec3 {
        world.entity(id).unwrap().get_component::<PhysicsComponent>().unwrap().acceleration()
    }

    #[test]
    fn test_no_collision_before_crossing() {
        let (mut world, id) = bounce_world();
        let seen = record_collisions(&mut world);
        world.subscribe_collision_response(id).unwrap();

        for _ in 0..6 {
            world.update(DT);
        }

        let transform = world.entity(id).unwrap().get_component::<TransformComponent>().unwrap();
        assert_relative_eq!(transform.position.x, 0.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(acceleration(&world, id), Vec3::new(0.0, 30.0, 0.0));
    }

    #[test]
    fn test_first_collision_flips_acceleration() {
        let (mut world, id) = bounce_world();
        let seen = record_collisions(&mut world);
        world.subscribe_collision_response(id).unwrap();

        for _ in 0..7 {
            world.update(DT);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].entity(), Some(id));
        assert_relative_eq!(seen[0].position().x, 0.5);
        assert_eq!(acceleration(&world, id), Vec3::new(0.0, -30.0, 0.0));
    }

    #[test]
    fn test_collision_fires_every_frame_past_the_plane() {
        let (mut world, id) = bounce_world();
        let seen = record_collisions(&mut world);
        world.subscribe_collision_response(id).unwrap();

        for _ in 0..40 {
            world.update(DT);
        }

        assert_eq!(seen.borrow().len(), 34);
        let collider = world.entity(id).unwrap().get_component::<ColliderComponent>().unwrap();
        assert_eq!(collider.collision_count(), 34);
        assert_eq!(acceleration(&world, id), Vec3::new(0.0, 30.0, 0.0));
    }

    #[test]
    fn test_all_subscribers_see_each_collision() {
        let (mut world, _) = bounce_world();
        let first = record_collisions(&mut world);
        let second = record_collisions(&mut world);

        for _ in 0..10 {
            world.update(DT);
        }

        assert_eq!(first.borrow().len(), 4);
        assert_eq!(*first.borrow(), *second.borrow());
    }

    #[test]
    fn test_response_ignores_other_entities() {
        let (mut world, id) = bounce_world();
        let bystander = world.create_entity();
        let bystander_id = bystander.id().unwrap();
        bystander.add_component(PhysicsComponent::new()).unwrap();
        bystander
            .get_component_mut::<PhysicsComponent>()
            .unwrap()
            .apply_force(Vec3::new(1.0, 0.0, 0.0));
        world.subscribe_collision_response(bystander_id).unwrap();

        for _ in 0..7 {
            world.update(DT);
        }

        assert_eq!(acceleration(&world, id), Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(acceleration(&world, bystander_id), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_render_follows_the_entity() {
        let (mut world, _) = bounce_world();
        let mut renderer = RecordingRenderer::new();

        world.update(DT);
        world.render(&mut renderer);

        match renderer.commands() {
            [DrawCommand::Square { position, size }] => {
                assert_relative_eq!(position.x, -2.5);
                assert_relative_eq!(*size, 1.0);
            }
            other => panic!("unexpected draw commands: {:?}", other),
        }
    }
}
