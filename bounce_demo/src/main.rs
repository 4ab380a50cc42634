//! Bounce demo application
//!
//! Headless scene with a single square that is pushed right and up. Once it
//! crosses x = 0 its collider fires every frame and the physics collision
//! response keeps flipping its acceleration.
//!
//! Usage: `bounce_demo [config.toml|config.ron]`

use std::cell::Cell;
use std::rc::Rc;

use partee_engine::foundation::logging;
use partee_engine::prelude::*;

/// Frames to run when the configuration sets no limit
const DEFAULT_FRAMES: u64 = 40;

struct BounceApp {
    ball: Option<EntityId>,
    collisions: Rc<Cell<u64>>,
}

impl BounceApp {
    fn new() -> Self {
        Self {
            ball: None,
            collisions: Rc::new(Cell::new(0)),
        }
    }
}

impl Application<LogRenderer> for BounceApp {
    fn initialize(&mut self, engine: &mut Engine<LogRenderer>) -> Result<(), AppError> {
        log::info!("Building bounce scene...");

        let ball = engine.world.create_entity();
        let id = ball.id()?;
        ball.add_component(TransformComponent::from_position(Vec3::new(-3.0, -2.0, 0.0)))?;
        ball.add_component(RenderComponent::new(RenderShape::Square))?;

        let physics = ball.add_component(PhysicsComponent::new())?;
        physics.apply_impulse(Vec3::new(5.0, 0.0, 0.0));
        physics.apply_force(Vec3::new(0.0, 30.0, 0.0));
        ball.add_component(ColliderComponent::new())?;

        let collisions = Rc::clone(&self.collisions);
        engine.world.events_mut().subscribe(move |event: &CollisionEvent| {
            collisions.set(collisions.get() + 1);
            let position = event.position();
            log::info!(
                "Collision #{} at ({:.2}, {:.2}, {:.2})",
                collisions.get(),
                position.x,
                position.y,
                position.z
            );
        });
        engine.world.subscribe_collision_response(id)?;

        self.ball = Some(id);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine<LogRenderer>, _delta_time: f32) -> Result<(), AppError> {
        let Some(id) = self.ball else {
            return Ok(());
        };
        let Some(ball) = engine.world.entity(id) else {
            log::warn!("Ball {} is gone, stopping", id);
            engine.stop();
            return Ok(());
        };

        if let Some(transform) = ball.get_component::<TransformComponent>() {
            log::debug!(
                "Frame {}: ball at ({:.2}, {:.2})",
                engine.frame_count() + 1,
                transform.position.x,
                transform.position.y
            );
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine<LogRenderer>) {
        let acceleration = self
            .ball
            .and_then(|id| engine.world.entity(id))
            .and_then(|ball| ball.get_component::<PhysicsComponent>())
            .map(PhysicsComponent::acceleration);

        log::info!(
            "Bounce demo finished: {} frame(s), {} collision(s), {} draw call(s), final acceleration {:?}",
            engine.frame_count(),
            self.collisions.get(),
            engine.renderer().draw_calls(),
            acceleration
        );
    }
}

fn load_config() -> Result<EngineConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from_file(path),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;
    if config.max_frames.is_none() {
        config.max_frames = Some(DEFAULT_FRAMES);
    }
    logging::init_with_level(&config.log_level);
    log::info!("Starting bounce demo with {:?}", config);

    let mut app = BounceApp::new();
    Engine::run(config, LogRenderer::new(), &mut app)?;
    Ok(())
}
