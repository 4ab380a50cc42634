//! Core engine implementation

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::{
    application::Application,
    config::ConfigError,
    core::EngineConfig,
    ecs::{EcsError, World},
    foundation::time::FrameClock,
    render::Renderer,
};

/// Main engine struct
///
/// The engine owns the world and the renderer and drives the frame loop:
/// every frame updates the world once, then draws it.
pub struct Engine<R: Renderer> {
    /// ECS world containing all entities and the event bus
    pub world: World,

    renderer: R,
    clock: FrameClock,
    config: EngineConfig,
    running: bool,
    frame_count: u64,
}

impl<R: Renderer> Engine<R> {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, mut renderer: R) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!("Initializing engine ({}x{})...", config.width, config.height);

        renderer.initialize(config.width, config.height);
        let clock = FrameClock::new(config.timing.nominal_delta, config.timing.max_frame_delta);

        Ok(Self {
            world: World::new(),
            renderer,
            clock,
            config,
            running: true,
            frame_count: 0,
        })
    }

    /// Run the main loop with the given application until it stops
    pub fn run<A: Application<R>>(
        config: EngineConfig,
        renderer: R,
        app: &mut A,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(config, renderer)?;
        engine.run_app(app)?;
        Ok(engine)
    }

    /// Run the main loop on an existing engine
    ///
    /// Stops when [`stop`](Self::stop) is requested or after `max_frames`
    /// frames. `cleanup` runs even if an update fails.
    pub fn run_app<A: Application<R>>(&mut self, app: &mut A) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::Application(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");
        self.running = true;
        let result = self.main_loop(app);

        app.cleanup(self);
        log::info!("Engine shutdown complete after {} frame(s)", self.frame_count);
        result
    }

    fn main_loop<A: Application<R>>(&mut self, app: &mut A) -> Result<(), EngineError> {
        while self.running {
            let frame_start = Instant::now();
            if self.config.max_frames.is_some_and(|max| self.frame_count >= max) {
                log::info!("Reached frame limit of {}", self.frame_count);
                break;
            }

            let delta_time = match self.config.timing.fixed_delta {
                Some(delta) => self.clock.advance(delta),
                None => self.clock.tick(),
            };

            app.update(self, delta_time)
                .map_err(|e| EngineError::Application(format!("App update: {}", e)))?;
            if !self.running {
                break;
            }
            self.step(delta_time);
            self.pace_frame(frame_start);
        }
        Ok(())
    }

    /// Run a single frame: update the world, then draw it
    pub fn step(&mut self, delta_time: f32) {
        self.world.update(delta_time);

        self.renderer.clear();
        let drawn = self.world.render(&mut self.renderer);
        self.renderer.present();

        self.frame_count += 1;
        log::trace!("Frame {} drew {} entities", self.frame_count, drawn);
    }

    fn pace_frame(&self, frame_start: Instant) {
        let Some(fps) = self.config.timing.target_fps else {
            return;
        };
        let budget = 1.0 / fps as f32;
        let remaining = budget - frame_start.elapsed().as_secs_f32();
        if remaining > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(remaining));
        }
    }

    /// Request engine shutdown
    pub fn stop(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the ECS world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get mutable access to the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The application failed
    #[error("Application error: {0}")]
    Application(String),

    /// Entity assembly failed
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),
}
