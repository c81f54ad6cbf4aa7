use crate::api::config::SimConfig;
use crate::api::world::{WorldBuilder, WorldSetup};
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::state::InputState;
use crate::renderer::camera::CameraRig;
use crate::systems::{flight, orbit};
use crate::world::{RocketState, WorldModel};

/// Outcome of the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Delta-time handed to the systems, after clamping.
    pub dt: f32,
    /// Whether the soft boundary pulled the rocket this frame.
    pub boundary_active: bool,
}

/// One running flight session: everything the per-frame systems read and write.
pub struct Simulation {
    config: SimConfig,
    pub input: InputState,
    queue: InputQueue,
    pub rocket: RocketState,
    pub world: WorldModel,
    pub camera: CameraRig,
    pub scene: Scene,
    clock: FrameClock,
    stats: FrameStats,
}

impl Simulation {
    /// Assemble a simulation from an already built world, running with the
    /// config the world was built against.
    pub fn new(setup: WorldSetup) -> Self {
        let (config, scene, world, rocket) = setup.into_parts();
        log::info!(
            "simulation ready: {} planets, {} moons, {} asteroids, {} visuals",
            world.planet_count(),
            world.moon_count(),
            world.asteroid_count(),
            scene.len()
        );
        Self {
            input: InputState::new(),
            queue: InputQueue::new(),
            rocket,
            world,
            camera: CameraRig::new(&config.camera),
            scene,
            clock: FrameClock::new(config.clock.max_delta),
            stats: FrameStats::default(),
            config,
        }
    }

    /// Run `builder` against `config` and wrap the result.
    /// An invalid config is logged and replaced by the defaults.
    pub fn build<W: WorldBuilder>(builder: &mut W, config: SimConfig) -> Self {
        let mut setup = WorldSetup::with_config(config);
        builder.build(&mut setup);
        Self::new(setup)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Queue a host key-down. Returns whether the code is bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.queue.push_code(&self.config.keys, code, true)
    }

    /// Queue a host key-up. Returns whether the code is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        self.queue.push_code(&self.config.keys, code, false)
    }

    /// Queue a release of every key, for hosts that lose focus.
    pub fn release_all(&mut self) {
        self.queue.push(InputEvent::ReleaseAll);
    }

    /// Advance one display frame stamped `now_ms` (host milliseconds).
    ///
    /// Queued input lands first, then flight, orbits and camera run in that
    /// order against the same delta. Returns the delta used.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = self.clock.advance(now_ms);
        self.queue.apply_to(&mut self.input);

        let boundary_active = flight::update_rocket(
            &self.input,
            dt,
            &mut self.rocket,
            &mut self.camera,
            &mut self.scene,
            &self.config.flight,
            self.config.boundary_limit(),
        );
        orbit::update_bodies(&mut self.world, &mut self.scene, dt, now_ms, &self.config.orbit);
        self.camera.update(&self.rocket);

        self.stats = FrameStats { dt, boundary_active };
        dt
    }
}
