use crate::api::config::SimConfig;
use crate::api::types::VisualId;
use crate::components::visual::Visual;
use crate::core::scene::Scene;
use crate::world::{Body, RocketState, WorldModel};

/// The contract every world must fulfill.
///
/// The builder lays out the scene once; after that the simulation owns
/// every body and visual and only mutates their numeric fields.
pub trait WorldBuilder {
    /// Return simulation configuration. Called once before `build` unless
    /// the host supplied its own; `build` should read [`WorldSetup::config`].
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Spawn visuals, register bodies and place the rocket.
    fn build(&mut self, world: &mut WorldSetup);
}

/// Mutable access to the initial world, passed to [`WorldBuilder::build`].
pub struct WorldSetup {
    pub scene: Scene,
    pub bodies: WorldModel,
    pub rocket: RocketState,
    config: SimConfig,
    next_id: u32,
}

impl WorldSetup {
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// A setup for a simulation that will run with `config`.
    /// An invalid config is replaced by the defaults.
    pub fn with_config(config: SimConfig) -> Self {
        Self {
            config: config.or_default(),
            scene: Scene::new(),
            bodies: WorldModel::new(),
            rocket: RocketState::default(),
            next_id: 1,
        }
    }

    /// The config the simulation will run with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate the next unique visual ID.
    pub fn next_id(&mut self) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocate an ID, let `make` build the visual around it and spawn it.
    pub fn spawn(&mut self, make: impl FnOnce(VisualId) -> Visual) -> VisualId {
        let id = self.next_id();
        self.scene.spawn(make(id));
        id
    }

    /// Spawn a child of `parent`. The child's transform is parent-relative.
    pub fn spawn_child(&mut self, parent: VisualId, make: impl FnOnce(VisualId) -> Visual) -> VisualId {
        self.spawn(|id| make(id).with_parent(parent))
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Split into the pieces the simulation takes ownership of.
    pub(crate) fn into_parts(self) -> (SimConfig, Scene, WorldModel, RocketState) {
        (self.config, self.scene, self.bodies, self.rocket)
    }
}

impl Default for WorldSetup {
    fn default() -> Self {
        Self::new()
    }
}
