use flight_engine::{
    build_render_buffer, ConfigError, FrameBuffer, FrameHeader, ProtocolLayout, RenderBuffer,
    SceneManifest, SimConfig, Simulation, WorldBuilder,
};

/// Generic runner that wires a world builder to the frame loop.
///
/// Each concrete world (e.g., `solar-flight`) creates a `thread_local!`
/// FlightRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct FlightRunner<W: WorldBuilder> {
    builder: W,
    /// Config supplied by the host before init; overrides the builder's.
    config_override: Option<SimConfig>,
    sim: Option<Simulation>,
    render_buffer: RenderBuffer,
    frame: FrameBuffer,
}

impl<W: WorldBuilder> FlightRunner<W> {
    /// Buffers stay empty until `init` knows the config they are sized from.
    pub fn new(builder: W) -> Self {
        Self {
            render_buffer: RenderBuffer::with_capacity(0),
            frame: FrameBuffer::new(ProtocolLayout::new(0)),
            builder,
            config_override: None,
            sim: None,
        }
    }

    /// Replace the simulation config. Takes effect at the next `init`.
    /// A rejected config leaves the current one in place.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = SimConfig::from_json(json)?;
        self.config_override = Some(config);
        Ok(())
    }

    /// Build the world and start a fresh simulation. Calling it again restarts.
    pub fn init(&mut self) {
        let config = match &self.config_override {
            Some(config) => config.clone(),
            None => self.builder.config(),
        };
        let sim = Simulation::build(&mut self.builder, config);

        let layout = ProtocolLayout::from_config(sim.config());
        self.render_buffer = RenderBuffer::with_capacity(layout.max_instances);
        self.frame = FrameBuffer::new(layout);
        self.sim = Some(sim);
        self.export();
    }

    fn sim_mut(&mut self) -> &mut Simulation {
        self.sim.as_mut().expect("simulation not initialized. Call flight_init() first.")
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    /// Run one display frame and refresh the frame buffer.
    pub fn frame(&mut self, now_ms: f64) {
        self.sim_mut().frame(now_ms);
        self.export();
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.sim_mut().key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.sim_mut().key_up(code)
    }

    pub fn release_all(&mut self) {
        self.sim_mut().release_all();
    }

    /// JSON description of every visual, for the host to build meshes from.
    pub fn scene_manifest(&mut self) -> Result<String, serde_json::Error> {
        let sim = self.sim_mut();
        SceneManifest::from_scene(&sim.scene, sim.config().space_size).to_json()
    }

    fn export(&mut self) {
        let Some(sim) = self.sim.as_ref() else {
            return;
        };
        build_render_buffer(sim.scene.iter(), &mut self.render_buffer);
        let header = FrameHeader::capture(
            sim,
            self.render_buffer.instance_count(),
            self.render_buffer.capacity(),
        );
        self.frame.write(&header, &sim.camera.uniform(), &self.render_buffer);
    }

    // ---- Pointer accessors for reads from linear memory ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    // ---- Layout accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.frame.layout().max_instances as u32
    }

    pub fn camera_data_offset(&self) -> u32 {
        self.frame.layout().camera_data_offset as u32
    }

    pub fn instance_data_offset(&self) -> u32 {
        self.frame.layout().instance_data_offset as u32
    }
}
