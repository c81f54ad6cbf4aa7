pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod world;

// Re-export key types at crate root for convenience
pub use api::config::{
    CameraParams, ClockParams, FlightParams, OrbitParams, RollDecay, SimConfig, MAX_INSTANCES, SPACE_SIZE,
};
pub use api::error::ConfigError;
pub use api::simulation::{FrameStats, Simulation};
pub use api::types::VisualId;
pub use api::world::{WorldBuilder, WorldSetup};
pub use components::appearance::{Appearance, Rgb, Shape};
pub use components::visual::Visual;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, Key, KeyBindings};
pub use renderer::camera::{CameraRig, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use assets::manifest::{SceneManifest, VisualDescriptor};
pub use bridge::protocol::{FrameBuffer, FrameHeader, ProtocolLayout};
pub use systems::render::build_render_buffer;
pub use world::{Attachment, AttachmentKind, Body, BodyKind, Orientation, RocketState, WorldModel};
