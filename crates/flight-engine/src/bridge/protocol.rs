//! Frame buffer layout.
//! Must stay in sync with the host's reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 28 floats]
//! [Instances: max_instances × 12 floats]
//! ```
//!
//! Capacities are written into the header every frame; the host reads
//! them back to compute offsets.

use bytemuck::{Pod, Zeroable};

use crate::api::config::SimConfig;
use crate::api::simulation::Simulation;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_INSTANCE_COUNT: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_PROTOCOL_VERSION: usize = 3;
pub const HEADER_DELTA_TIME: usize = 4;
pub const HEADER_THRUST: usize = 5;
pub const HEADER_ROCKET_X: usize = 6;
pub const HEADER_ROCKET_Y: usize = 7;
pub const HEADER_ROCKET_Z: usize = 8;
pub const HEADER_ROCKET_PITCH: usize = 9;
pub const HEADER_ROCKET_YAW: usize = 10;
pub const HEADER_ROCKET_ROLL: usize = 11;
pub const HEADER_DISTANCE: usize = 12;
pub const HEADER_BOUNDARY_ACTIVE: usize = 13;
pub const HEADER_ELAPSED: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per render instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Header section, one field per `HEADER_*` index.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameHeader {
    pub frame_counter: f32,
    pub instance_count: f32,
    pub max_instances: f32,
    pub protocol_version: f32,
    pub delta_time: f32,
    pub thrust: f32,
    pub rocket_x: f32,
    pub rocket_y: f32,
    pub rocket_z: f32,
    pub rocket_pitch: f32,
    pub rocket_yaw: f32,
    pub rocket_roll: f32,
    pub distance_from_origin: f32,
    pub boundary_active: f32,
    pub elapsed_seconds: f32,
    pub _pad: f32,
}

impl FrameHeader {
    /// Snapshot of the simulation after its latest frame.
    pub fn capture(sim: &Simulation, instance_count: u32, max_instances: usize) -> Self {
        let rocket = &sim.rocket;
        let stats = sim.stats();
        Self {
            frame_counter: sim.clock().frames() as f32,
            instance_count: instance_count as f32,
            max_instances: max_instances as f32,
            protocol_version: PROTOCOL_VERSION,
            delta_time: stats.dt,
            thrust: rocket.thrust,
            rocket_x: rocket.position.x,
            rocket_y: rocket.position.y,
            rocket_z: rocket.position.z,
            rocket_pitch: rocket.orientation.pitch,
            rocket_yaw: rocket.orientation.yaw,
            rocket_roll: rocket.orientation.roll,
            distance_from_origin: rocket.position.length(),
            boundary_active: if stats.boundary_active { 1.0 } else { 0.0 },
            elapsed_seconds: sim.clock().elapsed() as f32,
            _pad: 0.0,
        }
    }
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_data_offset: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize) -> Self {
        let camera_data_offset = HEADER_FLOATS;
        let instance_data_offset = camera_data_offset + CAMERA_FLOATS;
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;

        Self {
            max_instances,
            camera_data_offset,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_instances)
    }
}

/// The flat `f32` buffer the host reads after each frame.
/// Allocated once at full capacity so its pointer stays stable.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self { layout, data }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Copy one frame into the buffer. Instance slots past the current
    /// count are zeroed so stale visuals never reappear.
    pub fn write(&mut self, header: &FrameHeader, camera: &CameraUniform, instances: &RenderBuffer) {
        let layout = &self.layout;
        self.data[..HEADER_FLOATS].copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(header)));
        self.data[layout.camera_data_offset..layout.instance_data_offset]
            .copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(camera)));

        let floats = instances.as_floats();
        let used = floats.len().min(layout.instance_data_floats);
        let start = layout.instance_data_offset;
        self.data[start..start + used].copy_from_slice(&floats[..used]);
        self.data[start + used..].fill(0.0);
    }

    /// Raw pointer for reads from JS linear memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
