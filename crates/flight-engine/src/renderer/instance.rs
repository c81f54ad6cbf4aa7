use bytemuck::{Pod, Zeroable};

use crate::components::visual::Visual;

/// Per-visual transform written to the frame buffer for the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Visual ID.
    pub id: f32,
    /// Parent visual ID, or -1 for top-level visuals.
    pub parent: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation in radians (YXZ order).
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
    pub sx: f32,
    pub sy: f32,
    pub sz: f32,
    /// 1.0 when visible, 0.0 otherwise.
    pub active: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_visual(visual: &Visual) -> Self {
        Self {
            id: visual.id.as_f32(),
            parent: visual.parent.map_or(crate::api::types::VisualId::NONE_F32, |p| p.as_f32()),
            x: visual.pos.x,
            y: visual.pos.y,
            z: visual.pos.z,
            rx: visual.rotation.x,
            ry: visual.rotation.y,
            rz: visual.rotation.z,
            sx: visual.scale.x,
            sy: visual.scale.y,
            sz: visual.scale.z,
            active: if visual.active { 1.0 } else { 0.0 },
        }
    }
}

/// Render buffer with a hard capacity, filled once per frame.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
    capacity: usize,
    /// Whether the last rebuild had to drop visuals.
    overflowing: bool,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            overflowing: false,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false, without storing, once full.
    pub fn push(&mut self, instance: RenderInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record how many visuals the latest rebuild dropped. Returns true only
    /// on the first overflowing rebuild after one that fit.
    pub fn note_overflow(&mut self, dropped: usize) -> bool {
        let was = self.overflowing;
        self.overflowing = dropped > 0;
        self.overflowing && !was
    }

    /// Instances viewed as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::with_capacity(1024)
    }
}
