use glam::Vec3;
use crate::api::types::VisualId;
use crate::components::appearance::Appearance;

/// A renderable's transform record, as seen by the simulation.
/// The host builds the actual mesh from `appearance` once, then copies
/// the transform fields every frame.
#[derive(Debug, Clone)]
pub struct Visual {
    /// Unique handle.
    pub id: VisualId,
    /// Name for lookups and host-side debugging.
    pub tag: String,
    /// Parent visual; when set, `pos`/`rotation` are parent-relative.
    pub parent: Option<VisualId>,
    /// Inactive visuals are left out of the render export.
    pub active: bool,
    /// Position (world space, or parent space when parented).
    pub pos: Vec3,
    /// Euler angles in radians, composed in YXZ order.
    pub rotation: Vec3,
    /// Per-axis scale multiplier.
    pub scale: Vec3,
    /// What the host should build. `None` for pure transform nodes.
    pub appearance: Option<Appearance>,
}

impl Visual {
    /// Create a new visual at the origin with unit scale.
    pub fn new(id: VisualId) -> Self {
        Self {
            id,
            tag: String::new(),
            parent: None,
            active: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            appearance: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_parent(mut self, parent: VisualId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }
}
