use serde::{Deserialize, Serialize};

/// RGB color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Geometry the host should build for a visual.
/// Dimensions are in world units; the host owns tessellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
    Icosahedron { radius: f32 },
    Cone { radius: f32, height: f32 },
    Cylinder { top: f32, bottom: f32, height: f32 },
    Box { x: f32, y: f32, z: f32 },
    /// Text billboard, `width` x `height` texels.
    Label { text: String, width: u32, height: u32 },
    /// Point cloud on a sphere shell, generated host-side from `seed`.
    Starfield { count: u32, radius: f32, seed: u64 },
    /// Thin orbit guide in the horizontal plane.
    OrbitPath { radius: f32, width: f32 },
    /// Grouping node with no geometry of its own.
    Group,
}

/// Renderer-agnostic description of how a visual looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub shape: Shape,
    pub color: Rgb,
    /// 1.0 = opaque.
    pub opacity: f32,
    /// Self-lit (ignores scene lighting).
    pub emissive: bool,
}

impl Appearance {
    pub fn new(shape: Shape, color: Rgb) -> Self {
        Self {
            shape,
            color,
            opacity: 1.0,
            emissive: false,
        }
    }

    pub fn group() -> Self {
        Self::new(Shape::Group, Rgb::WHITE)
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive(mut self, emissive: bool) -> Self {
        self.emissive = emissive;
        self
    }
}
