use serde::{Deserialize, Serialize};

use crate::api::types::VisualId;
use crate::components::appearance::Appearance;
use crate::components::visual::Visual;
use crate::core::scene::Scene;

/// Scene manifest describing every visual the host must build.
/// Serialized to JSON once after init; per-frame transforms go through
/// the frame buffer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Half-width of the playable volume, for far-plane and fog setup.
    pub space_size: f32,
    /// Visuals in scene order. Parents always precede their children.
    pub visuals: Vec<VisualDescriptor>,
}

/// Describes a single visual and its initial transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualDescriptor {
    pub id: VisualId,
    #[serde(default)]
    pub parent: Option<VisualId>,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub appearance: Option<Appearance>,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0; 3]
}

impl From<&Visual> for VisualDescriptor {
    fn from(visual: &Visual) -> Self {
        Self {
            id: visual.id,
            parent: visual.parent,
            tag: visual.tag.clone(),
            appearance: visual.appearance.clone(),
            position: visual.pos.to_array(),
            rotation: visual.rotation.to_array(),
            scale: visual.scale.to_array(),
        }
    }
}

impl SceneManifest {
    /// Describe every visual in `scene`.
    pub fn from_scene(scene: &Scene, space_size: f32) -> Self {
        Self {
            space_size,
            visuals: scene.iter().map(VisualDescriptor::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
