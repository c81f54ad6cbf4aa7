use serde::{Deserialize, Serialize};

/// Opaque handle to a renderable owned by the host renderer.
/// The simulation only writes transform fields through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualId(pub u32);

impl VisualId {
    /// Wire value for "no visual" in flat float buffers.
    pub const NONE_F32: f32 = -1.0;

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}
