use glam::{EulerRot, Quat, Vec3};
use crate::api::types::VisualId;

/// Rocket attitude as three independent angles, composed yaw, then pitch,
/// then roll (YXZ). Keeping the angles separate lets roll decay on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the local X axis.
    pub pitch: f32,
    /// Rotation about the world Y axis.
    pub yaw: f32,
    /// Rotation about the local Z (forward) axis.
    pub roll: f32,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }

    /// Rotate a rocket-space vector into world space.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        self.quat() * v
    }

    /// Unit vector the rocket flies along (local +Z).
    pub fn forward(&self) -> Vec3 {
        self.rotate(Vec3::Z)
    }

    /// Euler angles packed as (x, y, z) for a visual's rotation field.
    pub fn as_euler_vec(&self) -> Vec3 {
        Vec3::new(self.pitch, self.yaw, self.roll)
    }
}

/// Player rocket: pose, thrust, and handles to its visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketState {
    pub position: Vec3,
    pub orientation: Orientation,
    pub thrust: f32,
    /// Root visual the whole rocket model hangs from.
    pub visual: Option<VisualId>,
    /// Exhaust visuals scaled with thrust.
    pub flames: Vec<VisualId>,
}

impl RocketState {
    pub fn new(position: Vec3, orientation: Orientation, thrust: f32) -> Self {
        Self {
            position,
            orientation,
            thrust,
            visual: None,
            flames: Vec::new(),
        }
    }

    pub fn with_visual(mut self, visual: VisualId) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_flame(mut self, flame: VisualId) -> Self {
        self.flames.push(flame);
        self
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation.forward()
    }
}

impl Default for RocketState {
    /// Parked just outside the outer planets, nose along +X, upside down
    /// so self-levelling rights it during the first seconds of flight.
    fn default() -> Self {
        Self::new(
            Vec3::new(-20_000.0, 2_200.0, 0.0),
            Orientation::new(0.0, std::f32::consts::FRAC_PI_2, std::f32::consts::PI),
            1.0,
        )
    }
}
