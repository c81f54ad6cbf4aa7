use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::api::config::CameraParams;
use crate::world::rocket::RocketState;

/// Chase camera that trails the rocket.
/// Each update moves a fixed fraction of the remaining distance toward the
/// ideal spot behind the rocket, so it never snaps and converges geometrically.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Where the camera wants to sit, in rocket space.
    pub desired_offset: Vec3,
    /// Offset restored by [`CameraRig::reset_offset`].
    default_offset: Vec3,
    /// Look target relative to the rocket, in rocket space.
    pub look_ahead: Vec3,
    /// Current eye position in world space.
    pub position: Vec3,
    /// Current look-at point in world space.
    pub look_target: Vec3,
    /// Fraction of the remaining distance covered per update, in (0, 1].
    smoothing: f32,
}

/// GPU/host-side camera data: eye, target, up and a right-handed view matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub eye: [f32; 4],
    pub target: [f32; 4],
    pub up: [f32; 4],
    pub view: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 28;
}

impl CameraRig {
    pub fn new(params: &CameraParams) -> Self {
        Self {
            desired_offset: params.offset,
            default_offset: params.offset,
            look_ahead: params.look_ahead,
            position: params.start_position,
            look_target: params.start_target,
            smoothing: params.smoothing.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Restore the default chase offset.
    pub fn reset_offset(&mut self) {
        self.desired_offset = self.default_offset;
    }

    /// World-space spot the camera is converging on.
    pub fn ideal_position(&self, rocket: &RocketState) -> Vec3 {
        rocket.position + rocket.orientation.rotate(self.desired_offset)
    }

    /// Follow the rocket for one frame.
    pub fn update(&mut self, rocket: &RocketState) {
        let ideal = self.ideal_position(rocket);
        self.position = self.position.lerp(ideal, self.smoothing);
        self.look_target = rocket.position + rocket.orientation.rotate(self.look_ahead);
    }

    /// Right-handed view matrix looking from `position` at `look_target`, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        // look_at_rh is undefined when eye == target
        if self.position.distance_squared(self.look_target) < 1e-12 {
            return Mat4::from_translation(-self.position);
        }
        Mat4::look_at_rh(self.position, self.look_target, Vec3::Y)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            eye: self.position.extend(1.0).to_array(),
            target: self.look_target.extend(1.0).to_array(),
            up: [0.0, 1.0, 0.0, 0.0],
            view: self.view_matrix().to_cols_array_2d(),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&CameraParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::rocket::Orientation;

    fn parked_rocket() -> RocketState {
        RocketState::new(Vec3::new(100.0, 50.0, -30.0), Orientation::new(0.2, 1.0, 0.4), 1.0)
    }

    #[test]
    fn uniform_is_28_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn update_moves_a_fraction_of_the_way() {
        let rocket = parked_rocket();
        let mut cam = CameraRig::default();
        let ideal = cam.ideal_position(&rocket);
        let before = cam.position.distance(ideal);
        cam.update(&rocket);
        let after = cam.position.distance(ideal);
        assert!(after < before);
        assert!((after - before * 0.95).abs() < before * 1e-4, "before={before} after={after}");
    }

    #[test]
    fn converges_geometrically() {
        let rocket = parked_rocket();
        let mut cam = CameraRig::default();
        cam.position = rocket.position + Vec3::new(500.0, -200.0, 800.0);
        let ideal = cam.ideal_position(&rocket);
        let d0 = cam.position.distance(ideal);

        let mut prev = d0;
        for n in 1..=40 {
            cam.update(&rocket);
            let d = cam.position.distance(ideal);
            assert!(d < prev, "distance grew at frame {n}");
            let expected = d0 * 0.95_f32.powi(n);
            assert!((d - expected).abs() < expected * 1e-3 + 1e-3, "frame {n}: {d} vs {expected}");
            prev = d;
        }
    }

    #[test]
    fn smoothing_one_snaps() {
        let rocket = parked_rocket();
        let mut cam = CameraRig::new(&CameraParams { smoothing: 1.0, ..CameraParams::default() });
        cam.update(&rocket);
        assert!((cam.position - cam.ideal_position(&rocket)).length() < 1e-3);
    }

    #[test]
    fn look_target_is_ahead_of_rocket() {
        let rocket = RocketState::default();
        let mut cam = CameraRig::default();
        cam.update(&rocket);
        let expected = rocket.position + rocket.forward() * 50.0;
        assert!((cam.look_target - expected).length() < 1e-2);
    }

    #[test]
    fn reset_restores_default_offset() {
        let mut cam = CameraRig::default();
        cam.desired_offset = Vec3::new(5.0, 5.0, 5.0);
        cam.reset_offset();
        assert_eq!(cam.desired_offset, Vec3::new(0.0, 20.0, -100.0));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut cam = CameraRig::default();
        cam.update(&RocketState::default());
        let eye_in_view = cam.view_matrix().transform_point3(cam.position);
        assert!(eye_in_view.length() < 1e-1);
    }
}
