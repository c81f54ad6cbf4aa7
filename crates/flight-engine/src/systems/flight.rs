use glam::Vec3;

use crate::api::config::{FlightParams, RollDecay};
use crate::core::scene::Scene;
use crate::input::state::{InputState, Key};
use crate::renderer::camera::CameraRig;
use crate::world::rocket::RocketState;

/// Flame scale for a given thrust: wider on X/Z, longer on Y.
pub fn flame_scale(thrust: f32) -> Vec3 {
    Vec3::new(0.8 + thrust * 0.2, 0.5 + thrust * 0.5, 0.8 + thrust * 0.2)
}

/// Advance the rocket by one frame of `dt` seconds.
///
/// Order matters and is fixed: attitude, thrust, camera reset, translation,
/// flame, roll levelling, then boundary containment. Returns whether the
/// boundary pull was applied this frame.
pub fn update_rocket(
    input: &InputState,
    dt: f32,
    rocket: &mut RocketState,
    camera: &mut CameraRig,
    scene: &mut Scene,
    params: &FlightParams,
    boundary_limit: f32,
) -> bool {
    // Per-frame rates are tuned for `reference_hz`; this makes them per-second.
    let frames = dt * params.reference_hz;

    if input.is_held(Key::PitchUp) {
        rocket.orientation.pitch -= params.pitch_rate * frames;
    }
    if input.is_held(Key::PitchDown) {
        rocket.orientation.pitch += params.pitch_rate * frames;
    }
    if input.is_held(Key::TurnLeft) {
        rocket.orientation.yaw += params.yaw_rate * frames;
    }
    if input.is_held(Key::TurnRight) {
        rocket.orientation.yaw -= params.yaw_rate * frames;
    }
    if input.is_held(Key::ThrustUp) {
        rocket.thrust = (rocket.thrust + params.thrust_rate * frames).min(params.thrust_max);
    }
    if input.is_held(Key::ThrustDown) {
        rocket.thrust = (rocket.thrust - params.thrust_rate * frames).max(params.thrust_min);
    }
    // Thrust may also arrive out of range from the builder.
    rocket.thrust = rocket.thrust.clamp(params.thrust_min, params.thrust_max);

    if input.is_held(Key::CameraReset) {
        camera.reset_offset();
    }

    let forward = rocket.forward();
    rocket.position += forward * (rocket.thrust * params.speed * frames);

    let scale = flame_scale(rocket.thrust);
    for &flame in &rocket.flames {
        if let Some(visual) = scene.get_mut(flame) {
            visual.scale = scale;
        }
    }

    rocket.orientation.roll *= match params.roll_decay_mode {
        RollDecay::PerFrame => params.roll_decay,
        RollDecay::TimeScaled => params.roll_decay.powf(frames),
    };

    let pulled = contain(rocket, params.boundary_pull, boundary_limit);

    if let Some(id) = rocket.visual {
        if let Some(visual) = scene.get_mut(id) {
            visual.pos = rocket.position;
            visual.rotation = rocket.orientation.as_euler_vec();
        }
    }

    pulled
}

/// Soft boundary: past `limit`, step `pull` units toward the origin.
/// Enough thrust still carries the rocket further out.
fn contain(rocket: &mut RocketState, pull: f32, limit: f32) -> bool {
    if rocket.position.length() <= limit {
        return false;
    }
    let to_origin = (-rocket.position).normalize_or_zero();
    rocket.position += to_origin * pull;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::SPACE_SIZE;
    use crate::api::types::VisualId;
    use crate::components::visual::Visual;
    use crate::world::rocket::Orientation;
    use std::f32::consts::FRAC_PI_2;

    const LIMIT: f32 = SPACE_SIZE * 0.45;

    fn step(input: &InputState, dt: f32, rocket: &mut RocketState) -> bool {
        let mut camera = CameraRig::default();
        let mut scene = Scene::new();
        update_rocket(input, dt, rocket, &mut camera, &mut scene, &FlightParams::default(), LIMIT)
    }

    #[test]
    fn one_frame_moves_eight_units_forward() {
        let mut rocket = RocketState::new(
            Vec3::new(-20_000.0, 2_200.0, 0.0),
            Orientation::new(0.0, FRAC_PI_2, 0.0),
            1.0,
        );
        let start = rocket.position;
        let forward = rocket.forward();

        step(&InputState::new(), 1.0 / 60.0, &mut rocket);

        let expected = start + forward * 8.0;
        assert!((rocket.position - expected).length() < 1e-2, "got {}", rocket.position);
        assert_eq!(rocket.thrust, 1.0);
    }

    #[test]
    fn thrust_stays_in_bounds() {
        let mut rocket = RocketState::default();
        let mut input = InputState::new();

        input.press(Key::ThrustUp);
        for _ in 0..500 {
            step(&input, 1.0 / 30.0, &mut rocket);
            assert!(rocket.thrust <= 3.0 && rocket.thrust >= 0.5);
        }
        assert_eq!(rocket.thrust, 3.0);

        input.release(Key::ThrustUp);
        input.press(Key::ThrustDown);
        for _ in 0..500 {
            step(&input, 1.0 / 30.0, &mut rocket);
            assert!(rocket.thrust <= 3.0 && rocket.thrust >= 0.5);
        }
        assert_eq!(rocket.thrust, 0.5);
    }

    #[test]
    fn zero_dt_only_decays_roll() {
        let mut rocket = RocketState::new(Vec3::new(10.0, 20.0, 30.0), Orientation::new(0.1, 0.2, 1.0), 2.0);
        let before = rocket.clone();

        step(&InputState::new(), 0.0, &mut rocket);

        assert_eq!(rocket.position, before.position);
        assert_eq!(rocket.thrust, before.thrust);
        assert_eq!(rocket.orientation.pitch, before.orientation.pitch);
        assert_eq!(rocket.orientation.yaw, before.orientation.yaw);
        assert!((rocket.orientation.roll - 0.98).abs() < 1e-6);
    }

    #[test]
    fn time_scaled_roll_ignores_zero_dt() {
        let mut rocket = RocketState::new(Vec3::ZERO, Orientation::new(0.0, 0.0, 1.0), 1.0);
        let params = FlightParams {
            roll_decay_mode: RollDecay::TimeScaled,
            ..FlightParams::default()
        };
        let mut camera = CameraRig::default();
        let mut scene = Scene::new();
        update_rocket(&InputState::new(), 0.0, &mut rocket, &mut camera, &mut scene, &params, LIMIT);
        assert_eq!(rocket.orientation.roll, 1.0);

        update_rocket(&InputState::new(), 2.0 / 60.0, &mut rocket, &mut camera, &mut scene, &params, LIMIT);
        assert!((rocket.orientation.roll - 0.98 * 0.98).abs() < 1e-5);
    }

    #[test]
    fn boundary_pulls_back_toward_origin() {
        // Facing straight down at the boundary: thrust moves it tangentially.
        let start = Vec3::new(SPACE_SIZE * 0.46, 0.0, 0.0);
        let mut rocket = RocketState::new(start, Orientation::new(FRAC_PI_2, 0.0, 0.0), 1.0);

        let pulled = step(&InputState::new(), 0.0, &mut rocket);

        assert!(pulled);
        assert!(rocket.position.length() < start.length());
        assert!((start.length() - rocket.position.length() - 0.5).abs() < 1e-2);
    }

    #[test]
    fn inside_boundary_is_untouched() {
        let mut rocket = RocketState::new(Vec3::new(1000.0, 0.0, 0.0), Orientation::default(), 1.0);
        assert!(!step(&InputState::new(), 0.0, &mut rocket));
        assert_eq!(rocket.position, Vec3::new(1000.0, 0.0, 0.0));
    }

    #[test]
    fn steering_keys_change_attitude() {
        let mut input = InputState::new();
        input.press(Key::PitchUp);
        input.press(Key::TurnLeft);
        let mut rocket = RocketState::new(Vec3::ZERO, Orientation::default(), 1.0);

        step(&input, 1.0 / 60.0, &mut rocket);

        assert!((rocket.orientation.pitch + 0.03).abs() < 1e-6);
        assert!((rocket.orientation.yaw - 0.02).abs() < 1e-6);
    }

    #[test]
    fn camera_reset_key_restores_offset() {
        let mut input = InputState::new();
        input.press(Key::CameraReset);
        let mut rocket = RocketState::default();
        let mut camera = CameraRig::default();
        camera.desired_offset = Vec3::new(1.0, 2.0, 3.0);
        let mut scene = Scene::new();

        update_rocket(&input, 0.016, &mut rocket, &mut camera, &mut scene, &FlightParams::default(), LIMIT);

        assert_eq!(camera.desired_offset, Vec3::new(0.0, 20.0, -100.0));
    }

    #[test]
    fn flames_and_hull_follow_state() {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(VisualId(1)).with_tag("rocket"));
        scene.spawn(Visual::new(VisualId(2)).with_tag("flame").with_parent(VisualId(1)));
        let mut rocket = RocketState::default().with_visual(VisualId(1)).with_flame(VisualId(2));
        rocket.thrust = 3.0;
        let mut camera = CameraRig::default();

        update_rocket(&InputState::new(), 0.016, &mut rocket, &mut camera, &mut scene, &FlightParams::default(), LIMIT);

        let flame = scene.get(VisualId(2)).unwrap();
        assert!((flame.scale - Vec3::new(1.4, 2.0, 1.4)).length() < 1e-5);
        let hull = scene.get(VisualId(1)).unwrap();
        assert_eq!(hull.pos, rocket.position);
        assert_eq!(hull.rotation, rocket.orientation.as_euler_vec());
    }
}
