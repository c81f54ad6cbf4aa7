use std::f64::consts::TAU;

use glam::Vec3;

use crate::api::config::OrbitParams;
use crate::core::scene::Scene;
use crate::world::body::Body;
use crate::world::WorldModel;

/// Point on a horizontal circle of `radius` at `angle`, keeping `y`.
#[inline]
pub fn circle_point(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Orbit angle of the attachment at `index` for host time `now_ms`.
/// Moons are driven by absolute time, so each one keeps its own phase.
/// Wrapped to [0, 2π) before narrowing so epoch-sized clocks stay precise.
pub fn moon_angle(now_ms: f64, index: usize, params: &OrbitParams) -> f32 {
    let factor = params.moon_phase_base + index as f64 * params.moon_phase_step;
    (now_ms * params.moon_clock * factor).rem_euclid(TAU) as f32
}

/// Advance every body's orbit by `dt` seconds and write the result to its visuals.
/// `now_ms` is the host timestamp of this frame.
pub fn update_bodies(world: &mut WorldModel, scene: &mut Scene, dt: f32, now_ms: f64, params: &OrbitParams) {
    for body in world.bodies_mut() {
        update_body(body, scene, dt, now_ms, params);
    }
}

fn update_body(body: &mut Body, scene: &mut Scene, dt: f32, now_ms: f64, params: &OrbitParams) {
    body.angle += body.orbit_speed * dt * params.time_scale;

    let spin = if body.is_minor() {
        params.asteroid_spin * dt * params.time_scale
    } else {
        params.planet_spin * dt
    };
    if let Some(visual) = scene.get_mut(body.visual()) {
        visual.pos = circle_point(body.angle, body.orbit_radius(), visual.pos.y);
        visual.rotation.y += spin;
    }

    // Asteroids have no attachments, so this is a no-op for them.
    // The phase index counts every attachment, not just moons.
    for (index, attachment) in body.attachments().iter().enumerate() {
        if !attachment.is_moon() {
            continue;
        }
        let angle = moon_angle(now_ms, index, params);
        if let Some(moon) = scene.get_mut(attachment.visual()) {
            moon.pos = circle_point(angle, attachment.radius(), moon.pos.y);
            moon.rotation.y += params.moon_spin * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::VisualId;
    use crate::components::visual::Visual;
    use crate::world::body::{Attachment, AttachmentKind};

    fn setup(body: Body, extra: &[Visual]) -> (WorldModel, Scene) {
        let mut scene = Scene::new();
        scene.spawn(Visual::new(body.visual()).with_pos(Vec3::new(0.0, 42.0, 0.0)));
        for v in extra {
            scene.spawn(v.clone());
        }
        let mut world = WorldModel::new();
        world.push(body);
        (world, scene)
    }

    #[test]
    fn planet_after_one_second() {
        let (mut world, mut scene) = setup(Body::planet(VisualId(1), 3000.0, 0.005, 0.0), &[]);
        update_bodies(&mut world, &mut scene, 1.0, 0.0, &OrbitParams::default());

        let body = &world.bodies()[0];
        assert!((body.angle - 0.05).abs() < 1e-6);
        let pos = scene.get(VisualId(1)).unwrap().pos;
        let expected = Vec3::new(3000.0 * 0.05_f32.cos(), 42.0, 3000.0 * 0.05_f32.sin());
        assert!((pos - expected).length() < 1e-2, "pos = {pos}");
    }

    #[test]
    fn angle_update_is_linear_in_dt() {
        let params = OrbitParams::default();
        for &dt in &[0.0_f32, 0.016, 0.25, 1.0, 3.7] {
            let (mut whole, mut scene_a) = setup(Body::planet(VisualId(1), 500.0, 0.007, 0.3), &[]);
            let (mut halves, mut scene_b) = setup(Body::planet(VisualId(1), 500.0, 0.007, 0.3), &[]);

            update_bodies(&mut whole, &mut scene_a, dt, 0.0, &params);
            update_bodies(&mut halves, &mut scene_b, dt / 2.0, 0.0, &params);
            update_bodies(&mut halves, &mut scene_b, dt / 2.0, 0.0, &params);

            let a = whole.bodies()[0].angle;
            let b = halves.bodies()[0].angle;
            assert!((a - b).abs() < 1e-5, "dt={dt}: {a} vs {b}");
        }
    }

    #[test]
    fn asteroid_spins_slowly() {
        let (mut world, mut scene) = setup(Body::asteroid(VisualId(1), 6000.0, 0.003, 1.0), &[]);
        update_bodies(&mut world, &mut scene, 0.5, 0.0, &OrbitParams::default());

        let v = scene.get(VisualId(1)).unwrap();
        assert!((v.rotation.y - 0.01 * 0.5 * 10.0).abs() < 1e-6);
        assert!((world.bodies()[0].angle - (1.0 + 0.003 * 0.5 * 10.0)).abs() < 1e-6);
        assert!((v.pos.length() - Vec3::new(6000.0, 42.0, 0.0).length()).abs() < 1e-1);
    }

    #[test]
    fn planet_spins_at_its_own_rate() {
        let (mut world, mut scene) = setup(Body::planet(VisualId(1), 1200.0, 0.01, 0.0), &[]);
        update_bodies(&mut world, &mut scene, 0.5, 0.0, &OrbitParams::default());
        assert!((scene.get(VisualId(1)).unwrap().rotation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn moons_orbit_and_rigid_attachments_stay_put() {
        let atmosphere = Visual::new(VisualId(2)).with_parent(VisualId(1)).with_pos(Vec3::ZERO);
        let moon = Visual::new(VisualId(3)).with_parent(VisualId(1)).with_pos(Vec3::new(300.0, 12.0, 0.0));
        let ring = Visual::new(VisualId(4)).with_parent(VisualId(1)).with_pos(Vec3::new(0.0, 0.0, 0.0));
        let label_offset = Vec3::new(100.0, 10.0, 100.0);
        let label = Visual::new(VisualId(5)).with_parent(VisualId(1)).with_pos(label_offset);
        let planet = Body::planet(VisualId(1), 3000.0, 0.005, 0.0)
            .with_attachment(Attachment::rigid(VisualId(2), AttachmentKind::Atmosphere))
            .with_attachment(Attachment::moon(VisualId(3), 300.0))
            .with_attachment(Attachment::rigid(VisualId(4), AttachmentKind::Ring))
            .with_attachment(Attachment::rigid(VisualId(5), AttachmentKind::Label));
        let (mut world, mut scene) = setup(planet, &[atmosphere, moon, ring, label]);

        let now_ms = 10_000.0;
        update_bodies(&mut world, &mut scene, 0.1, now_ms, &OrbitParams::default());

        // Moon sits at attachment index 1: factor 0.5 + 0.2.
        let angle = (now_ms * 0.001 * 0.7) as f32;
        let m = scene.get(VisualId(3)).unwrap();
        let expected = Vec3::new(angle.cos() * 300.0, 12.0, angle.sin() * 300.0);
        assert!((m.pos - expected).length() < 1e-2, "moon at {}", m.pos);
        assert!((m.rotation.y - 0.05).abs() < 1e-6);

        for id in [VisualId(2), VisualId(4)] {
            let v = scene.get(id).unwrap();
            assert_eq!(v.pos, Vec3::ZERO);
            assert_eq!(v.rotation, Vec3::ZERO);
        }
        let l = scene.get(VisualId(5)).unwrap();
        assert_eq!(l.pos, label_offset);
        assert_eq!(l.rotation, Vec3::ZERO);
    }

    #[test]
    fn moon_radius_does_not_drift() {
        let moon = Visual::new(VisualId(2)).with_parent(VisualId(1)).with_pos(Vec3::new(250.0, 40.0, 0.0));
        let planet = Body::planet(VisualId(1), 4500.0, 0.004, 0.0)
            .with_attachment(Attachment::moon(VisualId(2), 250.0));
        let (mut world, mut scene) = setup(planet, &[moon]);

        let params = OrbitParams::default();
        for frame in 0..600 {
            update_bodies(&mut world, &mut scene, 1.0 / 60.0, frame as f64 * 16.7, &params);
        }
        let p = scene.get(VisualId(2)).unwrap().pos;
        let horizontal = Vec3::new(p.x, 0.0, p.z).length();
        assert!((horizontal - 250.0).abs() < 1e-2);
        assert_eq!(p.y, 40.0);
    }

    #[test]
    fn large_timestamps_keep_precision() {
        // Epoch-style millisecond clocks are far beyond f32 integer precision.
        let params = OrbitParams::default();
        let now = 1_700_000_000_123.0;
        let a = moon_angle(now, 0, &params);
        let b = moon_angle(now + 16.0, 0, &params);
        let step = (b - a).rem_euclid(std::f32::consts::TAU);
        assert!((step - 0.008).abs() < 1e-4, "step = {step}");
    }
}
