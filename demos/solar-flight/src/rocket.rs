use std::f32::consts::FRAC_PI_2;

use flight_engine::{Appearance, RocketState, Rgb, Shape, Visual, VisualId, WorldSetup};
use glam::Vec3;

const HULL_COLOR: u32 = 0xcccccc;
const NOSE_COLOR: u32 = 0xff3333;
const FIN_COLOR: u32 = 0x3366cc;
const ENGINE_COLOR: u32 = 0x333333;
const FLAME_COLOR: u32 = 0xff7700;
const CORE_FLAME_COLOR: u32 = 0xffff00;

/// Nozzle exit, in rocket space.
const EXHAUST_Z: f32 = -40.0;

fn part(id: VisualId, tag: &str, shape: Shape, color: u32) -> Visual {
    Visual::new(id)
        .with_tag(tag)
        .with_appearance(Appearance::new(shape, Rgb::from_hex(color)))
}

/// Build the rocket model under one group node and hand back its state.
/// Every part is parented to the group, so only the group moves in flight.
pub fn build_rocket(world: &mut WorldSetup, start: RocketState) -> RocketState {
    let root = world.spawn(|id| {
        Visual::new(id)
            .with_tag("rocket")
            .with_pos(start.position)
            .with_rotation(start.orientation.as_euler_vec())
            .with_appearance(Appearance::group())
    });

    // Cylinders and cones are built along +Y; tip them onto the flight axis.
    world.spawn_child(root, |id| {
        part(id, "rocket/hull", Shape::Cylinder { top: 5.0, bottom: 8.0, height: 40.0 }, HULL_COLOR)
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
    });
    world.spawn_child(root, |id| {
        part(id, "rocket/nose", Shape::Cone { radius: 5.0, height: 15.0 }, NOSE_COLOR)
            .with_pos(Vec3::new(0.0, 0.0, 27.5))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
    });
    for i in 0..4 {
        let roll = i as f32 * FRAC_PI_2;
        world.spawn_child(root, |id| {
            part(id, "rocket/fin", Shape::Box { x: 3.0, y: 15.0, z: 10.0 }, FIN_COLOR)
                .with_pos(Vec3::new(0.0, roll.cos() * 10.0, -20.0))
                .with_rotation(Vec3::new(0.0, 0.0, roll))
        });
    }
    world.spawn_child(root, |id| {
        part(id, "rocket/engine", Shape::Cylinder { top: 8.0, bottom: 6.0, height: 10.0 }, ENGINE_COLOR)
            .with_pos(Vec3::new(0.0, 0.0, -25.0))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
    });

    let flame = world.spawn_child(root, |id| {
        Visual::new(id)
            .with_tag("rocket/flame")
            .with_appearance(
                Appearance::new(Shape::Cone { radius: 6.0, height: 20.0 }, Rgb::from_hex(FLAME_COLOR))
                    .with_opacity(0.7)
                    .with_emissive(true),
            )
            .with_pos(Vec3::new(0.0, 0.0, EXHAUST_Z))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
    });
    let core = world.spawn_child(root, |id| {
        Visual::new(id)
            .with_tag("rocket/flame-core")
            .with_appearance(
                Appearance::new(Shape::Cone { radius: 3.0, height: 10.0 }, Rgb::from_hex(CORE_FLAME_COLOR))
                    .with_emissive(true),
            )
            .with_pos(Vec3::new(0.0, 0.0, EXHAUST_Z))
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
    });

    start.with_visual(root).with_flame(flame).with_flame(core)
}
