//! Solar Flight: pilot a rocket around a toy solar system.
//!
//! The sun and background are static. Planets, their moons and the asteroid
//! belt orbit; the rocket is flown from the keyboard with a chase camera.

use flight_engine::{
    Appearance, Attachment, AttachmentKind, Body, RocketState, Rgb, Shape, Visual, VisualId,
    WorldBuilder, WorldSetup,
};
use glam::Vec3;

use crate::bodies::{self, Moons, PlanetSpec};
use crate::rng::Rng;
use crate::rocket::build_rocket;

const DEFAULT_SEED: u64 = 0x5eed_2024;

pub struct SolarFlight {
    seed: u64,
}

impl SolarFlight {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Same seed, same layout.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SolarFlight {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldBuilder for SolarFlight {
    fn build(&mut self, world: &mut WorldSetup) {
        let mut rng = Rng::new(self.seed);

        spawn_sun(world);
        let space_size = world.config().space_size;
        spawn_starfield(world, space_size, rng.next_u64());
        for spec in &bodies::PLANETS {
            spawn_planet(world, &mut rng, spec);
        }
        spawn_asteroid_belt(world, &mut rng);

        let rocket = build_rocket(world, RocketState::default());
        world.rocket = rocket;
    }
}

fn sphere(radius: f32, color: u32) -> Appearance {
    Appearance::new(Shape::Sphere { radius }, Rgb::from_hex(color))
}

fn spawn_sun(world: &mut WorldSetup) {
    let sun = world.spawn(|id| {
        Visual::new(id)
            .with_tag("sun")
            .with_appearance(sphere(bodies::SUN_RADIUS, bodies::SUN_COLOR).with_emissive(true))
    });
    for (radius, color, opacity) in bodies::SUN_GLOWS {
        world.spawn_child(sun, |id| {
            Visual::new(id)
                .with_tag("sun/glow")
                .with_appearance(sphere(radius, color).with_opacity(opacity).with_emissive(true))
        });
    }
}

fn spawn_starfield(world: &mut WorldSetup, space_size: f32, seed: u64) {
    let shape = Shape::Starfield {
        count: bodies::STAR_COUNT,
        radius: space_size * bodies::STAR_SHELL,
        seed,
    };
    world.spawn(|id| {
        Visual::new(id)
            .with_tag("starfield")
            .with_appearance(Appearance::new(shape, Rgb::WHITE).with_emissive(true))
    });
}

fn spawn_planet(world: &mut WorldSetup, rng: &mut Rng, spec: &PlanetSpec) {
    let angle = rng.angle();
    let y = rng.spread(bodies::PLANET_Y_SPREAD);
    let pos = Vec3::new(angle.cos() * spec.distance, y, angle.sin() * spec.distance);

    world.spawn(|id| {
        Visual::new(id)
            .with_tag(format!("{}/orbit", spec.name))
            .with_appearance(
                Appearance::new(
                    Shape::OrbitPath { radius: spec.distance, width: bodies::ORBIT_PATH_WIDTH },
                    Rgb::WHITE,
                )
                .with_emissive(true),
            )
    });

    let planet = world.spawn(|id| {
        Visual::new(id)
            .with_tag(spec.name)
            .with_pos(pos)
            .with_appearance(sphere(spec.radius, spec.color))
    });
    let mut body = Body::planet(planet, spec.distance, spec.orbit_speed, angle);

    if let Some(color) = spec.atmosphere {
        let atmosphere = world.spawn_child(planet, |id| {
            Visual::new(id)
                .with_tag(format!("{}/atmosphere", spec.name))
                .with_appearance(
                    sphere(spec.radius * bodies::ATMOSPHERE_SCALE, color)
                        .with_opacity(bodies::ATMOSPHERE_OPACITY),
                )
        });
        body.attach(Attachment::rigid(atmosphere, AttachmentKind::Atmosphere));
    }

    if spec.rings {
        let ring = world.spawn_child(planet, |id| {
            Visual::new(id)
                .with_tag(format!("{}/ring", spec.name))
                .with_rotation(Vec3::new(bodies::RING_TILT, 0.0, 0.0))
                .with_appearance(
                    Appearance::new(
                        Shape::Ring {
                            inner: spec.radius * bodies::RING_INNER,
                            outer: spec.radius * bodies::RING_OUTER,
                        },
                        Rgb::from_hex(bodies::RING_COLOR),
                    )
                    .with_opacity(bodies::RING_OPACITY),
                )
        });
        body.attach(Attachment::rigid(ring, AttachmentKind::Ring));
    }

    let moon_count = match spec.moons {
        Moons::None => 0,
        Moons::Fixed(n) => n,
        Moons::Random { min, spread } => min + rng.next_int(spread),
    };
    for _ in 0..moon_count {
        let moon = spawn_moon(world, rng, planet, spec);
        body.attach(moon);
    }

    let label = world.spawn_child(planet, |id| {
        let (width, height) = bodies::LABEL_TEXELS;
        Visual::new(id)
            .with_tag(format!("{}/label", spec.name))
            .with_pos(Vec3::from_array(bodies::LABEL_OFFSET))
            .with_scale(Vec3::new(
                spec.radius * bodies::LABEL_SCALE.0,
                spec.radius * bodies::LABEL_SCALE.1,
                1.0,
            ))
            .with_appearance(Appearance::new(
                Shape::Label { text: spec.name.to_string(), width, height },
                Rgb::WHITE,
            ))
    });
    body.attach(Attachment::rigid(label, AttachmentKind::Label));

    world.add_body(body);
}

/// A moon placed on a random bearing around `planet`. Its orbit radius is the
/// horizontal distance it was placed at.
fn spawn_moon(world: &mut WorldSetup, rng: &mut Rng, planet: VisualId, spec: &PlanetSpec) -> Attachment {
    let size = spec.radius * rng.range(bodies::MOON_SIZE.0, bodies::MOON_SIZE.1);
    let distance = spec.radius * rng.range(bodies::MOON_DISTANCE.0, bodies::MOON_DISTANCE.1);
    let bearing = rng.angle();
    let y = rng.spread(distance * bodies::MOON_Y_SPREAD);

    let moon = world.spawn_child(planet, |id| {
        Visual::new(id)
            .with_tag(format!("{}/moon", spec.name))
            .with_pos(Vec3::new(bearing.cos() * distance, y, bearing.sin() * distance))
            .with_appearance(sphere(size, bodies::MOON_COLOR))
    });
    Attachment::moon(moon, distance)
}

fn spawn_asteroid_belt(world: &mut WorldSetup, rng: &mut Rng) {
    let inner = bodies::BELT_CENTER - bodies::BELT_WIDTH / 2.0;
    for _ in 0..bodies::BELT_COUNT {
        let size = rng.range(bodies::ASTEROID_SIZE.0, bodies::ASTEROID_SIZE.1);
        let angle = rng.angle();
        let radius = inner + rng.next_f32() * bodies::BELT_WIDTH;
        let y = rng.spread(bodies::ASTEROID_Y_SPREAD);
        let tumble = Vec3::new(
            rng.next_f32() * std::f32::consts::PI,
            rng.next_f32() * std::f32::consts::PI,
            rng.next_f32() * std::f32::consts::PI,
        );
        let speed = rng.range(bodies::ASTEROID_SPEED.0, bodies::ASTEROID_SPEED.1);

        let asteroid = world.spawn(|id| {
            Visual::new(id)
                .with_tag("asteroid")
                .with_pos(Vec3::new(angle.cos() * radius, y, angle.sin() * radius))
                .with_rotation(tumble)
                .with_scale(Vec3::splat(size))
                .with_appearance(Appearance::new(
                    Shape::Icosahedron { radius: 1.0 },
                    Rgb::from_hex(bodies::ASTEROID_COLOR),
                ))
        });
        world.add_body(Body::asteroid(asteroid, radius, speed, angle));
    }
}
