//! Planet table and visual constants for the solar system.
//!
//! Distances and sizes are game units, chosen for flyability rather than
//! scale: the whole system fits inside a 100 000-unit cube.

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 500.0;
pub const SUN_COLOR: u32 = 0xffff00;
/// (radius, colour, opacity) for each glow shell.
pub const SUN_GLOWS: [(f32, u32, f32); 2] = [(550.0, 0xff7700, 0.3), (800.0, 0xff9900, 0.1)];

// ── Background ───────────────────────────────────────────────────────

pub const STAR_COUNT: u32 = 10_000;
/// Star shell radius as a fraction of the space size.
pub const STAR_SHELL: f32 = 0.8;

// ── Planets ──────────────────────────────────────────────────────────

/// How many moons a planet gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Moons {
    None,
    /// Exactly this many.
    Fixed(u32),
    /// Between `min` and `min + spread - 1`, picked per seed.
    Random { min: u32, spread: u32 },
}

pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    pub color: u32,
    pub orbit_speed: f32,
    pub atmosphere: Option<u32>,
    pub rings: bool,
    pub moons: Moons,
}

pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "Mercury", radius: 50.0, distance: 1200.0, color: 0x888888, orbit_speed: 0.01, atmosphere: None, rings: false, moons: Moons::None },
    PlanetSpec { name: "Venus", radius: 90.0, distance: 2200.0, color: 0xcc9966, orbit_speed: 0.007, atmosphere: Some(0xffcc66), rings: false, moons: Moons::None },
    PlanetSpec { name: "Earth", radius: 100.0, distance: 3000.0, color: 0x3366ff, orbit_speed: 0.005, atmosphere: Some(0x6699ff), rings: false, moons: Moons::Fixed(1) },
    PlanetSpec { name: "Mars", radius: 75.0, distance: 4500.0, color: 0xcc3300, orbit_speed: 0.004, atmosphere: None, rings: false, moons: Moons::Fixed(1) },
    PlanetSpec { name: "Jupiter", radius: 250.0, distance: 7800.0, color: 0xccaa66, orbit_speed: 0.002, atmosphere: None, rings: false, moons: Moons::Random { min: 3, spread: 4 } },
    PlanetSpec { name: "Saturn", radius: 200.0, distance: 11500.0, color: 0xddcc99, orbit_speed: 0.0015, atmosphere: None, rings: true, moons: Moons::Random { min: 3, spread: 4 } },
    PlanetSpec { name: "Uranus", radius: 150.0, distance: 18000.0, color: 0x99ccff, orbit_speed: 0.001, atmosphere: None, rings: false, moons: Moons::None },
    PlanetSpec { name: "Neptune", radius: 140.0, distance: 25000.0, color: 0x3355ff, orbit_speed: 0.0007, atmosphere: None, rings: false, moons: Moons::None },
];

/// Planets start within ±this of the ecliptic.
pub const PLANET_Y_SPREAD: f32 = 100.0;
pub const ORBIT_PATH_WIDTH: f32 = 10.0;

pub const ATMOSPHERE_SCALE: f32 = 1.05;
pub const ATMOSPHERE_OPACITY: f32 = 0.2;

pub const RING_INNER: f32 = 1.3;
pub const RING_OUTER: f32 = 2.2;
pub const RING_TILT: f32 = std::f32::consts::FRAC_PI_3;
pub const RING_COLOR: u32 = 0xaa9966;
pub const RING_OPACITY: f32 = 0.7;

/// Moon size and distance, as multiples of the parent radius.
pub const MOON_SIZE: (f32, f32) = (0.1, 0.3);
pub const MOON_DISTANCE: (f32, f32) = (2.0, 5.0);
/// Vertical offset, as a fraction of the moon's distance.
pub const MOON_Y_SPREAD: f32 = 0.15;
pub const MOON_COLOR: u32 = 0xcccccc;

pub const LABEL_TEXELS: (u32, u32) = (256, 64);
/// Label width and height, as multiples of the planet radius.
pub const LABEL_SCALE: (f32, f32) = (1.5, 0.5);
pub const LABEL_OFFSET: [f32; 3] = [100.0, 10.0, 100.0];

// ── Asteroid belt ────────────────────────────────────────────────────

pub const BELT_CENTER: f32 = 6000.0;
pub const BELT_WIDTH: f32 = 1000.0;
pub const BELT_COUNT: usize = 200;
pub const ASTEROID_SIZE: (f32, f32) = (10.0, 50.0);
pub const ASTEROID_Y_SPREAD: f32 = 150.0;
pub const ASTEROID_SPEED: (f32, f32) = (0.002, 0.005);
pub const ASTEROID_COLOR: u32 = 0x888888;
