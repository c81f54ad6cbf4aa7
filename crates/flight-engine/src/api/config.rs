use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::input::state::KeyBindings;

/// Half-width of the playable volume, in world units.
pub const SPACE_SIZE: f32 = 100_000.0;

/// Largest instance capacity a config may ask the frame buffer for.
pub const MAX_INSTANCES: usize = 65_536;

/// How roll self-levelling scales with frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollDecay {
    /// `roll *= factor` once per frame, whatever the frame length.
    #[default]
    PerFrame,
    /// `roll *= factor^(dt * reference_hz)`, frame-rate independent.
    TimeScaled,
}

/// Rocket handling coefficients. Rates are per reference frame
/// and get multiplied by `dt * reference_hz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Pitch change per reference frame (radians).
    pub pitch_rate: f32,
    /// Yaw change per reference frame (radians).
    pub yaw_rate: f32,
    /// Thrust change per reference frame.
    pub thrust_rate: f32,
    pub thrust_min: f32,
    pub thrust_max: f32,
    /// Distance per reference frame at thrust 1.
    pub speed: f32,
    /// Frame rate the per-frame rates were tuned for.
    pub reference_hz: f32,
    /// Roll multiplier applied each frame (or each reference frame).
    pub roll_decay: f32,
    pub roll_decay_mode: RollDecay,
    /// Containment starts at this fraction of `space_size`.
    pub boundary_fraction: f32,
    /// Distance moved toward the origin per frame while outside the boundary.
    pub boundary_pull: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            pitch_rate: 0.03,
            yaw_rate: 0.02,
            thrust_rate: 0.05,
            thrust_min: 0.5,
            thrust_max: 3.0,
            speed: 8.0,
            reference_hz: 60.0,
            roll_decay: 0.98,
            roll_decay_mode: RollDecay::PerFrame,
            boundary_fraction: 0.45,
            boundary_pull: 0.5,
        }
    }
}

/// Orbit and spin rates for celestial bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    /// Multiplier from a body's orbit speed to radians per second.
    pub time_scale: f32,
    /// Asteroid self-spin per second, before `time_scale`.
    pub asteroid_spin: f32,
    /// Planet self-spin, radians per second.
    pub planet_spin: f32,
    /// Moon self-spin, radians per second.
    pub moon_spin: f32,
    /// Moon orbit angle per host millisecond, before the phase factor.
    pub moon_clock: f64,
    /// Phase factor of the first attachment.
    pub moon_phase_base: f64,
    /// Phase factor added per attachment index.
    pub moon_phase_step: f64,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            time_scale: 10.0,
            asteroid_spin: 0.01,
            planet_spin: 0.2,
            moon_spin: 0.5,
            moon_clock: 0.001,
            moon_phase_base: 0.5,
            moon_phase_step: 0.2,
        }
    }
}

/// Chase camera placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Camera position relative to the rocket, in rocket space.
    pub offset: Vec3,
    /// Look target relative to the rocket, in rocket space.
    pub look_ahead: Vec3,
    /// Fraction of the remaining distance covered each frame, in (0, 1].
    pub smoothing: f32,
    /// Where the camera sits before the first frame.
    pub start_position: Vec3,
    pub start_target: Vec3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 20.0, -100.0),
            look_ahead: Vec3::new(0.0, 0.0, 50.0),
            smoothing: 0.05,
            start_position: Vec3::new(-18_000.0, 2_000.0, 300.0),
            start_target: Vec3::ZERO,
        }
    }
}

/// Frame timing policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockParams {
    /// Largest delta a single frame may advance, in seconds. `null` disables the clamp.
    pub max_delta: Option<f32>,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self {
            max_delta: Some(1.0 / 15.0),
        }
    }
}

/// Complete simulation configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Half-width of the playable volume.
    pub space_size: f32,
    /// Capacity of the per-frame render export.
    pub max_instances: usize,
    pub flight: FlightParams,
    pub orbit: OrbitParams,
    pub camera: CameraParams,
    pub clock: ClockParams,
    pub keys: KeyBindings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            space_size: SPACE_SIZE,
            max_instances: 1024,
            flight: FlightParams::default(),
            orbit: OrbitParams::default(),
            camera: CameraParams::default(),
            clock: ClockParams::default(),
            keys: KeyBindings::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::debug!(
            "config loaded: space_size={}, max_delta={:?}, roll_decay={:?}",
            config.space_size,
            config.clock.max_delta,
            config.flight.roll_decay_mode
        );
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.space_size > 0.0) {
            return Err(ConfigError::invalid("space_size", "must be positive"));
        }
        if self.max_instances > MAX_INSTANCES {
            return Err(ConfigError::invalid(
                "max_instances",
                format!("{} exceeds the limit of {}", self.max_instances, MAX_INSTANCES),
            ));
        }
        let f = &self.flight;
        if !(f.thrust_min > 0.0) {
            return Err(ConfigError::invalid("flight.thrust_min", "must be positive"));
        }
        if f.thrust_min > f.thrust_max {
            return Err(ConfigError::invalid(
                "flight.thrust_max",
                format!("{} is below thrust_min {}", f.thrust_max, f.thrust_min),
            ));
        }
        if !(f.boundary_fraction > 0.0 && f.boundary_fraction <= 1.0) {
            return Err(ConfigError::invalid("flight.boundary_fraction", "must be in (0, 1]"));
        }
        if !(self.camera.smoothing > 0.0 && self.camera.smoothing <= 1.0) {
            return Err(ConfigError::invalid("camera.smoothing", "must be in (0, 1]"));
        }
        if let Some(max) = self.clock.max_delta {
            if !(max > 0.0) {
                return Err(ConfigError::invalid("clock.max_delta", "must be positive or null"));
            }
        }
        Ok(())
    }

    /// This config if it validates, otherwise the defaults. The rejection is logged.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::error!("invalid config, falling back to defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Distance from the origin beyond which the rocket is pulled back.
    pub fn boundary_limit(&self) -> f32 {
        self.space_size * self.flight.boundary_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::state::Key;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.boundary_limit() - 45_000.0).abs() < 1e-3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SimConfig::from_json(r#"{ "flight": { "speed": 12.0 } }"#).unwrap();
        assert_eq!(config.flight.speed, 12.0);
        assert_eq!(config.flight.thrust_max, 3.0);
        assert_eq!(config.camera.offset, Vec3::new(0.0, 20.0, -100.0));
        assert_eq!(config.keys.resolve("Space"), Some(Key::CameraReset));
    }

    #[test]
    fn null_max_delta_disables_clamp() {
        let config = SimConfig::from_json(r#"{ "clock": { "max_delta": null } }"#).unwrap();
        assert_eq!(config.clock.max_delta, None);
    }

    #[test]
    fn roll_decay_mode_parses() {
        let config = SimConfig::from_json(r#"{ "flight": { "roll_decay_mode": "time_scaled" } }"#).unwrap();
        assert_eq!(config.flight.roll_decay_mode, RollDecay::TimeScaled);
    }

    #[test]
    fn inverted_thrust_range_is_rejected() {
        let err = SimConfig::from_json(r#"{ "flight": { "thrust_min": 4.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "flight.thrust_max"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn smoothing_out_of_range_is_rejected() {
        assert!(SimConfig::from_json(r#"{ "camera": { "smoothing": 0.0 } }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "camera": { "smoothing": 1.5 } }"#).is_err());
        assert!(SimConfig::from_json(r#"{ "camera": { "smoothing": 1.0 } }"#).is_ok());
    }

    #[test]
    fn oversized_instance_capacity_is_rejected() {
        let err = SimConfig::from_json(r#"{ "max_instances": 4000000000 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "max_instances"),
            other => panic!("unexpected error: {other}"),
        }
        let at_limit = format!(r#"{{ "max_instances": {} }}"#, MAX_INSTANCES);
        assert!(SimConfig::from_json(&at_limit).is_ok());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let mut config = SimConfig::default();
        config.flight.thrust_min = 4.0;
        config.space_size = 20_000.0;
        assert_eq!(config.or_default(), SimConfig::default());

        let custom = SimConfig { space_size: 20_000.0, ..SimConfig::default() };
        assert_eq!(custom.clone().or_default(), custom);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
