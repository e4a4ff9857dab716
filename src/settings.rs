//! Game configuration and variant presets
//!
//! Every tuning knob of a round lives in [`GameConfig`]. The prototype
//! variants of the game differ only in data, so they are expressed as
//! [`Variant`] presets rather than separate state machines.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::KeyBindings;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse configuration")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Charge target out of range (got {0})")]
    InvalidChargeTarget(i64),
    #[error("Tick rate out of range (got {0})")]
    InvalidTickRate(i64),
    #[error("Charge floor {floor} out of range for target {target}")]
    InvalidFloor { floor: i64, target: i64 },
    #[error("Velocity floor must not be positive (got {0})")]
    InvalidVelocityFloor(i64),
    #[error("Image scale must be finite and positive (got {0})")]
    InvalidImageScale(f32),
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}

/// Prototype variants of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    #[default]
    Classic,
    Sprint,
    Marathon,
    Gentle,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Sprint,
        Variant::Marathon,
        Variant::Gentle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Sprint => "Sprint",
            Variant::Marathon => "Marathon",
            Variant::Gentle => "Gentle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "sprint" => Some(Variant::Sprint),
            "marathon" => Some(Variant::Marathon),
            "gentle" => Some(Variant::Gentle),
            _ => None,
        }
    }

    /// Charge needed to finish a round
    pub fn charge_target(&self) -> i64 {
        match self {
            Variant::Classic => CHARGE_TARGET,
            Variant::Sprint => 100,
            Variant::Marathon => 2000,
            Variant::Gentle => 300,
        }
    }
}

/// Round tuning and screen layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Charge at which the round is won
    pub charge_target: i64,
    /// Simulation rate multiplier applied to each tick's rotation
    pub tick_rate: i64,
    /// Lowest charge allowed (None = unclamped, charge may go negative)
    pub charge_floor: Option<i64>,
    /// Lowest angular velocity allowed (None = unclamped)
    pub velocity_floor: Option<i64>,

    // === Presentation ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub image_scale: f32,
    /// Show the best score line on the HUD
    pub show_best_score: bool,

    pub bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            charge_target: CHARGE_TARGET,
            tick_rate: TICK_RATE,
            charge_floor: None,
            velocity_floor: None,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            image_width: IMAGE_WIDTH,
            image_height: IMAGE_HEIGHT,
            image_scale: 1.0,
            show_best_score: true,

            bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Create a config from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        let mut config = Self {
            charge_target: variant.charge_target(),
            ..Self::default()
        };

        match variant {
            Variant::Classic | Variant::Sprint => {}
            Variant::Marathon => {
                config.screen_width = 480;
                config.screen_height = 480;
                config.image_scale = 1.5;
            }
            Variant::Gentle => {
                config.charge_floor = Some(0);
                config.velocity_floor = Some(0);
            }
        }

        config
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a JSON config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Using default config ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Check the invariants the round logic relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CHARGE_TARGET).contains(&self.charge_target) {
            return Err(ConfigError::InvalidChargeTarget(self.charge_target));
        }
        if !(1..=MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        if let Some(floor) = self.charge_floor {
            if !(-MAX_CHARGE_TARGET..self.charge_target).contains(&floor) {
                return Err(ConfigError::InvalidFloor {
                    floor,
                    target: self.charge_target,
                });
            }
        }
        // Velocity starts at 0 each round, so the floor must not be above it
        if let Some(floor) = self.velocity_floor {
            if floor > 0 {
                return Err(ConfigError::InvalidVelocityFloor(floor));
            }
        }
        if !self.image_scale.is_finite() || self.image_scale <= 0.0 {
            return Err(ConfigError::InvalidImageScale(self.image_scale));
        }
        Ok(())
    }

    /// Charge target expressed in accumulated rotation degrees
    pub fn target_degrees(&self) -> i64 {
        self.charge_target * DEGREES_PER_CHARGE
    }

    /// Charge floor expressed in accumulated rotation degrees
    pub fn floor_degrees(&self) -> Option<i64> {
        self.charge_floor.map(|floor| floor * DEGREES_PER_CHARGE)
    }
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::from_str(s).ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        assert_eq!(GameConfig::default(), GameConfig::from_variant(Variant::Classic));
        assert_eq!(GameConfig::default().charge_target, 500);
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_all_presets_valid() {
        for variant in Variant::ALL {
            let config = GameConfig::from_variant(variant);
            assert!(config.validate().is_ok(), "{} preset invalid", variant.as_str());
            assert_eq!(Variant::from_str(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(Variant::from_str("SPRINT"), Some(Variant::Sprint));
        assert_eq!(Variant::from_str("nope"), None);
        let parsed: Result<Variant, _> = "nope".parse();
        assert!(matches!(parsed, Err(ConfigError::UnknownVariant(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{ "charge_target": 50, "velocity_floor": -3 }"#)
            .expect("valid config");
        assert_eq!(config.charge_target, 50);
        assert_eq!(config.velocity_floor, Some(-3));
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.bindings, KeyBindings::default());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "charge_target": 0 }"#),
            Err(ConfigError::InvalidChargeTarget(0))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_rate": -1 }"#),
            Err(ConfigError::InvalidTickRate(-1))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "charge_target": 10, "charge_floor": 10 }"#),
            Err(ConfigError::InvalidFloor { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "velocity_floor": 5 }"#),
            Err(ConfigError::InvalidVelocityFloor(5))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "image_scale": 0.0 }"#),
            Err(ConfigError::InvalidImageScale(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_values_that_overflow_degrees() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "charge_target": 30000000000000000 }"#),
            Err(ConfigError::InvalidChargeTarget(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_rate": 9223372036854775807 }"#),
            Err(ConfigError::InvalidTickRate(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "charge_floor": -30000000000000000 }"#),
            Err(ConfigError::InvalidFloor { .. })
        ));

        let largest = GameConfig {
            charge_target: MAX_CHARGE_TARGET,
            tick_rate: MAX_TICK_RATE,
            charge_floor: Some(-MAX_CHARGE_TARGET),
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
        assert_eq!(largest.target_degrees(), MAX_CHARGE_TARGET * 360);
    }

    #[test]
    fn test_zero_and_negative_velocity_floor_allowed() {
        for floor in [0, -10] {
            let config = GameConfig {
                velocity_floor: Some(floor),
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/nonexistent/crank-charger.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_degree_conversion() {
        let config = GameConfig::from_variant(Variant::Gentle);
        assert_eq!(config.target_degrees(), 300 * 360);
        assert_eq!(config.floor_degrees(), Some(0));
    }
}
