use serde::{Deserialize, Serialize};

use crate::core::camera::{Camera, CameraMode};

/// Star field configuration. Every field has a default, so hosts may
/// override any subset from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of point stars in the pool (default: 500).
    pub star_count: usize,
    /// Number of comets in the pool (default: 6).
    pub comet_count: usize,
    /// Perspective divide constant (default: 600).
    pub fov: f32,
    /// Projection policy (default: orbit).
    pub camera: CameraMode,
    /// Tag stars with a palette tint (default: true).
    pub tinted_stars: bool,
    /// Draw one-tick motion streaks behind stars (default: false).
    pub star_streaks: bool,
    /// Seed for the particle RNG. Unset means [`StarfieldConfig::DEFAULT_SEED`].
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 500,
            comet_count: 6,
            fov: Camera::DEFAULT_FOV,
            camera: CameraMode::Orbit,
            tinted_stars: true,
            star_streaks: false,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    pub const DEFAULT_SEED: u64 = 42;

    /// Seed the particle RNG will use.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(Self::DEFAULT_SEED)
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a config, falling back to defaults on malformed input.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("starfield config rejected ({}), using defaults", err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = StarfieldConfig::from_json("{}").unwrap();
        assert_eq!(config, StarfieldConfig::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{ "star_count": 120, "camera": "fixed", "star_streaks": true }"#;
        let config = StarfieldConfig::from_json(json).unwrap();
        assert_eq!(config.star_count, 120);
        assert_eq!(config.camera, CameraMode::Fixed);
        assert!(config.star_streaks);
        assert_eq!(config.comet_count, 6);
        assert_eq!(config.fov, 600.0);
        assert_eq!(config.effective_seed(), StarfieldConfig::DEFAULT_SEED);
    }

    #[test]
    fn unknown_camera_mode_is_an_error() {
        assert!(StarfieldConfig::from_json(r#"{ "camera": "fisheye" }"#).is_err());
    }

    #[test]
    fn malformed_json_falls_back() {
        let config = StarfieldConfig::from_json_or_default("{ star_count: ");
        assert_eq!(config, StarfieldConfig::default());
    }

    #[test]
    fn round_trips_through_json() {
        let config = StarfieldConfig {
            comet_count: 9,
            seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(StarfieldConfig::from_json(&json).unwrap(), config);
    }
}
