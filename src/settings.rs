//! Game configuration and presets
//!
//! Plain numeric configuration, loadable from JSON. Every field has a
//! default, so a config file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::World;

/// Resolution presets. The scale factor is only used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Resolution {
    #[serde(rename = "480p")]
    R480p,
    #[default]
    #[serde(rename = "720p")]
    R720p,
    #[serde(rename = "1080p")]
    R1080p,
    #[serde(rename = "1440p")]
    R1440p,
    #[serde(rename = "2160p")]
    R2160p,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::R480p => "480p",
            Resolution::R720p => "720p",
            Resolution::R1080p => "1080p",
            Resolution::R1440p => "1440p",
            Resolution::R2160p => "2160p",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "480p" => Some(Resolution::R480p),
            "720p" => Some(Resolution::R720p),
            "1080p" => Some(Resolution::R1080p),
            "1440p" => Some(Resolution::R1440p),
            "2160p" | "4k" => Some(Resolution::R2160p),
            _ => None,
        }
    }

    /// Width and height in world units
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            Resolution::R480p => (640.0, 360.0),
            Resolution::R720p => (1280.0, 720.0),
            Resolution::R1080p => (1920.0, 1080.0),
            Resolution::R1440p => (2560.0, 1440.0),
            Resolution::R2160p => (3840.0, 2160.0),
        }
    }

    /// Render scale relative to 720p
    pub fn scale(&self) -> f32 {
        match self {
            Resolution::R480p => 0.5,
            Resolution::R720p => 1.0,
            Resolution::R1080p => 1.5,
            Resolution::R1440p => 2.0,
            Resolution::R2160p => 3.0,
        }
    }
}

/// Ball size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BallSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BallSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallSize::Small => "small",
            BallSize::Medium => "medium",
            BallSize::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(BallSize::Small),
            "medium" | "med" => Some(BallSize::Medium),
            "large" => Some(BallSize::Large),
            _ => None,
        }
    }

    /// Side length of the (square) ball
    pub fn size(&self) -> f32 {
        match self {
            BallSize::Small => 8.0,
            BallSize::Medium => 12.0,
            BallSize::Large => 16.0,
        }
    }
}

/// Paddle size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaddleSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PaddleSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleSize::Small => "small",
            PaddleSize::Medium => "medium",
            PaddleSize::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(PaddleSize::Small),
            "medium" | "med" => Some(PaddleSize::Medium),
            "large" => Some(PaddleSize::Large),
            _ => None,
        }
    }

    /// Paddle width (height is width / 5)
    pub fn width(&self) -> f32 {
        match self {
            PaddleSize::Small => 60.0,
            PaddleSize::Medium => 100.0,
            PaddleSize::Large => 140.0,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub resolution: Resolution,

    // === Entities ===
    pub paddle_size: PaddleSize,
    pub ball_size: BallSize,
    /// Ball speed per axis, pixels per tick
    pub ball_speed: f32,
    /// Paddle speed, pixels per tick
    pub paddle_speed: f32,
    pub ball_damage: i32,
    pub brick_health: i32,

    // === Session ===
    pub lives: u8,
    /// Seed for entity identities (random when absent)
    pub seed: Option<u64>,
    pub player_name: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::R720p,

            paddle_size: PaddleSize::Medium,
            ball_size: BallSize::Medium,
            ball_speed: BALL_SPEED,
            paddle_speed: PADDLE_SPEED,
            ball_damage: BALL_DAMAGE,
            brick_health: BRICK_HEALTH,

            lives: START_LIVES,
            seed: None,
            player_name: "Player".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl GameConfig {
    /// World extents for the selected resolution
    pub fn world(&self) -> World {
        let (width, height) = self.resolution.dimensions();
        World::new(width, height)
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Read a configuration file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_720p_medium() {
        let config = GameConfig::default();
        let world = config.world();
        assert_eq!((world.width, world.height), (1280.0, 720.0));
        assert_eq!(config.paddle_size.width(), 100.0);
        assert_eq!(config.ball_size.size(), 12.0);
        assert_eq!(config.ball_speed, 5.0);
        assert_eq!(config.lives, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(
            r#"{ "resolution": "1080p", "ball_size": "large", "ball_speed": 7.5 }"#,
        )
        .unwrap();
        assert_eq!(config.resolution, Resolution::R1080p);
        assert_eq!(config.resolution.scale(), 1.5);
        assert_eq!(config.ball_size, BallSize::Large);
        assert_eq!(config.ball_speed, 7.5);
        assert_eq!(config.paddle_size, PaddleSize::Medium);
        assert_eq!(config.player_name, "Player");
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            seed: Some(99),
            resolution: Resolution::R480p,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"480p\""));
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            GameConfig::from_json("{ \"lives\": -1 }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/nonexistent/brickout.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(Resolution::from_str("1440P"), Some(Resolution::R1440p));
        assert_eq!(Resolution::from_str("8k"), None);
        assert_eq!(BallSize::from_str("med"), Some(BallSize::Medium));
        assert_eq!(PaddleSize::from_str("LARGE").map(|p| p.as_str()), Some("large"));
    }
}
