//! Game settings loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid config. Balance
//! constants (decay rates, action costs and effects) are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::StartingStats;

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Target frames (ticks) per second.
    pub fps: u32,
    /// Name used when the player does not enter one.
    pub default_player_name: String,
    /// Stats for a new game.
    pub starting_stats: StartingStats,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Life in the Fast Lane".to_string(),
            screen_width: 1280,
            screen_height: 720,
            fps: 60,
            default_player_name: "Player".to_string(),
            starting_stats: StartingStats::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails [`GameConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), fps = config.fps, "loaded config");
        Ok(config)
    }

    /// Parse and validate a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML for this schema or
    /// fails [`GameConfig::validate`].
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are playable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be empty".to_string()));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be positive".to_string()));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }

        let start = &self.starting_stats;
        if start.money < 0 {
            return Err(ConfigError::Invalid(format!(
                "starting money must not be negative, got {}",
                start.money
            )));
        }
        for (name, value) in [
            ("happiness", start.happiness),
            ("education", start.education),
            ("health", start.health),
            ("energy", start.energy),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "starting {name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Number of ticks that make up `seconds` of play at the configured fps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks_for_seconds(&self, seconds: f64) -> u64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        (seconds * f64::from(self.fps)).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fps, 60);
        assert_eq!(config.default_player_name, "Player");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::parse_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_starting_stats() {
        let config = GameConfig::parse_toml(
            r#"
            fps = 30

            [starting_stats]
            money = 500
            energy = 8.0
            "#,
        )
        .unwrap();

        assert_eq!(config.fps, 30);
        assert_eq!(config.starting_stats.money, 500);
        assert!((config.starting_stats.energy - 8.0).abs() < f64::EPSILON);
        assert!((config.starting_stats.health - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_zero_fps() {
        let err = GameConfig::parse_toml("fps = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_energy() {
        let err = GameConfig::parse_toml("[starting_stats]\nenergy = -1.0").unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = GameConfig::parse_toml("fps = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_player_name = \"Rita\"").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.default_player_name, "Rita");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/fastlane.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_ticks_for_seconds() {
        let config = GameConfig::default();
        assert_eq!(config.ticks_for_seconds(0.5), 30);
        assert_eq!(config.ticks_for_seconds(2.0), 120);
        assert_eq!(config.ticks_for_seconds(-1.0), 0);
        assert_eq!(config.ticks_for_seconds(f64::NAN), 0);
    }
}
