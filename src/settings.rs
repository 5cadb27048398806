//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{EngineConfig, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Front-end settings.
///
/// ```toml
/// first_player = "O"
/// log_filter = "noughts_engine=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Who opens each round.
    #[serde(default)]
    first_player: Player,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Settings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self {
            first_player: Player::default(),
            log_filter: default_log_filter(),
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(first_player = %settings.first_player, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No settings file, using defaults");
            Ok(Self::new())
        }
    }

    /// Overrides the opening player when one is given.
    pub fn with_first_player(mut self, first_player: Option<Player>) -> Self {
        if let Some(player) = first_player {
            self.first_player = player;
        }
        self
    }

    /// Engine configuration derived from these settings.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.first_player)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.first_player(), &Player::X);
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("first_player = \"O\"").unwrap();
        assert_eq!(settings.first_player(), &Player::O);
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_override_first_player() {
        let settings = Settings::new().with_first_player(Some(Player::O));
        assert_eq!(settings.engine_config().first_player, Player::O);
        let settings = settings.with_first_player(None);
        assert_eq!(settings.engine_config().first_player, Player::O);
    }
}
