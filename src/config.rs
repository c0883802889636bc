//! Application configuration loaded from TOML.

use crate::games::tictactoe::{Mode, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TICTACTOE_DUEL_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_duel.toml";

/// Settings for a play session. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause before the computer moves, in milliseconds.
    ai_delay_ms: u64,

    /// Mode used when the CLI does not pick one.
    default_mode: Mode,

    /// Mark the computer plays.
    ai_mark: Player,

    /// Where logs go while the terminal UI is running.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            default_mode: Mode::PlayerVsPlayer,
            ai_mark: Player::O,
            log_file: PathBuf::from("tictactoe_duel.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config source and loads it.
    ///
    /// Order: `explicit`, then [`CONFIG_ENV`], then [`DEFAULT_CONFIG_FILE`]
    /// if it exists, then built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_file(fallback);
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Pause before the computer moves.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
        assert_eq!(*config.default_mode(), Mode::PlayerVsPlayer);
        assert_eq!(*config.ai_mark(), Player::O);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ai_delay_ms = 50\ndefault_mode = \"ai\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.ai_delay_ms(), 50);
        assert_eq!(*config.default_mode(), Mode::PlayerVsAi);
        assert_eq!(*config.ai_mark(), Player::O);
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_duel.log"));
    }

    #[test]
    fn test_ai_mark_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ai_mark = \"X\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.ai_mark(), Player::X);
    }

    #[test]
    fn test_bad_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_mode = \"solo\"").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ai_delay_ms = 10").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(*config.ai_delay_ms(), 10);
    }
}
