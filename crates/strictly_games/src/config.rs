//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::Mark;
use tracing::{debug, info, instrument};

/// Config file used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_games.toml";

/// Front-end settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How the board is drawn.
    display: DisplaySettings,

    /// Where logs go.
    logging: LoggingSettings,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Symbol drawn for Cross.
    cross_symbol: String,

    /// Symbol drawn for Circle.
    circle_symbol: String,

    /// Title shown above the board.
    title: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            cross_symbol: "X".to_string(),
            circle_symbol: "O".to_string(),
            title: "Strictly Games - Tic Tac Toe".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file for the interactive game.
    file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("strictly_games.log"),
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from an explicit path, or from the default path if it
    /// exists, or falls back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the configured symbol for a mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::Cross => &self.display.cross_symbol,
            Mark::Circle => &self.display.circle_symbol,
        }
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
        let settings = Settings::default();
        assert_eq!(settings.symbol(Mark::Cross), "X");
        assert_eq!(settings.symbol(Mark::Circle), "O");
        assert_eq!(settings.logging().filter(), "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ncross_symbol = \"✕\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.symbol(Mark::Cross), "✕");
        assert_eq!(settings.symbol(Mark::Circle), "O");
        assert_eq!(settings.logging(), &LoggingSettings::default());
    }

    #[test]
    fn test_logging_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nfile = \"game.log\"\nfilter = \"debug\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.logging().file(), &PathBuf::from("game.log"));
        assert_eq!(settings.logging().filter(), "debug");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display\ncross_symbol = 3").unwrap();

        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }
}
