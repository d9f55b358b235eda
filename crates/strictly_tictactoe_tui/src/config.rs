//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File receiving log output while the terminal UI is active.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Colours used by the view.
    #[serde(default)]
    theme: ThemeConfig,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates the theme.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.resolve()?;
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Colour settings as written in the config file.
///
/// Values are anything ratatui's colour parser accepts: names such as
/// `blue` or hex strings such as `#8acaca`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Reset button background.
    accent: String,
    /// Square background.
    square: String,
    /// Board frame.
    board: String,
    /// Colour of X marks.
    mark_x: String,
    /// Colour of O marks.
    mark_o: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#8acaca".to_string(),
            square: "#dddddd".to_string(),
            board: "#eeeeee".to_string(),
            mark_x: "blue".to_string(),
            mark_o: "red".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses every colour string.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            accent: parse_color("accent", &self.accent)?,
            square: parse_color("square", &self.square)?,
            board: parse_color("board", &self.board)?,
            mark_x: parse_color("mark_x", &self.mark_x)?,
            mark_o: parse_color("mark_o", &self.mark_o)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for theme.{}: {:?}", key, value)))
}

/// Resolved colours handed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Reset button background.
    pub accent: Color,
    /// Square background.
    pub square: Color,
    /// Board frame.
    pub board: Color,
    /// Colour of X marks.
    pub mark_x: Color,
    /// Colour of O marks.
    pub mark_o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x8a, 0xca, 0xca),
            square: Color::Rgb(0xdd, 0xdd, 0xdd),
            board: Color::Rgb(0xee, 0xee, 0xee),
            mark_x: Color::Blue,
            mark_o: Color::Red,
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

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.theme().resolve().unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let config = TuiConfig::from_toml(
            r#"
            log_filter = "debug"

            [theme]
            mark_x = "green"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter(), "debug");
        let theme = config.theme().resolve().unwrap();
        assert_eq!(theme.mark_x, Color::Green);
        assert_eq!(theme.mark_o, Color::Red);
    }

    #[test]
    fn test_invalid_colour_is_rejected() {
        let err = TuiConfig::from_toml("[theme]\naccent = \"not-a-colour\"").unwrap_err();
        assert!(err.message.contains("theme.accent"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = TuiConfig::from_toml("log_file = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
    }
}
