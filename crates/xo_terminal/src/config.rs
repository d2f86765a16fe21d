//! Terminal front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Background color used for the winning line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HighlightColor {
    /// Green background.
    #[default]
    Green,
    /// Yellow background.
    Yellow,
    /// Magenta background.
    Magenta,
    /// Cyan background.
    Cyan,
    /// White background.
    White,
}

/// Settings read from `xo.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// File that receives tracing output while the board is on screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Background color of the winning cells.
    #[serde(default)]
    highlight: HighlightColor,

    /// Draw 1-9 in empty cells as a keyboard hint.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("xo.log")
}

#[instrument]
fn default_show_cell_numbers() -> bool {
    true
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            highlight: HighlightColor::default(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(highlight = %config.highlight, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the highlight color replaced.
    pub fn with_highlight(self, highlight: HighlightColor) -> Self {
        Self { highlight, ..self }
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
    /// Creates a new config error with caller location tracking.
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
