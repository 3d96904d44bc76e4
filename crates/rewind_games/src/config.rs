//! Display configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::HistoryOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the game is shown. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Order of the history listing at startup.
    #[serde(default)]
    history_order: HistoryOrder,

    /// Show `(row, col)` next to each history entry.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Print views as JSON instead of text.
    #[serde(default)]
    json: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_show_coordinates() -> bool {
    true
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            show_coordinates: default_show_coordinates(),
            json: false,
            log_filter: default_log_filter(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = %config.history_order, json = config.json, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line flags; a set flag always wins over the file.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, reversed: bool, json: bool) -> Self {
        if reversed {
            self.history_order = HistoryOrder::Reversed;
        }
        if json {
            self.json = true;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
