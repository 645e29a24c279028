use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{CommandTarget, Config};
use crate::inventory::ItemKind;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/game-bridge/config.toml` on Unix/macOS, the platform
    /// equivalent elsewhere. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("game-bridge").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The slot view has at least one cell and items are worth something
    /// - Known item kinds are non-empty, well formed and unique
    /// - Event names, mount point and command targets are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.max_slots == 0 {
            return Err(invalid("inventory.max_slots must be greater than 0"));
        }

        if self.inventory.unit_value == 0 {
            return Err(invalid("inventory.unit_value must be greater than 0"));
        }

        if self.inventory.known_kinds.is_empty() {
            return Err(invalid("inventory.known_kinds must list at least one item kind"));
        }

        let mut seen = HashSet::new();
        for raw in &self.inventory.known_kinds {
            let kind = ItemKind::parse(raw).map_err(|err| ConfigError::ValidationError {
                message: format!("inventory.known_kinds: {}", err),
            })?;
            if !seen.insert(kind.clone()) {
                return Err(ConfigError::ValidationError {
                    message: format!("inventory.known_kinds lists '{}' more than once", kind),
                });
            }
        }

        if self.runtime.mount_point.trim().is_empty() {
            return Err(invalid("runtime.mount_point must not be empty"));
        }

        if self.events.item_collected.trim().is_empty()
            || self.events.counter_incremented.trim().is_empty()
        {
            return Err(invalid("event names must not be empty"));
        }

        if self.events.item_collected == self.events.counter_incremented {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "events.item_collected and events.counter_incremented are both '{}'",
                    self.events.item_collected
                ),
            });
        }

        check_command("commands.display_value", &self.commands.display_value)?;
        check_command("commands.increment_counter", &self.commands.increment_counter)?;

        Ok(())
    }
}

fn check_command(field: &str, command: &CommandTarget) -> Result<(), ConfigError> {
    if command.target.trim().is_empty() || command.method.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: format!("{} needs both a target and a method", field),
        });
    }
    Ok(())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
