//! Configuration management for hotprospects.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prospect::DEFAULT_NAME;
use crate::view::{Filter, SortOrder};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "hotprospects";

/// Default prospects file name.
const DATA_FILE_NAME: &str = "prospects.json";

/// Email address on the card until the user sets one.
const DEFAULT_EMAIL: &str = "you@yoursite.com";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `HOTPROSPECTS_`)
/// 2. TOML config file at `~/.config/hotprospects/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Reminder configuration.
    pub reminders: ReminderConfig,
    /// List display defaults.
    pub view: ViewConfig,
    /// The user's own card.
    pub me: MeConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the prospects file.
    /// Defaults to `~/.local/share/hotprospects/prospects.json`
    pub data_path: Option<PathBuf>,
}

/// Reminder-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between scheduling a reminder and its delivery.
    pub delay_secs: u64,
    /// Ring the terminal bell on delivery.
    pub sound: bool,
    /// Grant notification authorization when asked.
    pub allow_notifications: bool,
}

/// Defaults for the `list` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Filter used when none is given.
    pub default_filter: Filter,
    /// Sort order used when none is given.
    pub default_sort: SortOrder,
}

/// The user's own details, shared through `prospects me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeConfig {
    /// Name on the card.
    pub name: String,
    /// Email address on the card.
    pub email_address: String,
}

impl Default for MeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email_address: DEFAULT_EMAIL.to_string(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            delay_secs: 5,
            sound: true,
            allow_notifications: true,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("HOTPROSPECTS_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.reminders.delay_secs == 0 {
            return Err(Error::ConfigValidation {
                message: "reminders.delay_secs must be greater than 0".to_string(),
            });
        }

        if let Some(path) = &self.storage.data_path {
            if path.as_os_str().is_empty() || path.file_name().is_none() {
                return Err(Error::ConfigValidation {
                    message: format!("storage.data_path is not a file path: {}", path.display()),
                });
            }
        }

        for (key, value) in [
            ("me.name", &self.me.name),
            ("me.email_address", &self.me.email_address),
        ] {
            if value.contains('\n') {
                return Err(Error::ConfigValidation {
                    message: format!("{key} must be a single line"),
                });
            }
        }

        Ok(())
    }

    /// Get the prospects file path, resolving defaults if not set.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.storage
            .data_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATA_FILE_NAME))
    }

    /// Get the reminder delay as a Duration.
    #[must_use]
    pub fn reminder_delay(&self) -> Duration {
        Duration::from_secs(self.reminders.delay_secs)
    }
}
