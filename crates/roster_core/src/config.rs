//! Configuration loading for the roster application.
//!
//! Layers, later overriding earlier:
//! 1. Built-in defaults
//! 2. TOML config file (missing file is fine)
//! 3. Environment variables prefixed with `ROSTER_`, nested keys split on
//!    `__` (for example `ROSTER_LOGGING__LEVEL=debug`)

use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::{default_log_level, LogLevel};
use crate::ui::table::{try_format_date, DEFAULT_DATE_FORMAT};

const APP_DIR_NAME: &str = "roster";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";
const ENV_PREFIX: &str = "ROSTER_";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),
    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Load(Box::new(value))
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub roster: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute log directory. Defaults to `<data_local_dir>/roster/logs`.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime` pattern for the hire date column.
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Start with the two sample employees.
    pub seed_sample_data: bool,
    /// Use counter ids (`1`, `2`, ...) instead of UUIDs.
    pub sequential_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            sequential_ids: false,
        }
    }
}

impl RosterConfig {
    /// Loads from the default config path and environment.
    ///
    /// # Errors
    /// Returns an error if a source fails to parse or validation fails.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(None)
    }

    /// Loads with an optional custom config file path.
    ///
    /// # Errors
    /// Returns an error if a source fails to parse or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let config: RosterConfig = Figment::new()
            .merge(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    #[must_use]
    pub fn default_log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME)
            .join(LOG_DIR_NAME)
    }

    /// Log directory, resolving the default if unset.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .dir
            .clone()
            .unwrap_or_else(Self::default_log_dir)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `Validation` for an unknown log level, a relative log
    /// directory, or a date format that is empty or cannot format a plain
    /// calendar date.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Err(err) = self.logging.level.parse::<LogLevel>() {
            return Err(ConfigError::Validation {
                message: err.to_string(),
            });
        }

        if let Some(dir) = &self.logging.dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Validation {
                    message: format!("logging.dir must be absolute, got `{}`", dir.display()),
                });
            }
        }

        let date_format = self.display.date_format.as_str();
        if date_format.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "display.date_format cannot be empty".to_string(),
            });
        }
        if try_format_date(NaiveDate::default(), date_format).is_none() {
            return Err(ConfigError::Validation {
                message: format!("invalid display.date_format `{date_format}`"),
            });
        }

        Ok(())
    }
}
