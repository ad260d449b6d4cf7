//! Configuration management for preflight.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::briefing::DEFAULT_FORECAST_WINDOW_HOURS;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "preflight";

/// Longest look-ahead a terminal forecast can cover.
const MAX_FORECAST_WINDOW_HOURS: u32 = 30;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PREFLIGHT_`)
/// 2. TOML config file at `~/.config/preflight/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Briefing engine configuration.
    pub briefing: BriefingConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Briefing engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefingConfig {
    /// How far ahead, in hours, forecast periods are considered.
    pub forecast_window_hours: u32,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for briefings.
    pub format: OutputFormat,
    /// Print the raw METAR under the briefing header.
    pub show_raw: bool,
}

/// Output format for briefings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            forecast_window_hours: DEFAULT_FORECAST_WINDOW_HOURS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_raw: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file at `config_path`, or the default path (if it exists)
    /// 3. Environment variables (prefixed with `PREFLIGHT_`, sections split on `__`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("PREFLIGHT_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let hours = self.briefing.forecast_window_hours;
        if hours == 0 || hours > MAX_FORECAST_WINDOW_HOURS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "forecast_window_hours must be between 1 and {MAX_FORECAST_WINDOW_HOURS}, got {hours}"
                ),
            });
        }

        Ok(())
    }
}
