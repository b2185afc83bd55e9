//! Configuration management for the barograph application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::BarographError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the barograph application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BarographConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Location pinning and fallback settings
    #[serde(default)]
    pub location: LocationConfig,
    /// Presentation output settings
    #[serde(default)]
    pub panel: PanelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// IANA timezone label sent to the API and used for the window start hour
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Location configuration settings
///
/// A pinned coordinate stands in for a host GPS fix; when neither field is
/// set the resolver substitutes the fixed fallback coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationConfig {
    /// Pinned latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Pinned longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Presentation output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Path the rendered chart image is written to
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_timezone() -> String {
    "Asia/Tokyo".to_string()
}

fn default_chart_path() -> String {
    "pressure_forecast.png".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
            timezone: default_timezone(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            chart_path: default_chart_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl BarographConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with BAROGRAPH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("BAROGRAPH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: BarographConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("barograph").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(BarographError::config(
                "Weather API timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if let Some(lat) = self.location.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(BarographError::config(
                    "Pinned latitude must be between -90 and 90 degrees",
                )
                .into());
            }
        }

        if let Some(lon) = self.location.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(BarographError::config(
                    "Pinned longitude must be between -180 and 180 degrees",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BarographError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(BarographError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.weather.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(BarographError::config(format!(
                "Invalid timezone label '{}'. Must be an IANA timezone such as Asia/Tokyo",
                self.weather.timezone
            ))
            .into());
        }

        if self.panel.chart_path.is_empty() {
            return Err(BarographError::config("Chart output path cannot be empty").into());
        }

        Ok(())
    }

    /// The configured timezone, parsed.
    ///
    /// Only valid after `validate()` has passed; falls back to the default
    /// label if the field was mutated into something unparsable afterwards.
    #[must_use]
    pub fn timezone(&self) -> chrono_tz::Tz {
        self.weather
            .timezone
            .parse()
            .unwrap_or(chrono_tz::Asia::Tokyo)
    }
}
