//! Configuration management for the Meteovuelo application
//!
//! Handles loading configuration from an optional TOML file and
//! environment variables, and validates all settings.

use crate::MeteovueloError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Meteovuelo application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeteovueloConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Weather provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_bind")]
    pub bind: String,
    /// Listen port
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the locality search endpoint
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// Base URL of the forecast endpoint
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,
    /// Provider language code
    #[serde(default = "default_provider_lang")]
    pub lang: String,
    /// Fixed affiliate credential sent with forecast requests
    #[serde(default = "default_affiliate_id")]
    pub affiliate_id: String,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_server_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8050
}

fn default_search_base_url() -> String {
    "https://www.meteored.com.ar/peticionBuscador.php".to_string()
}

fn default_forecast_base_url() -> String {
    "http://api.meteored.com.ar/index.php".to_string()
}

fn default_provider_lang() -> String {
    "ar".to_string()
}

fn default_affiliate_id() -> String {
    "sb6pndn36a5p".to_string()
}

fn default_provider_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_server_bind(),
            port: default_server_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            forecast_base_url: default_forecast_base_url(),
            lang: default_provider_lang(),
            affiliate_id: default_affiliate_id(),
            timeout_seconds: default_provider_timeout(),
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

impl MeteovueloConfig {
    /// Load configuration from `config.toml` (if present) and environment
    /// variables with the `METEOVUELO_` prefix
    pub fn load() -> Result<Self> {
        Self::load_from_path(PathBuf::from("config.toml"))
    }

    /// Load configuration from the given file path
    pub fn load_from_path(config_file: PathBuf) -> Result<Self> {
        let mut builder = Config::builder();

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("METEOVUELO")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: MeteovueloConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(MeteovueloError::config("Server port cannot be 0").into());
        }

        for url in [
            &self.provider.search_base_url,
            &self.provider.forecast_base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(MeteovueloError::config(format!(
                    "Provider base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 300 {
            return Err(MeteovueloError::config(
                "Provider timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(MeteovueloError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MeteovueloConfig::default();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 8050);
        assert_eq!(
            config.provider.search_base_url,
            "https://www.meteored.com.ar/peticionBuscador.php"
        );
        assert_eq!(config.provider.lang, "ar");
        assert_eq!(config.provider.affiliate_id, "sb6pndn36a5p");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_port() {
        let mut config = MeteovueloConfig::default();
        config.server.port = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("port"));
    }

    #[test]
    fn test_config_validation_invalid_url() {
        let mut config = MeteovueloConfig::default();
        config.provider.forecast_base_url = "ftp://example.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("base URL"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = MeteovueloConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid log level")
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config =
            MeteovueloConfig::load_from_path(PathBuf::from("does_not_exist.toml")).unwrap();
        assert_eq!(config.server.port, 8050);
    }
}
