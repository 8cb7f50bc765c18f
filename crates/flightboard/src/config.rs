//! Configuration management for flightboard.
//!
//! Configuration is loaded with figment from TOML config files,
//! environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flightboard";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTBOARD_`)
/// 2. TOML config file at `~/.config/flightboard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data source configuration.
    pub sources: SourcesConfig,
    /// Board configuration.
    pub board: BoardConfig,
}

/// Data source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// URL of the flight data endpoint.
    pub flight_url: String,
    /// URL of the airport directory endpoint.
    pub directory_url: String,
    /// Response language requested from the flight data source.
    pub lang: String,
    /// Whether to include cargo flights in queries.
    pub include_cargo: bool,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// How many upcoming flights a board view shows.
    pub limit: usize,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            flight_url: "http://localhost:3000/flight.php".to_string(),
            directory_url: "http://localhost:3000/iata.json".to_string(),
            lang: "en".to_string(),
            include_cargo: false,
            request_timeout_secs: 30,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("FLIGHTBOARD_").split("__"));

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
        if self.sources.flight_url.is_empty() {
            return Err(Error::config_validation("sources.flight_url must be set"));
        }

        if self.sources.directory_url.is_empty() {
            return Err(Error::config_validation(
                "sources.directory_url must be set",
            ));
        }

        if self.sources.lang.is_empty() {
            return Err(Error::config_validation("sources.lang must be set"));
        }

        if self.sources.request_timeout_secs == 0 {
            return Err(Error::config_validation(
                "sources.request_timeout_secs must be greater than 0",
            ));
        }

        if self.board.limit == 0 {
            return Err(Error::config_validation(
                "board.limit must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Get the per-request timeout as a Duration.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.sources.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.board.limit, 10);
        assert_eq!(config.sources.lang, "en");
        assert!(!config.sources.include_cargo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.board.limit = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("board.limit"));
    }

    #[test]
    fn test_validate_rejects_empty_flight_url() {
        let mut config = Config::default();
        config.sources.flight_url.clear();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("flight_url"));
    }

    #[test]
    fn test_validate_rejects_empty_directory_url() {
        let mut config = Config::default();
        config.sources.directory_url.clear();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("directory_url"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.sources.request_timeout_secs = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn test_request_timeout_duration() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_config_path_ends_with_file_name() {
        let path = Config::default_config_path();
        assert!(path.ends_with("flightboard/config.toml"));
    }
}
