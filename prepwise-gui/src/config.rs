use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::dir::PrepwiseDirectory;

pub const DEFAULT_FILE_NAME: &str = "prepwise.toml";
pub const DEFAULT_IDENTITY_API_URL: &str = "https://api.prepwise.app/api/v1";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the identity service.
    pub identity_api_url: Option<String>,
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
}

impl Config {
    pub fn path(directory: &PrepwiseDirectory) -> PathBuf {
        directory.path().join(DEFAULT_FILE_NAME)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|content| {
                toml::from_str::<Config>(&content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;
        Ok(config)
    }

    pub fn identity_api_url(&self) -> String {
        self.identity_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_IDENTITY_API_URL.to_string())
    }

    pub fn log_level(&self) -> Option<LevelFilter> {
        self.log_level
            .as_ref()
            .and_then(|level| match LevelFilter::from_str(level) {
                Ok(level) => Some(level),
                Err(e) => {
                    tracing::warn!("Invalid log_level in configuration file: {}", e);
                    None
                }
            })
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.identity_api_url(), DEFAULT_IDENTITY_API_URL);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            identity_api_url = "https://staging.prepwise.app/api/v1"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.identity_api_url(),
            "https://staging.prepwise.app/api/v1"
        );
        assert_eq!(config.log_level(), Some(LevelFilter::DEBUG));
    }
}
