//! Application configuration, embedded at build time from `modgen.toml`.

use std::str::FromStr;

use routing::RouterConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Router(#[from] routing::ConfigError),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub router: RouterConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<Level, AppConfigError> {
        Level::from_str(&self.level).map_err(|_| AppConfigError::LogLevel(self.level.clone()))
    }
}

impl AppConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.router.validate()?;
        config.log.level()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routing::HistoryMode;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::from_toml_str(include_str!("../modgen.toml")).unwrap();
        assert_eq!(config.router.history, HistoryMode::Path);
        assert_eq!(config.log.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_empty_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.router.base, "/");
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [router]
            history = "fragment"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.router.history, HistoryMode::Fragment);
        assert_eq!(config.router.base, "/");
        assert_eq!(config.log.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_toml_str("[log]\nlevel = \"loud\""),
            Err(AppConfigError::LogLevel(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[router]\nbase = \"app\""),
            Err(AppConfigError::Router(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[router]\nhistory = 3"),
            Err(AppConfigError::Parse(_))
        ));
    }
}
