//! Router configuration.
//!
//! ```toml
//! history = "path"   # or "fragment"
//! base = "/"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::history::HistoryMode;

/// Settings for a `Router`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub history: HistoryMode,
    /// Path prefix the application is served under
    pub base: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryMode::Path,
            base: "/".to_string(),
        }
    }
}

impl RouterConfig {
    /// Parse a bare `RouterConfig` table and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Path prefix for browser history, `None` when served from the root
    pub fn prefix(&self) -> Option<&str> {
        let prefix = self.base.trim_end_matches('/');
        (!prefix.is_empty()).then_some(prefix)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base.starts_with('/') {
            return Err(ConfigError::InvalidBase(self.base.clone()));
        }
        Ok(())
    }
}
