use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::ALL_CATEGORIES;

pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("slide_interval_ms must be greater than zero")]
    ZeroInterval,
}

/// Site-level settings, read from `site.yaml`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Period of the shared slideshow timer
    pub slide_interval_ms: u64,
    /// Category selected when the work gallery mounts
    pub initial_category: String,
    /// Category selected when the projects grid mounts
    pub initial_project_category: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            initial_category: ALL_CATEGORIES.to_string(),
            initial_project_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        if config.slide_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(config)
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }
}
