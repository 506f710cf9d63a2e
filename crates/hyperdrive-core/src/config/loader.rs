//! Figment-based configuration loader
//!
//! Merges configuration from defaults, an optional TOML file and
//! environment variables, later sources overriding earlier ones.

use crate::config::HyperDriveConfig;
use crate::constants::CONFIG_ENV_PREFIX;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use hyperdrive_domain::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `HyperDriveConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the prefix
    ///    (e.g. `HYPERDRIVE_SELECTION_DEFAULT_STRATEGY`)
    pub fn load(&self) -> Result<HyperDriveConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(HyperDriveConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        }

        // Uses underscore as separator for nested keys
        // (e.g. HYPERDRIVE_SELECTION_RANKING_TIMEOUT_MS)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        let config: HyperDriveConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to assemble configuration", e)
        })?;

        config.selection.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
