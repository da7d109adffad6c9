//! Config file loading and environment credential overlay.

use crate::error::ConfigError;
use crate::model::MindfulConfig;
use directories::BaseDirs;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Environment variable consulted for the completion credential.
pub const API_KEY_ENV: &str = "MINDFUL_API_KEY";

/// Default config filename under the home config dir.
const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Default config directory under the home dir.
const DEFAULT_CONFIG_DIR: &str = ".mindful";

impl MindfulConfig {
    /// Load config from a JSON5 file and overlay the environment credential.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: MindfulConfig = json5::from_str(&raw)?;
        info!("loaded config (path={})", path.as_ref().display());
        config.apply_env_credential();
        Ok(config)
    }

    /// Load the conventional config location, or defaults when absent.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = default_config_path()
            && path.exists()
        {
            return Self::load(path);
        }
        debug!("no config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_credential();
        Ok(config)
    }

    /// Fill in the credential from the environment when not already set.
    fn apply_env_credential(&mut self) {
        if self.completion.api_key.is_none()
            && let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            debug!("using completion credential from environment");
            self.completion.api_key = Some(key);
        }
    }
}

/// Conventional config path under the home directory.
fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}
