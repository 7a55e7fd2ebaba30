//! Workspace configuration.
//!
//! Reads the optional `config.toml` in the workspace directory. Every key
//! is optional; missing values fall back to defaults.
//!
//! ```toml
//! [kdf]
//! memory_kib = 65536
//! iterations = 3
//! parallelism = 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::crypto::KdfParams;
use crate::error::{ConfigError, Result};

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key derivation cost for newly created stores.
    pub kdf: KdfParams,
}

impl Config {
    /// Path to the configuration file inside `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load configuration from `root`, or defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file is not valid TOML.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;
        debug!("loaded config: {:?}", config);
        Ok(config)
    }
}

/// Resolve the workspace directory.
///
/// Uses `$GHOSTPASS_HOME` when set, otherwise `~/.ghostpass`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDirectory` if neither is available.
pub fn workspace_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(constants::WORKSPACE_DIR))
}
