//! Global configuration for duograph (stored in ~/.config/duograph/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DuographError, Result};
use crate::format::OutputFormat;
use crate::graph::Weight;

const CONFIG_DIR: &str = "duograph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DUOGRAPH_CONFIG_DIR";

/// Weight given to directed edges specified without one
pub const DEFAULT_EDGE_WEIGHT: Weight = 1;

fn default_weight() -> Weight {
    DEFAULT_EDGE_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Log filter used when neither `--log-level` nor `DUOGRAPH_LOG` is set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Weight for directed edges written as `SRC:DST`
    #[serde(default = "default_weight")]
    pub default_weight: Weight,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            format: None,
            log_level: None,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    DuographError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: GlobalConfig = toml::from_str(&content)?;

        if config.default_weight < 1 {
            return Err(DuographError::InvalidConfig {
                path: path.display().to_string(),
                reason: "default_weight must be at least 1".to_string(),
            });
        }

        Ok(config)
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/duograph/config.toml".to_string()
        }
    }
}
