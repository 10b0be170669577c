//! User configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use collegefinder_core::filter::{SortKey, DEFAULT_MAX_FEE};

/// Top-level collegefinder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegefinderConfig {
    /// Directory bookmarks and other saved state are written to.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Alternative catalog TOML to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Sort order when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Annual fee ceiling when `--max-fee` is not given.
    #[serde(default = "default_max_fee")]
    pub default_max_fee: u64,
}

fn default_storage_dir() -> PathBuf {
    dirs_path().unwrap_or_else(|| PathBuf::from(".collegefinder"))
}

fn default_max_fee() -> u64 {
    DEFAULT_MAX_FEE
}

impl Default for CollegefinderConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            catalog: None,
            default_sort: SortKey::default(),
            default_max_fee: default_max_fee(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `collegefinder.toml` in the current directory
/// 2. `~/.config/collegefinder/config.toml`
///
/// Environment variable override: `COLLEGEFINDER_STORAGE_DIR`.
pub fn load_config() -> Result<CollegefinderConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CollegefinderConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("collegefinder.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => CollegefinderConfig::default(),
    };

    if let Ok(dir) = std::env::var("COLLEGEFINDER_STORAGE_DIR") {
        if !dir.is_empty() {
            config.storage_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse a config TOML string.
pub fn parse_config(content: &str) -> Result<CollegefinderConfig> {
    Ok(toml::from_str::<CollegefinderConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("collegefinder"))
}
