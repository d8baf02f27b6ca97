use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};
use crate::manifest::DEFAULT_MANIFEST_PATH;

/// File name searched for in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "pubrelease.toml";

/// Represents the complete configuration for pubspec-release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

/// Where the manifest lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

/// Release policy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    /// Refuse to write a version that is not strictly greater than the current one
    #[serde(default)]
    pub require_increase: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pubrelease.toml` in current directory
/// 3. `pubrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or an explicit path is missing
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| ReleaseError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration text
pub fn parse_config(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
