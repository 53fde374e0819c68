//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CarnetError, Result};

use super::settings::{CliOverrides, ConfigFile, Settings};

/// User config at `~/.carnet/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".carnet").join("config.yml"))
}

/// Parse YAML content into a [`ConfigFile`].
///
/// An empty file is a valid, empty configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| CarnetError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load the configuration file, if any.
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(ConfigFile::default()),
    }
}

/// Load the file, apply the process environment, then the flags.
pub fn load_settings(explicit: Option<&Path>, cli: CliOverrides) -> Result<Settings> {
    let file = load_config(explicit)?.with_env(|key| std::env::var(key).ok())?;
    Settings::resolve(file, cli)
}
