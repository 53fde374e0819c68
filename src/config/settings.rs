//! Configuration values and how the layers combine.

use std::path::PathBuf;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CarnetError, Result};
use crate::persistence::{SaveTiming, DEFAULT_ACK_DURATION, DEFAULT_SAVE_DELAY};

/// Overrides the directory holding the saved logbook.
pub const ENV_DATA_DIR: &str = "CARNET_DATA_DIR";
/// Overrides where exports are written.
pub const ENV_EXPORT_DIR: &str = "CARNET_EXPORT_DIR";
/// Overrides the autosave delay, in milliseconds.
pub const ENV_SAVE_DELAY_MS: &str = "CARNET_SAVE_DELAY_MS";

/// Longest accepted autosave delay.
const MAX_SAVE_DELAY_MS: u64 = 60_000;

/// Contents of `config.yml`. Every key is optional.
///
/// # Example
///
/// ```yaml
/// data_dir: ~/Documents/eps
/// export_dir: ~/Bureau
/// save_delay_ms: 800
/// ack_duration_ms: 1500
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Directory holding `carnetEPS.json`.
    pub data_dir: Option<PathBuf>,

    /// Directory receiving exported files.
    pub export_dir: Option<PathBuf>,

    /// Quiet period before an edit is written, in milliseconds.
    pub save_delay_ms: Option<u64>,

    /// How long "Sauvegardé" stays visible, in milliseconds.
    pub ack_duration_ms: Option<u64>,
}

impl ConfigFile {
    /// Apply environment overrides on top of the file values.
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|v| !v.is_empty()) {
            self.export_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = lookup(ENV_SAVE_DELAY_MS).filter(|v| !v.is_empty()) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| CarnetError::ConfigValidationError {
                    message: format!(
                        "{} must be a number of milliseconds, got '{}'",
                        ENV_SAVE_DELAY_MS, raw
                    ),
                })?;
            self.save_delay_ms = Some(ms);
        }
        Ok(self)
    }
}

/// Values given on the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub data_dir: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub timing: SaveTiming,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_dir: PathBuf::from("."),
            timing: SaveTiming::default(),
        }
    }
}

impl Settings {
    /// Combine the layers: defaults, then file and environment, then flags.
    pub fn resolve(file: ConfigFile, cli: CliOverrides) -> Result<Self> {
        let defaults = Settings::default();

        let delay_ms = file
            .save_delay_ms
            .unwrap_or(DEFAULT_SAVE_DELAY.as_millis() as u64);
        if delay_ms > MAX_SAVE_DELAY_MS {
            return Err(CarnetError::ConfigValidationError {
                message: format!(
                    "save_delay_ms must be at most {}, got {}",
                    MAX_SAVE_DELAY_MS, delay_ms
                ),
            });
        }
        let ack_ms = file
            .ack_duration_ms
            .unwrap_or(DEFAULT_ACK_DURATION.as_millis() as u64);

        Ok(Self {
            data_dir: cli
                .data_dir
                .or(file.data_dir)
                .map(|p| expand_home(&p))
                .unwrap_or(defaults.data_dir),
            export_dir: cli
                .export_dir
                .or(file.export_dir)
                .map(|p| expand_home(&p))
                .unwrap_or(defaults.export_dir),
            timing: SaveTiming {
                delay: Duration::from_millis(delay_ms),
                ack_duration: Duration::from_millis(ack_ms),
            },
        })
    }
}

/// Platform data directory for carnet, e.g. `~/.local/share/carnet`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carnet")
}

/// Replace a leading `~` with the home directory.
fn expand_home(path: &std::path::Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
