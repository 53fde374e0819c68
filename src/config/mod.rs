//! Configuration.
//!
//! Values come from, lowest priority first:
//! 1. Built-in defaults
//! 2. User config (`~/.carnet/config.yml`, or the file given with `--config`)
//! 3. Environment (`CARNET_DATA_DIR`, `CARNET_EXPORT_DIR`, `CARNET_SAVE_DELAY_MS`)
//! 4. Command-line flags

pub mod loader;
pub mod settings;

pub use loader::{default_config_path, load_config, load_config_file, load_settings, parse_config};
pub use settings::{
    default_data_dir, CliOverrides, ConfigFile, Settings, ENV_DATA_DIR, ENV_EXPORT_DIR,
    ENV_SAVE_DELAY_MS,
};
