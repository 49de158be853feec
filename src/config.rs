//! Configuration loading
//!
//! Reads `~/.config/ghostpad/config.toml` if present. Every field is optional;
//! a missing or unreadable file yields the defaults so the editor always starts.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::PadError;

mod types;

pub use types::{CompletionConfig, Config};

const CONFIG_DIR: &str = "ghostpad";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Config {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Config::default(),
    };

    let mut contents = String::new();
    if file.read_to_string(&mut contents).is_err() {
        return Config::default();
    }

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed config: {}", e);
            Config::default()
        }
    }
}

/// Load an explicitly requested config file, failing loudly on problems
///
/// Used for `--config <path>`: a user who names a file wants to know when it
/// is missing or malformed rather than silently getting defaults.
pub fn require_config_from_path(path: &Path) -> Result<Config, PadError> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    toml::from_str::<Config>(&contents).map_err(|e| PadError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
#[path = "config/loader_tests.rs"]
mod loader_tests;
