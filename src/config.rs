//! Configuration file loading.
//!
//! The file is TOML with the same keys as [`Config`]:
//!
//! ```toml
//! first_week_day = 6
//! default_datetime_format = "%Y/%m/%d (%a)\t%H:%M:%S"
//! specified_datetime_format = "%Y/%m"
//! locale = "en_US"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};

use crate::error::ConfigError;
use crate::types::Config;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Config file location: $ALC_CONFIG, then `<config dir>/alc/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("ALC_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "alc")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Parse configuration from TOML text. Unknown keys are ignored.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a configuration file.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}

/// Load the configuration, falling back to defaults on any problem.
///
/// A missing file at the default location is silent; a missing explicit
/// file or a broken file logs a warning.
pub fn load_or_default(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) if path.exists() => path,
            Ok(_) => return Config::default(),
            Err(e) => {
                warn!("{}", e);
                return Config::default();
            }
        },
    };

    match load_file(&path) {
        Ok(config) => {
            info!("loaded config from '{}'", path.display());
            config
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Config::default()
        }
    }
}
