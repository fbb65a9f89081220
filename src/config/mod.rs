//! Locating and loading the environment list.
//!
//! The config always lives at `<home>/.fastcli`. [`default_path`] resolves
//! that path and [`load_from`] reads it, distinguishing a missing file, an
//! unreadable one, and one that does not parse.

pub mod model;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FastcliError;
use model::Config;

pub const CONFIG_FILE: &str = ".fastcli";

/// `<home>/.fastcli` for the current user.
pub fn default_path() -> Result<PathBuf, FastcliError> {
    config_path_in(std::env::home_dir())
}

/// `<home>/.fastcli`, or `HomeUnavailable` for a missing or empty home.
pub fn config_path_in(home: Option<PathBuf>) -> Result<PathBuf, FastcliError> {
    home.filter(|home| !home.as_os_str().is_empty())
        .map(|home| home.join(CONFIG_FILE))
        .ok_or(FastcliError::HomeUnavailable)
}

pub fn load_from(path: &Path) -> Result<Config, FastcliError> {
    let missing = || FastcliError::ConfigMissing {
        path: path.to_path_buf(),
    };

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Err(missing()),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(missing()),
        Err(e) => return Err(FastcliError::Io(e)),
    }

    let content = std::fs::read(path)?;
    let config: Config =
        serde_json::from_slice(&content).map_err(|source| FastcliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        environments = config.len(),
        "loaded config"
    );
    Ok(config)
}
