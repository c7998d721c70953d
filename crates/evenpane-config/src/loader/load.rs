//! Read, parse and validate a config file.

use crate::schema::EvenpaneConfig;
use crate::validation;
use evenpane_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. The result is validated.
pub fn load_from_path(path: &Path) -> Result<EvenpaneConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: EvenpaneConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;

    validation::validate(&config)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// A missing file yields defaults; nothing is written to disk.
pub fn load_default() -> Result<EvenpaneConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            Ok(EvenpaneConfig::default())
        }
        other => other,
    }
}
