//! Config path resolution.

use evenpane_common::ConfigError;
use std::path::PathBuf;

/// Platform config path: `~/.config/evenpane/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("evenpane").join("config.toml"))
}
