//! evenpane configuration.
//!
//! An optional TOML file selects the tmux executable and socket and the
//! default log filter. Every field has a default, so the file may be
//! partial or absent.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config_path, load_default, load_from_path};
pub use schema::{EvenpaneConfig, LoggingConfig, TmuxConfig, DEFAULT_LOG_LEVEL};

use evenpane_common::ConfigError;
use std::path::Path;

/// Load `path` if given, otherwise the platform default.
///
/// An explicitly named file must exist and be valid.
pub fn load_config(path: Option<&Path>) -> Result<EvenpaneConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/tmp/evenpane_missing_explicit.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[logging]\nlevel = \"evenpane=debug\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, "evenpane=debug");
    }

    #[test]
    fn socket_name_blank_means_default() {
        let config = EvenpaneConfig::default();
        assert_eq!(config.tmux.socket_name(), None);
    }
}
