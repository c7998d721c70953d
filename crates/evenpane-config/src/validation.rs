//! Config validation. Collects every problem into one `ConfigError`.

use crate::schema::EvenpaneConfig;
use evenpane_common::ConfigError;

pub fn validate(config: &EvenpaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.tmux.binary.trim().is_empty() {
        errors.push("tmux.binary must not be empty".into());
    }
    if config.tmux.socket_name.contains(char::is_whitespace) {
        errors.push(format!(
            "tmux.socket_name must not contain whitespace, got {:?}",
            config.tmux.socket_name
        ));
    }
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}
