//! Configuration types. Every field has a default so partial files work.

use serde::{Deserialize, Serialize};

/// Default tracing directive when neither the CLI nor the file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "evenpane=warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvenpaneConfig {
    pub tmux: TmuxConfig,
    pub logging: LoggingConfig,
}

/// How the tmux client is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Executable name or path.
    pub binary: String,
    /// Server socket name passed as `-L`; empty means tmux's default.
    pub socket_name: String,
}

impl Default for TmuxConfig {
    fn default() -> Self {
        Self {
            binary: "tmux".into(),
            socket_name: String::new(),
        }
    }
}

impl TmuxConfig {
    pub fn socket_name(&self) -> Option<&str> {
        let name = self.socket_name.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `evenpane=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}
