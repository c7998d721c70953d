//! [`CommandGateway`] backed by the `tmux` command-line client.

use std::path::PathBuf;
use std::process::Command;

use evenpane_common::{GatewayError, Orientation};
use tracing::{debug, info};

use super::{CommandGateway, Result};
use crate::rebalance::Resize;

pub struct TmuxGateway {
    binary: String,
    socket_name: Option<String>,
    start_directory: Option<PathBuf>,
}

impl TmuxGateway {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            socket_name: None,
            start_directory: None,
        }
    }

    /// Talk to the server on socket `name` (`tmux -L name`).
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    /// Directory new panes start in (`split-window -c`).
    pub fn with_start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_directory = Some(dir.into());
        self
    }

    /// Full argument vector, socket selection included.
    fn command_args<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(name) = &self.socket_name {
            full.push("-L");
            full.push(name.as_str());
        }
        full.extend_from_slice(args);
        full
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let args = self.command_args(args);
        let command = format!("{} {}", self.binary, args.join(" "));
        debug!(%command, "running tmux");

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|source| GatewayError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GatewayError::Status {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for TmuxGateway {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl CommandGateway for TmuxGateway {
    fn query_layout(&mut self) -> Result<String> {
        let layout = self.run(&["display-message", "-p", "#{window_layout}"])?;
        Ok(layout.trim().to_string())
    }

    fn query_active_pane(&mut self) -> Result<u32> {
        let args = ["display-message", "-p", "#{pane_id}"];
        let output = self.run(&args)?;
        parse_pane_number(&output).ok_or_else(|| GatewayError::UnexpectedOutput {
            command: format!("{} {}", self.binary, args.join(" ")),
            output,
        })
    }

    fn split(&mut self, orientation: Orientation) -> Result<()> {
        let dir = self
            .start_directory
            .as_ref()
            .map(|d| d.to_string_lossy().into_owned());
        let mut args = vec!["split-window", split_flag(orientation)];
        if let Some(dir) = &dir {
            args.push("-c");
            args.push(dir);
        }
        info!(?orientation, "splitting active pane");
        self.run(&args).map(drop)
    }

    fn close(&mut self) -> Result<()> {
        info!("closing active pane");
        self.run(&["kill-pane"]).map(drop)
    }

    fn resize(&mut self, resize: &Resize) -> Result<()> {
        let target = format!("%{}", resize.token);
        let width = resize.dimensions.width.to_string();
        let height = resize.dimensions.height.to_string();
        info!(pane = %resize.pane, %target, %width, %height, "resizing pane");
        self.run(&["resize-pane", "-t", &target, "-x", &width, "-y", &height])
            .map(drop)
    }
}

/// `split-window` flag producing children of `orientation`.
pub fn split_flag(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Row => "-h",
        Orientation::Column => "-v",
    }
}

/// Pane number from a `#{pane_id}` value such as `%7`.
pub fn parse_pane_number(output: &str) -> Option<u32> {
    output.trim().strip_prefix('%')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_number_from_pane_id() {
        assert_eq!(parse_pane_number("%7\n"), Some(7));
        assert_eq!(parse_pane_number("%0"), Some(0));
    }

    #[test]
    fn pane_number_rejects_other_output() {
        assert_eq!(parse_pane_number("7"), None);
        assert_eq!(parse_pane_number("%"), None);
        assert_eq!(parse_pane_number(""), None);
    }

    #[test]
    fn split_flags() {
        assert_eq!(split_flag(Orientation::Row), "-h");
        assert_eq!(split_flag(Orientation::Column), "-v");
    }

    #[test]
    fn socket_name_prefixes_args() {
        let gw = TmuxGateway::new("tmux").with_socket_name("work");
        assert_eq!(
            gw.command_args(&["kill-pane"]),
            vec!["-L", "work", "kill-pane"]
        );
        let gw = TmuxGateway::default();
        assert_eq!(gw.command_args(&["kill-pane"]), vec!["kill-pane"]);
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let mut gw = TmuxGateway::new("/nonexistent/evenpane-test-tmux");
        let err = gw.close().unwrap_err();
        assert!(matches!(err, GatewayError::Spawn { .. }));
    }
}
