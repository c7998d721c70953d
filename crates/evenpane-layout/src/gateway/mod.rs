use evenpane_common::{GatewayError, Orientation};
use serde::{Deserialize, Serialize};

use crate::rebalance::Resize;

pub mod recording;
pub mod tmux;

pub use recording::RecordingGateway;
pub use tmux::TmuxGateway;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// A mutation sent to the multiplexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    Split { orientation: Orientation },
    Resize(Resize),
    Close,
}

/// Reads and mutates the multiplexer's window state.
///
/// Every call blocks until the underlying command returns. Failures are
/// reported as [`GatewayError`] and stop the calling operation.
pub trait CommandGateway {
    /// Raw `#{window_layout}` text of the current window.
    fn query_layout(&mut self) -> Result<String>;
    /// tmux pane number of the active pane (`N` in `%N`).
    fn query_active_pane(&mut self) -> Result<u32>;
    /// Split the active pane; the new pane starts in the caller's directory.
    fn split(&mut self, orientation: Orientation) -> Result<()>;
    /// Close the active pane.
    fn close(&mut self) -> Result<()>;
    fn resize(&mut self, resize: &Resize) -> Result<()>;

    /// Whether queries issued after a mutation see its effect.
    fn observes_mutations(&self) -> bool {
        true
    }
}
