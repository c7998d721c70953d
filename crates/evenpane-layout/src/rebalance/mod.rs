//! Even redistribution of pane sizes after a split or before a close.

mod apply;
mod plan;

use evenpane_common::{Dimensions, PaneId};
use serde::{Deserialize, Serialize};

pub use plan::{rebalance_after_split, rebalance_before_close};

/// One pane-level resize instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resize {
    pub pane: PaneId,
    pub token: u32,
    #[serde(flatten)]
    pub dimensions: Dimensions,
}
