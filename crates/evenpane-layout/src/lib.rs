pub mod commands;
pub mod descriptor;
pub mod distribute;
pub mod gateway;
pub mod ops;
pub mod rebalance;
pub mod tree;

pub use commands::Operation;
pub use descriptor::{parse, parse_window_layout};
pub use distribute::distribute;
pub use gateway::{CommandGateway, Instruction, RecordingGateway, TmuxGateway};
pub use ops::{close_and_rebalance, execute, split_and_rebalance, RebalanceOutcome};
pub use rebalance::{rebalance_after_split, rebalance_before_close, Resize};
pub use tree::{LayoutNode, LayoutTree, NodeId, NodeKind, Pane};
