//! Recursive propagation of a new bounding box down the tree.

use evenpane_common::{Dimensions, LayoutError};

use super::Resize;
use crate::distribute::distribute;
use crate::tree::{LayoutTree, NodeId, NodeKind};

impl LayoutTree {
    /// Give `node` the box `size` and push one [`Resize`] per leaf beneath it.
    ///
    /// A container splits its own axis evenly across its children and hands
    /// the cross axis through unchanged; existing proportions are dropped.
    pub fn apply_size(
        &self,
        node: NodeId,
        size: Dimensions,
        out: &mut Vec<Resize>,
    ) -> Result<(), LayoutError> {
        match &self.node(node).kind {
            NodeKind::Leaf(pane) => {
                out.push(Resize {
                    pane: pane.id,
                    token: pane.token,
                    dimensions: size,
                });
            }
            NodeKind::Container {
                orientation,
                children,
            } => {
                let sizes = distribute(children.len(), size.along(*orientation))?;
                for (&child, along) in children.iter().zip(sizes) {
                    self.apply_size(child, size.with_along(*orientation, along), out)?;
                }
            }
        }
        Ok(())
    }
}
