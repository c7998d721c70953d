//! Resize plans for the two structural changes: a split and a close.

use evenpane_common::{LayoutError, Orientation, PaneId};
use tracing::debug;

use super::Resize;
use crate::distribute::distribute;
use crate::tree::{LayoutTree, NodeId, NodeKind};

/// Even out `container`'s children along `axis` after a new pane joined it.
///
/// A leaf `container` yields an empty plan: the split happened at the
/// window root and tmux's own geometry stands.
pub fn rebalance_after_split(
    tree: &LayoutTree,
    container: NodeId,
    axis: Orientation,
) -> Result<Vec<Resize>, LayoutError> {
    let node = tree.node(container);
    let NodeKind::Container { children, .. } = &node.kind else {
        return Ok(Vec::new());
    };

    let sizes = distribute(children.len(), node.dimensions.along(axis))?;
    debug!(?axis, ?sizes, "rebalancing after split");

    let mut plan = Vec::new();
    for (&child, along) in children.iter().zip(sizes) {
        let size = tree.node(child).dimensions.with_along(axis, along);
        tree.apply_size(child, size, &mut plan)?;
    }
    Ok(plan)
}

/// Plan the resizes that precede closing `closing`, a direct child of `container`.
///
/// The closing pane is first collapsed to zero along `axis`, then the
/// survivors share the container's full size evenly. With no survivors the
/// plan is empty and the close goes ahead on its own.
pub fn rebalance_before_close(
    tree: &LayoutTree,
    container: NodeId,
    axis: Orientation,
    closing: PaneId,
) -> Result<Vec<Resize>, LayoutError> {
    let node = tree.node(container);
    let NodeKind::Container { children, .. } = &node.kind else {
        return Ok(Vec::new());
    };

    let is_closing = |id: NodeId| tree.node(id).pane().is_some_and(|p| p.id == closing);
    if !children.iter().any(|&c| is_closing(c)) {
        return Err(LayoutError::PaneNotInContainer { pane: closing.0 });
    }

    let survivors = children.len() - 1;
    if survivors == 0 {
        return Ok(Vec::new());
    }

    let mut sizes = distribute(survivors, node.dimensions.along(axis))?.into_iter();
    debug!(?axis, survivors, "rebalancing before close");

    let mut plan = Vec::new();
    for &child in children {
        let child_node = tree.node(child);
        if is_closing(child) {
            if let Some(pane) = child_node.pane() {
                plan.push(Resize {
                    pane: pane.id,
                    token: pane.token,
                    dimensions: child_node.dimensions.with_along(axis, 0),
                });
            }
            continue;
        }
        let Some(along) = sizes.next() else {
            break;
        };
        tree.apply_size(child, child_node.dimensions.with_along(axis, along), &mut plan)?;
    }
    Ok(plan)
}
