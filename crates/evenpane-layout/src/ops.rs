//! End-to-end split and close sequences against a [`CommandGateway`].

use evenpane_common::{Orientation, PaneId, Result};
use tracing::{debug, info, warn};

use crate::commands::Operation;
use crate::descriptor::parse_window_layout;
use crate::gateway::CommandGateway;
use crate::rebalance::{rebalance_after_split, rebalance_before_close, Resize};
use crate::tree::{LayoutTree, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceOutcome {
    /// `resized` pane-level resizes were issued.
    Rebalanced { resized: usize },
    /// No resizes were issued: the active pane has no enclosing container,
    /// or the gateway cannot show the layout a recorded split would produce.
    Unchanged,
}

pub fn execute(operation: Operation, gateway: &mut dyn CommandGateway) -> Result<RebalanceOutcome> {
    match operation {
        Operation::Close => close_and_rebalance(gateway),
        Operation::Split(orientation) => split_and_rebalance(gateway, orientation),
    }
}

/// Split the active pane, then even out the container it landed in.
///
/// Resizes are issued only after the split so tmux already knows the new pane.
/// When the gateway only records the split, the layout it reports lacks the
/// new pane and no resizes are planned.
pub fn split_and_rebalance(
    gateway: &mut dyn CommandGateway,
    orientation: Orientation,
) -> Result<RebalanceOutcome> {
    gateway.split(orientation)?;
    if !gateway.observes_mutations() {
        warn!(?orientation, "split not performed, rebalancing depends on the new pane");
        return Ok(RebalanceOutcome::Unchanged);
    }
    let (tree, active) = snapshot(gateway)?;

    let Some(container) = active.and_then(|pane| tree.find_owning_container(pane)) else {
        warn!("active pane has no container, nothing to rebalance");
        return Ok(RebalanceOutcome::Unchanged);
    };
    if tree.node(container).orientation() != Some(orientation) {
        debug!(?orientation, "container orientation differs from split axis");
    }

    let plan = rebalance_after_split(&tree, container, orientation)?;
    issue(gateway, &plan)?;
    Ok(RebalanceOutcome::Rebalanced {
        resized: plan.len(),
    })
}

/// Shrink the active pane out of the way, grow its siblings, then close it.
///
/// A failed resize aborts before the close is sent.
pub fn close_and_rebalance(gateway: &mut dyn CommandGateway) -> Result<RebalanceOutcome> {
    let (tree, active) = snapshot(gateway)?;

    let owner = active.and_then(|pane| tree.find_owning_container(pane).map(|c| (pane, c)));
    let plan = match owner {
        Some((pane, container)) => match &tree.node(container).kind {
            NodeKind::Container { orientation, .. } => {
                rebalance_before_close(&tree, container, *orientation, pane)?
            }
            NodeKind::Leaf(_) => Vec::new(),
        },
        None => {
            info!("closing pane without rebalancing");
            Vec::new()
        }
    };

    issue(gateway, &plan)?;
    gateway.close()?;

    if plan.is_empty() {
        Ok(RebalanceOutcome::Unchanged)
    } else {
        Ok(RebalanceOutcome::Rebalanced {
            resized: plan.len(),
        })
    }
}

/// Current layout plus the parse-order id of the active pane, if the layout
/// holds it.
fn snapshot(gateway: &mut dyn CommandGateway) -> Result<(LayoutTree, Option<PaneId>)> {
    let raw = gateway.query_layout()?;
    let token = gateway.query_active_pane()?;
    let tree = parse_window_layout(&raw)?;
    let active = tree.find_pane_by_token(token);
    debug!(%raw, token, panes = tree.pane_count(), "captured window layout");
    if active.is_none() {
        warn!(token, "active pane %{token} missing from layout; layout may be stale");
    }
    Ok((tree, active))
}

fn issue(gateway: &mut dyn CommandGateway, plan: &[Resize]) -> Result<()> {
    for resize in plan {
        gateway.resize(resize)?;
    }
    Ok(())
}
