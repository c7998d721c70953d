//! Depth-first traversal and pane lookup.

use evenpane_common::PaneId;

use super::{LayoutTree, NodeId, NodeKind};

impl LayoutTree {
    /// Leaf nodes in left-to-right (depth-first) order across every root.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &root in self.roots() {
            self.collect_leaves(root, &mut out);
        }
        out
    }

    fn collect_leaves(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match &self.node(id).kind {
            NodeKind::Leaf(_) => out.push(id),
            NodeKind::Container { children, .. } => {
                for &child in children {
                    self.collect_leaves(child, out);
                }
            }
        }
    }

    /// Collect all pane IDs in document order.
    pub fn collect_pane_ids(&self) -> Vec<PaneId> {
        self.leaves()
            .into_iter()
            .filter_map(|id| self.node(id).pane().map(|p| p.id))
            .collect()
    }

    pub fn pane_count(&self) -> usize {
        self.leaves().len()
    }

    pub fn contains_pane(&self, pane: PaneId) -> bool {
        self.find_leaf(pane).is_some()
    }

    /// The leaf node holding `pane`.
    pub fn find_leaf(&self, pane: PaneId) -> Option<NodeId> {
        self.roots()
            .iter()
            .find_map(|&root| self.find_leaf_from(root, pane))
    }

    fn find_leaf_from(&self, id: NodeId, pane: PaneId) -> Option<NodeId> {
        match &self.node(id).kind {
            NodeKind::Leaf(p) if p.id == pane => Some(id),
            NodeKind::Leaf(_) => None,
            NodeKind::Container { children, .. } => children
                .iter()
                .find_map(|&child| self.find_leaf_from(child, pane)),
        }
    }

    /// Parse-order id of the pane tmux knows as `%token`.
    pub fn find_pane_by_token(&self, token: u32) -> Option<PaneId> {
        self.leaves()
            .into_iter()
            .filter_map(|id| self.node(id).pane())
            .find(|pane| pane.token == token)
            .map(|pane| pane.id)
    }

    /// The container whose children must be rebalanced around `pane`.
    ///
    /// Returns `None` when the pane is absent or is itself a root, as in a
    /// window holding a single pane. Callers treat that as nothing to do.
    pub fn find_owning_container(&self, pane: PaneId) -> Option<NodeId> {
        let leaf = self.find_leaf(pane)?;
        self.node(leaf).parent
    }
}
