//! Core types for the layout tree: an arena of container and leaf nodes.

use evenpane_common::{Dimensions, Offset, Orientation, PaneId};

/// Index of a node inside its [`LayoutTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub id: PaneId,
    /// Pane number as written in the descriptor; tmux addresses the pane as `%token`.
    pub token: u32,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(Pane),
    Container {
        orientation: Orientation,
        children: Vec<NodeId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub dimensions: Dimensions,
    pub offset: Offset,
    /// Enclosing container; `None` for a root.
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl LayoutNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn pane(&self) -> Option<&Pane> {
        match &self.kind {
            NodeKind::Leaf(pane) => Some(pane),
            NodeKind::Container { .. } => None,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Container { orientation, .. } => Some(*orientation),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Container { children, .. } => children,
        }
    }
}

/// A parsed window layout. Nodes own nothing; the arena owns every node and
/// `parent` links are plain indices back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    roots: Vec<NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: LayoutNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn set_children(&mut self, id: NodeId, new_children: Vec<NodeId>) {
        if let NodeKind::Container { children, .. } = &mut self.nodes[id.0].kind {
            *children = new_children;
        }
    }

    pub(crate) fn set_roots(&mut self, roots: Vec<NodeId>) {
        self.roots = roots;
    }

    /// Borrow a node. Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }

    /// Top-level nodes in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
