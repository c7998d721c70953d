//! Recursive descent from descriptor text to a [`LayoutTree`].

use evenpane_common::{LayoutError, Orientation, PaneId};
use tracing::debug;

use super::scan::{find_matching, parse_dimensions, parse_offset, parse_pane_token, whitespace_len};
use crate::tree::{LayoutNode, LayoutTree, NodeId, NodeKind, Pane};

/// Parse a descriptor body (no checksum) into a tree.
///
/// Returns the tree together with the next unassigned pane id, which equals
/// the number of leaves. Pane ids are assigned from 0 in document order.
pub fn parse(text: &str) -> Result<(LayoutTree, u32), LayoutError> {
    let mut tree = LayoutTree::new();
    let (roots, next_pane) = parse_forest(&mut tree, text, 0, None, 0)?;
    if roots.is_empty() {
        return Err(LayoutError::EmptyDescriptor);
    }
    tree.set_roots(roots);
    debug!(nodes = tree.len(), panes = next_pane, "parsed layout descriptor");
    Ok((tree, next_pane))
}

/// Parse the raw `#{window_layout}` value as tmux prints it.
///
/// Strips surrounding whitespace and quotes plus the leading checksum token
/// (`b25d,`) before handing the body to [`parse`].
pub fn parse_window_layout(raw: &str) -> Result<LayoutTree, LayoutError> {
    let trimmed = raw.trim().trim_matches(|c: char| c == '\'' || c == '"').trim();
    let body = strip_checksum(trimmed);
    let base = body.as_ptr() as usize - raw.as_ptr() as usize;
    let (tree, _) = parse(body).map_err(|e| shift(e, base))?;
    Ok(tree)
}

fn strip_checksum(text: &str) -> &str {
    match text.split_once(',') {
        Some((head, rest)) if !head.contains('x') => rest,
        _ => text,
    }
}

fn shift(err: LayoutError, by: usize) -> LayoutError {
    match err {
        LayoutError::DescriptorParse { position, message } => LayoutError::DescriptorParse {
            position: position + by,
            message,
        },
        LayoutError::UnmatchedBracket { position, opener } => LayoutError::UnmatchedBracket {
            position: position + by,
            opener,
        },
        other => other,
    }
}

/// Parse a comma-separated run of sibling nodes.
///
/// `base` is the absolute offset of `text` in the descriptor. The pane
/// counter is passed in and handed back so sibling and nested calls share
/// one sequence.
fn parse_forest(
    tree: &mut LayoutTree,
    text: &str,
    base: usize,
    parent: Option<NodeId>,
    mut next_pane: u32,
) -> Result<(Vec<NodeId>, u32), LayoutError> {
    let mut nodes = Vec::new();
    let mut pos = whitespace_len(text);

    // A single leading comma is tolerated before the first node.
    if text[pos..].starts_with(',') {
        pos += 1;
    }

    while pos < text.len() {
        if !nodes.is_empty() {
            if !text[pos..].starts_with(',') {
                return Err(LayoutError::parse(base + pos, "expected ',' between nodes"));
            }
            pos += 1;
        }
        pos += whitespace_len(&text[pos..]);

        let (dimensions, used) = parse_dimensions(&text[pos..], base + pos)?;
        pos += used;
        pos += whitespace_len(&text[pos..]);
        let (offset, used) = parse_offset(&text[pos..], base + pos)?;
        pos += used;
        pos += whitespace_len(&text[pos..]);

        let id = match text[pos..].chars().next() {
            Some(',') => {
                let (token, used) = parse_pane_token(&text[pos..], base + pos)?;
                pos += used;
                let pane = Pane {
                    id: PaneId(next_pane),
                    token,
                    dimensions,
                };
                next_pane += 1;
                tree.push(LayoutNode {
                    dimensions,
                    offset,
                    parent,
                    kind: NodeKind::Leaf(pane),
                })
            }
            Some(opener @ ('{' | '[')) => {
                let (orientation, closer) = if opener == '{' {
                    (Orientation::Row, '}')
                } else {
                    (Orientation::Column, ']')
                };
                let end = find_matching(&text[pos..], opener, closer).ok_or(
                    LayoutError::UnmatchedBracket {
                        position: base + pos,
                        opener,
                    },
                )?;
                let id = tree.push(LayoutNode {
                    dimensions,
                    offset,
                    parent,
                    kind: NodeKind::Container {
                        orientation,
                        children: Vec::new(),
                    },
                });
                let inner = &text[pos + 1..pos + end];
                let (children, next) = parse_forest(tree, inner, base + pos + 1, Some(id), next_pane)?;
                if children.is_empty() {
                    return Err(LayoutError::parse(base + pos, "container has no children"));
                }
                tree.set_children(id, children);
                next_pane = next;
                pos += end + 1;
                id
            }
            Some(other) => {
                return Err(LayoutError::parse(
                    base + pos,
                    format!("unexpected '{other}' after offset"),
                ));
            }
            None => {
                return Err(LayoutError::parse(
                    base + pos,
                    "descriptor ends before pane number or child list",
                ));
            }
        };
        nodes.push(id);
        pos += whitespace_len(&text[pos..]);
    }

    Ok((nodes, next_pane))
}
