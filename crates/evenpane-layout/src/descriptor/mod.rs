//! tmux layout descriptor parsing.
//!
//! A descriptor looks like `b25d,80x24,0,0{40x24,0,0,0,39x24,41,0,1}`: a
//! checksum, then nodes of the form `WxH,X,Y` followed by either `,N` for a
//! pane, `{...}` for side-by-side children or `[...]` for stacked children.

mod builder;
pub mod scan;

pub use builder::{parse, parse_window_layout};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use evenpane_common::{Dimensions, LayoutError, Offset, Orientation, PaneId};

    #[test]
    fn two_pane_row() {
        let (tree, next) = parse("80x24,0,0{40x24,0,0,0,39x24,41,0,1}").unwrap();
        assert_eq!(next, 2);
        assert_eq!(tree.roots().len(), 1);

        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.orientation(), Some(Orientation::Row));
        assert_eq!(root.dimensions, Dimensions::new(80, 24));
        assert_eq!(root.children().len(), 2);

        let ids: Vec<_> = root
            .children()
            .iter()
            .map(|&c| tree.node(c).pane().unwrap().id)
            .collect();
        assert_eq!(ids, vec![PaneId(0), PaneId(1)]);

        let second = tree.node(root.children()[1]);
        assert_eq!(second.offset, Offset { x: 41, y: 0 });
        assert_eq!(second.dimensions, Dimensions::new(39, 24));
    }

    #[test]
    fn single_pane() {
        let (tree, next) = parse("80x24,0,0,7").unwrap();
        assert_eq!(next, 1);
        let root = tree.node(tree.root().unwrap());
        match &root.kind {
            NodeKind::Leaf(pane) => {
                assert_eq!(pane.id, PaneId(0));
                assert_eq!(pane.token, 7);
            }
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn column_container() {
        let (tree, _) = parse("80x24,0,0[80x12,0,0,0,80x11,0,13,1]").unwrap();
        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.orientation(), Some(Orientation::Column));
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn ids_follow_document_order_across_nesting() {
        let text = "160x48,0,0[160x24,0,0{80x24,0,0,4,79x24,81,0,9},160x23,0,25{53x23,0,25,2,53x23,54,25[53x11,54,25,3,53x11,54,37,8],52x23,108,25,6}]";
        let (tree, next) = parse(text).unwrap();
        assert_eq!(next, 6);
        let tokens: Vec<u32> = tree
            .leaves()
            .into_iter()
            .map(|id| tree.node(id).pane().unwrap().token)
            .collect();
        assert_eq!(tokens, vec![4, 9, 2, 3, 8, 6]);
        assert_eq!(
            tree.collect_pane_ids(),
            (0..6).map(PaneId).collect::<Vec<_>>()
        );
    }

    #[test]
    fn repeated_parses_are_independent() {
        let text = "80x24,0,0{40x24,0,0,0,39x24,41,0,1}";
        let (_, first) = parse(text).unwrap();
        let (tree, second) = parse(text).unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.collect_pane_ids(), vec![PaneId(0), PaneId(1)]);
    }

    #[test]
    fn whitespace_between_tokens_is_ignored() {
        let (tree, next) = parse(" 80x24 ,0,0 { 40x24,0,0,0 , 39x24,41,0,1 } ").unwrap();
        assert_eq!(next, 2);
        assert_eq!(tree.pane_count(), 2);
    }

    #[test]
    fn window_layout_strips_checksum_and_quotes() {
        let tree = parse_window_layout("'b25d,80x24,0,0{40x24,0,0,0,39x24,41,0,1}'\n").unwrap();
        assert_eq!(tree.pane_count(), 2);
        let root = tree.node(tree.root().unwrap());
        assert_eq!(root.dimensions, Dimensions::new(80, 24));
    }

    #[test]
    fn window_layout_without_checksum() {
        let tree = parse_window_layout("80x24,0,0,0").unwrap();
        assert_eq!(tree.pane_count(), 1);
    }

    #[test]
    fn window_layout_error_position_is_absolute() {
        let err = parse_window_layout("b25d,80x24,0").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::DescriptorParse { position: 12, .. }
        ));
    }

    #[test]
    fn truncated_mid_token_fails() {
        for text in [
            "80x",
            "80x24,0",
            "80x24,0,0",
            "80x24,0,0{40x24,0,0,0,39x2",
            "80x24,0,0{40x24,0,0,0,39x24,41,0,1",
            "80x24,0,0{40x24,0,0,0,39x24,41,0,1},",
        ] {
            assert!(parse(text).is_err(), "expected error for {text:?}");
        }
    }

    #[test]
    fn unmatched_bracket_reported() {
        let err = parse("80x24,0,0[80x12,0,0,0").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::UnmatchedBracket {
                position: 9,
                opener: '['
            }
        ));
    }

    #[test]
    fn empty_container_rejected() {
        assert!(parse("80x24,0,0{}").is_err());
    }

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(parse(""), Err(LayoutError::EmptyDescriptor)));
        assert!(matches!(parse("   "), Err(LayoutError::EmptyDescriptor)));
    }

    #[test]
    fn garbage_after_node_rejected() {
        assert!(parse("80x24,0,0,1x").is_err());
        assert!(parse("80x24,0,0(1)").is_err());
    }
}
