//! Rotation primitives.
//!
//! A rotation promotes one child of a node above it in O(1) and keeps the
//! in-order sequence of the subtree intact. Colors are left alone; the
//! fixups that call these recolor afterwards.

use log::trace;

use super::RedBlackTree;
use super::node::{Anchor, Link, NodeId, Side};

impl<T> RedBlackTree<T> {
    /// Rotates `node` down to the left, promoting its right child.
    ///
    /// `parent` must be the slot currently holding `node`. Returns the
    /// promoted child. The right child must be a real node.
    pub(super) fn rotate_left(&mut self, node: NodeId, parent: Anchor) -> NodeId {
        self.promote(node, Side::Right, parent)
    }

    /// Mirror image of [`Self::rotate_left`]: promotes the left child.
    pub(super) fn rotate_right(&mut self, node: NodeId, parent: Anchor) -> NodeId {
        self.promote(node, Side::Left, parent)
    }

    /// Rotates `node` down toward `direction`; the child on the opposite
    /// side takes its place in `parent`.
    pub(super) fn rotate(&mut self, node: NodeId, direction: Side, parent: Anchor) -> NodeId {
        match direction {
            Side::Left => self.rotate_left(node, parent),
            Side::Right => self.rotate_right(node, parent),
        }
    }

    fn promote(&mut self, node: NodeId, rising_side: Side, parent: Anchor) -> NodeId {
        let direction = rising_side.opposite();
        let Link::Node(pivot) = self.nodes[node].child(rising_side) else {
            debug_assert!(false, "rotation requires a real child on the rising side");
            return node;
        };

        trace!("rotate {direction:?} at {node:?}, promoting {pivot:?}");

        // The pivot's inner subtree moves across to `node`.
        let inner = self.nodes[pivot].child(direction);
        *self.nodes[node].child_mut(rising_side) = inner;
        *self.nodes[pivot].child_mut(direction) = Link::Node(node);
        self.replace_child(parent, node, Link::Node(pivot));

        pivot
    }

    /// Redirects whichever link of `parent` points at `old` to `new`.
    pub(super) fn replace_child(&mut self, parent: Anchor, old: NodeId, new: Link) {
        match parent {
            Anchor::Head => self.head = new,
            Anchor::Node(parent) => {
                let side = self.side_of(parent, old);
                *self.nodes[parent].child_mut(side) = new;
            }
        }
    }

    /// Which side of `parent` holds `child`.
    #[inline]
    pub(super) fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.nodes[parent].left == Link::Node(child) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{Color, Node, SENTINEL};
    use rstest::rstest;

    /// Builds `b(a, d(c, e))` by hand, all black, hanging from the head.
    /// Handles are returned in in-order position.
    fn right_heavy() -> (RedBlackTree<char>, [NodeId; 5]) {
        let mut tree = RedBlackTree::new();
        let first = tree.nodes.insert(Node::new_black('a'));
        let third = tree.nodes.insert(Node::new_black('c'));
        let fifth = tree.nodes.insert(Node::new_black('e'));
        let fourth = tree.nodes.insert(Node {
            value: 'd',
            left: Link::Node(third),
            right: Link::Node(fifth),
            color: Color::Black,
        });
        let second = tree.nodes.insert(Node {
            value: 'b',
            left: Link::Node(first),
            right: Link::Node(fourth),
            color: Color::Black,
        });
        tree.head = Link::Node(second);
        (tree, [first, second, third, fourth, fifth])
    }

    fn in_order(tree: &RedBlackTree<char>) -> String {
        tree.iter().collect()
    }

    #[rstest]
    fn test_rotate_left_at_root_rewrites_head() {
        let (mut tree, [first, second, third, fourth, fifth]) = right_heavy();

        let promoted = tree.rotate_left(second, Anchor::Head);

        assert_eq!(promoted, fourth);
        assert_eq!(tree.head, Link::Node(fourth));
        assert_eq!(tree.nodes[fourth].left, Link::Node(second));
        assert_eq!(tree.nodes[fourth].right, Link::Node(fifth));
        assert_eq!(tree.nodes[second].left, Link::Node(first));
        assert_eq!(tree.nodes[second].right, Link::Node(third));
        assert_eq!(in_order(&tree), "abcde");
    }

    #[rstest]
    fn test_rotate_right_undoes_rotate_left() {
        let (mut tree, [_, second, _, fourth, _]) = right_heavy();

        tree.rotate_left(second, Anchor::Head);
        let promoted = tree.rotate_right(fourth, Anchor::Head);

        assert_eq!(promoted, second);
        assert_eq!(tree.head, Link::Node(second));
        assert_eq!(tree.nodes[second].right, Link::Node(fourth));
        assert_eq!(in_order(&tree), "abcde");
    }

    #[rstest]
    fn test_rotate_below_root_rewrites_parent_slot() {
        let (mut tree, [_, second, third, fourth, fifth]) = right_heavy();

        let promoted = tree.rotate_right(fourth, Anchor::Node(second));

        assert_eq!(promoted, third);
        assert_eq!(tree.nodes[second].right, Link::Node(third));
        assert_eq!(tree.nodes[third].right, Link::Node(fourth));
        assert_eq!(tree.nodes[fourth].left, SENTINEL);
        assert_eq!(tree.nodes[fourth].right, Link::Node(fifth));
        assert_eq!(in_order(&tree), "abcde");
    }

    #[rstest]
    fn test_rotation_leaves_colors_untouched() {
        let (mut tree, [_, second, _, fourth, _]) = right_heavy();
        tree.nodes[fourth].color = Color::Red;

        tree.rotate_left(second, Anchor::Head);

        assert_eq!(tree.nodes[fourth].color, Color::Red);
        assert_eq!(tree.nodes[second].color, Color::Black);
    }
}
