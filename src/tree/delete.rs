//! Deletion and the deletion fixup.

use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

use super::node::{Anchor, Color, Link, NodeId, Side};
use super::{Ancestors, RedBlackTree};

impl<T: Ord> RedBlackTree<T> {
    /// Removes a value from the tree.
    ///
    /// Returns `true` if a matching value was found and removed. When the
    /// value is absent the tree is left untouched and `false` is returned.
    /// Under [`DuplicatePolicy::Allow`](super::DuplicatePolicy::Allow) a
    /// single occurrence is removed.
    ///
    /// The value may be any borrowed form of the tree's value type, but the
    /// ordering on the borrowed form must match the ordering on the value
    /// type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    /// assert!(tree.delete(&30));
    /// assert!(!tree.delete(&30));
    /// assert_eq!(tree.sort(), vec![20, 40, 50, 60, 70, 80]);
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ancestors = Ancestors::new();
        let mut current = self.head;
        let target = loop {
            let Link::Node(id) = current else {
                return false;
            };
            ancestors.push(id);
            let node = &self.nodes[id];
            match value.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => break id,
            }
        };

        // A node with two real children keeps its place and takes the value
        // of its in-order successor, which is unlinked instead.
        let mut removed = target;
        if let (Link::Node(_), Link::Node(right)) =
            (self.nodes[target].left, self.nodes[target].right)
        {
            removed = right;
            ancestors.push(right);
            while let Link::Node(next) = self.nodes[removed].left {
                removed = next;
                ancestors.push(next);
            }
        }

        self.unlink(target, removed, ancestors);
        true
    }
}

impl<T> RedBlackTree<T> {
    /// Splices `removed` out of the tree and repairs the black-height.
    ///
    /// `ancestors` runs from the root down to `removed`, which has at most
    /// one real child. When `removed` differs from `target`, its value is
    /// moved into `target` before the node is released.
    fn unlink(&mut self, target: NodeId, removed: NodeId, mut ancestors: Ancestors) {
        let node = &self.nodes[removed];
        let child = if node.left.is_sentinel() {
            node.right
        } else {
            node.left
        };
        let anchor = Anchor::above_last(&ancestors);
        let side = match anchor {
            Anchor::Head => Side::Left,
            Anchor::Node(parent) => self.side_of(parent, removed),
        };

        self.replace_child(anchor, removed, child);
        ancestors.pop();

        let Some(unlinked) = self.nodes.remove(removed) else {
            debug_assert!(false, "unlinked node {removed:?} was not in the arena");
            return;
        };
        if removed != target {
            self.nodes[target].value = unlinked.value;
        }

        if unlinked.color.is_black() {
            self.fix_after_delete(child, side, ancestors);
        }
    }

    /// Restores the black-height after a black node was unlinked.
    ///
    /// `focus` is the link that took the removed node's place, sitting on
    /// `side` of the last entry of `ancestors`. The subtree under `focus` is
    /// one black node short until a case below absorbs the deficiency.
    fn fix_after_delete(&mut self, mut focus: Link, mut side: Side, mut ancestors: Ancestors) {
        while let Some(&parent) = ancestors.last() {
            if self.is_red(focus) {
                break;
            }

            let Link::Node(mut sibling) = self.nodes[parent].child(side.opposite()) else {
                debug_assert!(false, "a short subtree always has a real sibling");
                break;
            };

            if self.nodes[sibling].color.is_red() {
                trace!("delete fixup: red sibling, rotating at {parent:?}");
                self.rotate(parent, side, Anchor::above_last(&ancestors));
                self.nodes[sibling].color = Color::Black;
                self.nodes[parent].color = Color::Red;

                // The old sibling now sits between the parent and its anchor.
                ancestors.pop();
                ancestors.push(sibling);
                ancestors.push(parent);

                let Link::Node(next) = self.nodes[parent].child(side.opposite()) else {
                    debug_assert!(false, "the red sibling's child is a real node");
                    break;
                };
                sibling = next;
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                trace!("delete fixup: black nephews, moving up to {parent:?}");
                self.nodes[sibling].color = Color::Red;
                focus = Link::Node(parent);
                ancestors.pop();
                if let Some(&grandparent) = ancestors.last() {
                    side = self.side_of(grandparent, parent);
                }
                continue;
            }

            if !self.is_red(far) {
                trace!("delete fixup: red near nephew, rotating at {sibling:?}");
                if let Link::Node(near) = near {
                    self.nodes[near].color = Color::Black;
                    self.nodes[sibling].color = Color::Red;
                    sibling = self.rotate(sibling, side.opposite(), Anchor::Node(parent));
                }
            }

            trace!("delete fixup: red far nephew, rotating at {parent:?}");
            self.rotate(parent, side, Anchor::above_last(&ancestors));
            let parent_color = self.nodes[parent].color;
            self.nodes[sibling].color = parent_color;
            self.nodes[parent].color = Color::Black;
            if let Link::Node(far) = self.nodes[sibling].child(side.opposite()) {
                self.nodes[far].color = Color::Black;
            }
            focus = self.head;
            break;
        }

        if let Link::Node(id) = focus {
            self.nodes[id].color = Color::Black;
        }
        if let Link::Node(root) = self.head {
            self.nodes[root].color = Color::Black;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
