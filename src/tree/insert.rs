//! Insertion and the insertion fixup.

use std::cmp::Ordering;

use log::trace;

use super::node::{Anchor, Color, Link, Node, Side};
use super::{Ancestors, RedBlackTree};

impl<T: Ord> RedBlackTree<T> {
    /// Adds a value to the tree.
    ///
    /// Returns `false` only when the tree uses [`DuplicatePolicy::Reject`]
    /// and an equal value is already stored; the tree is unchanged in that
    /// case. Under [`DuplicatePolicy::Allow`] this always returns `true` and
    /// the new value is ordered after every equal value already present.
    ///
    /// [`DuplicatePolicy::Reject`]: super::DuplicatePolicy::Reject
    /// [`DuplicatePolicy::Allow`]: super::DuplicatePolicy::Allow
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{Color, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(10);
    /// tree.add(20);
    /// tree.add(30);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 20);
    /// assert_eq!(root.color(), Color::Black);
    /// assert_eq!(tree.sort(), vec![10, 20, 30]);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let Link::Node(root) = self.head else {
            let id = self.nodes.insert(Node::new_black(value));
            self.head = Link::Node(id);
            return true;
        };

        let allow_duplicates = self.policy.allows_duplicates();
        let mut ancestors = Ancestors::new();
        let mut parent = root;
        let side = loop {
            ancestors.push(parent);
            let node = &self.nodes[parent];
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal if !allow_duplicates => return false,
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Link::Node(child) => parent = child,
                Link::Sentinel => break side,
            }
        };

        let id = self.nodes.insert(Node::new_red(value));
        *self.nodes[parent].child_mut(side) = Link::Node(id);
        ancestors.push(id);

        self.fix_after_insert(ancestors);
        true
    }
}

impl<T> RedBlackTree<T> {
    /// Restores the invariants after a red leaf was attached.
    ///
    /// `ancestors` runs from the real root down to the new node. Only the
    /// no-red-red rule can be broken; each pass either settles it locally or
    /// moves the violation two levels up.
    fn fix_after_insert(&mut self, mut ancestors: Ancestors) {
        while ancestors.len() > 1 {
            let depth = ancestors.len();
            let focus = ancestors[depth - 1];
            let parent = ancestors[depth - 2];

            if self.nodes[parent].color.is_black() {
                break;
            }
            if depth == 2 {
                self.nodes[parent].color = Color::Black;
                break;
            }

            let grandparent = ancestors[depth - 3];
            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            if let Some(uncle) = uncle.node().filter(|&id| self.nodes[id].color.is_red()) {
                trace!("insert fixup: red uncle, recoloring at {grandparent:?}");
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                ancestors.truncate(depth - 2);
                continue;
            }

            // Inner grandchild: turn it into the outer shape first.
            let mut parent = parent;
            if self.side_of(parent, focus) != parent_side {
                trace!("insert fixup: rotating inner grandchild {focus:?} outward");
                self.rotate(parent, parent_side, Anchor::Node(grandparent));
                parent = focus;
            }

            trace!("insert fixup: rotating at grandparent {grandparent:?}");
            let anchor = Anchor::above_last(&ancestors[..depth - 2]);
            self.rotate(grandparent, parent_side.opposite(), anchor);
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            return;
        }

        if let Link::Node(root) = self.head {
            self.nodes[root].color = Color::Black;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
