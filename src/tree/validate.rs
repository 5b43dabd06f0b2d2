//! Invariant checking.
//!
//! [`RedBlackTree::validate`] walks the whole tree and reports the first
//! broken invariant it finds. Invariant 4 (Sentinels are black leaves) holds
//! by construction, since the Sentinel link carries no color to corrupt.

use super::RedBlackTree;
use super::node::Link;

/// Describes which red-black invariant a tree violates.
///
/// Returned by [`RedBlackTree::validate`]. A tree that was only mutated
/// through its public API never produces one of these; they exist to make
/// the invariants checkable in tests and debug assertions.
///
/// # Examples
///
/// ```rust
/// use redblack::InvariantViolation;
///
/// let error = InvariantViolation::BlackHeightMismatch { depth: 2, left: 3, right: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "black-height mismatch at depth 2: left subtree has 3, right subtree has 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The real root is red.
    RedRoot,
    /// A red node has a red child. `depth` is the child's distance from the
    /// root (the root is at depth 0).
    RedChildOfRed {
        /// Depth of the offending red child.
        depth: usize,
    },
    /// The two subtrees of a node have different black-heights.
    BlackHeightMismatch {
        /// Depth of the node whose subtrees disagree.
        depth: usize,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// The in-order sequence is not ascending. `position` is the index, in
    /// ascending order, of the first value that is smaller than its
    /// predecessor (or equal to it when duplicates are rejected).
    OutOfOrder {
        /// Index of the misplaced value in the in-order sequence.
        position: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "the root is red"),
            Self::RedChildOfRed { depth } => {
                write!(formatter, "red node at depth {depth} has a red parent")
            }
            Self::BlackHeightMismatch { depth, left, right } => write!(
                formatter,
                "black-height mismatch at depth {depth}: left subtree has {left}, right subtree has {right}"
            ),
            Self::OutOfOrder { position } => write!(
                formatter,
                "value at in-order position {position} is out of order"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<T: Ord> RedBlackTree<T> {
    /// Checks every red-black invariant and returns the black-height of the
    /// root on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found: a red root, a red node
    /// with a red child, paths with different black counts, or values out of
    /// order.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = (0..100).collect();
    /// for value in (0..100).step_by(3) {
    ///     tree.delete(&value);
    /// }
    /// assert_eq!(tree.validate(), Ok(tree.black_height()));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Link::Node(root) = self.head else {
            return Ok(0);
        };
        if self.nodes[root].color.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        let with_root = self.check_subtree(self.head, 0)?;
        self.check_order()?;
        Ok(with_root - 1)
    }

    /// Returns the number of black nodes on every path from `link` down to
    /// a Sentinel, counting both ends.
    fn check_subtree(&self, link: Link, depth: usize) -> Result<usize, InvariantViolation> {
        let Link::Node(id) = link else {
            return Ok(1);
        };
        let node = &self.nodes[id];

        if node.color.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(InvariantViolation::RedChildOfRed { depth: depth + 1 });
        }

        let left = self.check_subtree(node.left, depth + 1)?;
        let right = self.check_subtree(node.right, depth + 1)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }

        Ok(left + usize::from(node.color.is_black()))
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let allow_duplicates = self.policy.allows_duplicates();
        let mut values = self.iter();
        let Some(mut previous) = values.next() else {
            return Ok(());
        };

        for (offset, value) in values.enumerate() {
            let ordered = if allow_duplicates {
                previous <= value
            } else {
                previous < value
            };
            if !ordered {
                return Err(InvariantViolation::OutOfOrder {
                    position: offset + 1,
                });
            }
            previous = value;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
