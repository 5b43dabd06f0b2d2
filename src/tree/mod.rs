//! Mutable ordered container based on a red-black tree.
//!
//! This module provides [`RedBlackTree`], a self-balancing binary search
//! tree that stores comparable values in ascending order.
//!
//! # Overview
//!
//! - O(log N) add
//! - O(log N) delete
//! - O(log N) contains, min and max
//! - O(N) in-order traversal with O(log N) auxiliary space
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use redblack::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::from_values([30, 20, 10]);
//! tree.add(25);
//! assert!(tree.delete(&20));
//!
//! let values: Vec<&i32> = tree.iter().collect();
//! assert_eq!(values, vec![&10, &25, &30]);
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in an arena owned by the tree and refer to their
//! children by index. Every absent child is the shared black Sentinel, and a
//! permanent head slot sits above the real root so that rotations at the
//! root rewrite a slot like any other.
//!
//! After every public operation the tree maintains:
//! 1. The root is black (or the tree is empty)
//! 2. Every path from the root to a Sentinel has the same number of black nodes
//! 3. No red node has a red child
//! 4. Sentinels are black and are the only leaves
//! 5. The in-order sequence is ascending (strictly, unless duplicates are allowed)
//!
//! Insertion and deletion collect the chain of ancestors while descending
//! and hand it to the fixup, so nodes carry no parent links.

mod delete;
mod insert;
mod iter;
mod node;
mod policy;
mod rotation;
mod validate;

pub use iter::{IntoIter, Iter};
pub use node::{Color, NodeRef};
pub use policy::DuplicatePolicy;
pub use validate::InvariantViolation;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use generational_arena::Arena;
use log::debug;
use smallvec::SmallVec;

use node::{Link, Node, NodeId, SENTINEL};

/// Ancestor chains up to this depth stay on the stack. A red-black tree of
/// height 32 holds at least 2^16 - 1 values.
const INLINE_DEPTH: usize = 32;

/// Chain of node handles from the real root down to the node in focus.
type Ancestors = SmallVec<[NodeId; INLINE_DEPTH]>;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A mutable ordered container based on a red-black tree.
///
/// Values must implement `Ord`; they double as their own keys. The tree is a
/// set by default; see [`DuplicatePolicy`] for multiset behavior.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `add`          | O(log N)          |
/// | `delete`       | O(log N)          |
/// | `contains`     | O(log N)          |
/// | `min`/`max`    | O(log N)          |
/// | `sort`/`iter`  | O(N)              |
/// | `len`          | O(1)              |
/// | `is_empty`     | O(1)              |
///
/// # Examples
///
/// ```rust
/// use redblack::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.add(3);
/// tree.add(1);
/// tree.add(2);
///
/// assert_eq!(tree.sort(), vec![1, 2, 3]);
/// assert_eq!(tree.min(), Some(&1));
/// assert_eq!(tree.max(), Some(&3));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<T> {
    /// Storage for every real node
    nodes: Arena<Node<T>>,
    /// The head slot: its designated child is the real root
    head: Link,
    /// How equal values are treated by `add`
    policy: DuplicatePolicy,
}

impl<T> RedBlackTree<T> {
    /// Creates a new empty tree that rejects duplicate values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Creates a new empty tree with the given duplicate policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{DuplicatePolicy, RedBlackTree};
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::with_policy(DuplicatePolicy::Allow);
    /// assert_eq!(tree.policy(), DuplicatePolicy::Allow);
    /// ```
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            nodes: Arena::new(),
            head: SENTINEL,
            policy,
        }
    }

    /// Creates a new empty set with room for `capacity` values before the
    /// node arena grows. Duplicates are rejected; use
    /// [`Self::with_capacity_and_policy`] for a pre-sized multiset.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, DuplicatePolicy::default())
    }

    /// Creates a new empty tree with the given duplicate policy and room
    /// for `capacity` values before the node arena grows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::{DuplicatePolicy, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::with_capacity_and_policy(8, DuplicatePolicy::Allow);
    /// tree.extend([4, 4, 4]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn with_capacity_and_policy(capacity: usize, policy: DuplicatePolicy) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: SENTINEL,
            policy,
        }
    }

    /// Returns the number of values in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_sentinel()
    }

    /// Returns the duplicate policy this tree was created with.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Removes every value from the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_values([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(tree.add(2));
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing red-black tree with {} values", self.nodes.len());
        self.nodes.clear();
        self.head = SENTINEL;
    }

    /// Returns a read-only view of the real root, or `None` if the tree is
    /// empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.head.node().map(|id| NodeRef::new(self, id))
    }

    /// Returns the number of nodes on the longest path from the root down
    /// to a Sentinel. An empty tree has height 0.
    ///
    /// A red-black tree with N values never exceeds `2 * log2(N + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height_of(self.head)
    }

    fn height_of(&self, link: Link) -> usize {
        match link {
            Link::Sentinel => 0,
            Link::Node(id) => {
                let node = &self.nodes[id];
                1 + self.height_of(node.left).max(self.height_of(node.right))
            }
        }
    }

    /// Returns the black-height of the root: the number of black nodes on
    /// any path from the root down to a Sentinel, not counting the root and
    /// counting the Sentinel. An empty tree has black-height 0.
    ///
    /// Only meaningful while the invariants hold; [`Self::validate`] checks
    /// every path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values([30, 20, 10]);
    /// assert_eq!(tree.black_height(), 1);
    /// ```
    #[must_use]
    pub fn black_height(&self) -> usize {
        let Link::Node(root) = self.head else {
            return 0;
        };
        let mut black_nodes = 1;
        let mut current = self.nodes[root].left;
        while let Link::Node(id) = current {
            if self.nodes[id].color.is_black() {
                black_nodes += 1;
            }
            current = self.nodes[id].left;
        }
        black_nodes
    }

    /// Returns the smallest value, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.extreme(node::Side::Left)
    }

    /// Returns the largest value, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.extreme(node::Side::Right)
    }

    fn extreme(&self, side: node::Side) -> Option<&T> {
        let mut id = self.head.node()?;
        while let Link::Node(next) = self.nodes[id].child(side) {
            id = next;
        }
        Some(&self.nodes[id].value)
    }

    /// Returns an iterator over the values in ascending order.
    ///
    /// The iterator walks the tree with an explicit stack of pending
    /// ancestors and is exhausted for good once it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values([3, 1, 2]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.collect::<Vec<_>>(), vec![&2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns every stored value in ascending order.
    ///
    /// # Complexity
    ///
    /// O(N) time, O(log N) auxiliary space for the traversal
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let empty: RedBlackTree<i32> = RedBlackTree::from_values([]);
    /// assert_eq!(empty.sort(), Vec::<i32>::new());
    ///
    /// let tree = RedBlackTree::from_values([5, 3, 8]);
    /// assert_eq!(tree.sort(), vec![3, 5, 8]);
    /// ```
    #[must_use]
    pub fn sort(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Color of a link; the Sentinel is black.
    #[inline]
    fn color_of(&self, link: Link) -> Color {
        match link {
            Link::Sentinel => Color::Black,
            Link::Node(id) => self.nodes[id].color,
        }
    }

    #[inline]
    fn is_red(&self, link: Link) -> bool {
        self.color_of(link).is_red()
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Builds a tree by adding each value in sequence order.
    ///
    /// Uses the default policy, so later duplicates of an earlier value are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values([50, 30, 70, 30]);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.sort(), vec![30, 50, 70]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// Returns `true` if the tree holds a value equal to `value`.
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
    /// let tree = RedBlackTree::from_values(["apple".to_string()]);
    /// assert!(tree.contains("apple"));
    /// assert!(!tree.contains("pear"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.head;
        while let Link::Node(id) = current {
            let node = &self.nodes[id];
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for RedBlackTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two trees are equal when they hold the same values in the same order,
/// regardless of shape or duplicate policy.
impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

impl<T: Hash> Hash for RedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Color: Copy, Eq, Hash);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_new_creates_empty() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.black_height(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[rstest]
    fn test_with_capacity_starts_empty() {
        let mut tree = RedBlackTree::with_capacity(16);
        assert!(tree.is_empty());
        tree.add("x");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.policy(), DuplicatePolicy::Reject);
    }

    #[rstest]
    fn test_with_capacity_and_policy_builds_a_multiset() {
        let mut tree = RedBlackTree::with_capacity_and_policy(4, DuplicatePolicy::Allow);

        assert_eq!(tree.policy(), DuplicatePolicy::Allow);
        assert!(tree.add(7));
        assert!(tree.add(7));
        assert_eq!(tree.sort(), vec![7, 7]);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_contains() {
        let tree = RedBlackTree::from_values([4, 2, 6, 1, 3]);

        assert!(tree.contains(&3));
        assert!(tree.contains(&6));
        assert!(!tree.contains(&5));
        assert!(!tree.contains(&0));
    }

    #[rstest]
    fn test_min_max() {
        let tree = RedBlackTree::from_values([17, -4, 99, 0]);
        assert_eq!(tree.min(), Some(&-4));
        assert_eq!(tree.max(), Some(&99));
    }

    #[rstest]
    fn test_clear_resets_everything() {
        let mut tree: RedBlackTree<i32> = (0..50).collect();
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.sort(), Vec::<i32>::new());
        assert_eq!(tree.validate(), Ok(0));
    }

    #[rstest]
    fn test_black_height_matches_validate() {
        let tree: RedBlackTree<i32> = (0..100).rev().collect();
        assert_eq!(tree.validate(), Ok(tree.black_height()));
    }

    #[rstest]
    fn test_display_empty() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(format!("{tree}"), "{}");
    }

    #[rstest]
    fn test_display_sorted() {
        let tree = RedBlackTree::from_values([3, 1, 2]);
        assert_eq!(format!("{tree}"), "{1, 2, 3}");
    }

    #[rstest]
    fn test_debug_is_a_list() {
        let tree = RedBlackTree::from_values(["b", "a"]);
        assert_eq!(format!("{tree:?}"), r#"["a", "b"]"#);
    }

    #[rstest]
    fn test_eq_ignores_shape() {
        let ascending: RedBlackTree<i32> = (1..=7).collect();
        let descending: RedBlackTree<i32> = (1..=7).rev().collect();

        assert_eq!(ascending, descending);
        assert_eq!(hash_of(&ascending), hash_of(&descending));
    }

    #[rstest]
    fn test_ne_on_different_contents() {
        let left = RedBlackTree::from_values([1, 2, 3]);
        let right = RedBlackTree::from_values([1, 2, 4]);
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = RedBlackTree::from_values([1, 2, 3]);
        let mut copy = original.clone();
        copy.delete(&2);

        assert_eq!(original.sort(), vec![1, 2, 3]);
        assert_eq!(copy.sort(), vec![1, 3]);
    }

    #[rstest]
    fn test_extend_respects_policy() {
        let mut set = RedBlackTree::new();
        set.extend([1, 1, 2]);
        let mut multiset = RedBlackTree::with_policy(DuplicatePolicy::Allow);
        multiset.extend([1, 1, 2]);

        assert_eq!(set.len(), 2);
        assert_eq!(multiset.len(), 3);
    }

    #[rstest]
    fn test_is_red_treats_sentinel_as_black() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        assert_eq!(tree.color_of(SENTINEL), Color::Black);
        assert!(!tree.is_red(SENTINEL));
    }
}
