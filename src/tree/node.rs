//! Node storage for the red-black tree.
//!
//! Nodes are kept in a [`generational_arena::Arena`] owned by the tree and
//! refer to their children through [`Link`]s. An absent child is the
//! [`SENTINEL`] link, which carries no data and is always black.

use generational_arena::Index;
use std::fmt;

use super::RedBlackTree;

/// Stable handle of a node inside the tree's arena.
pub(super) type NodeId = Index;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
///
/// Fresh nodes are red. The Sentinel that stands for every missing child is
/// black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Color {
    /// A red node. Its children must both be black.
    #[default]
    Red,
    /// A black node. Counts toward the black-height of every path through it.
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(formatter, "red"),
            Self::Black => write!(formatter, "black"),
        }
    }
}

// =============================================================================
// Links, Sides and Anchors
// =============================================================================

/// A child link: either a real node or the shared Sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Link {
    Sentinel,
    Node(NodeId),
}

/// The single "no child" marker. It has no fields, so nothing can mutate it.
pub(super) const SENTINEL: Link = Link::Sentinel;

impl Link {
    #[inline]
    pub(super) const fn node(self) -> Option<NodeId> {
        match self {
            Self::Sentinel => None,
            Self::Node(id) => Some(id),
        }
    }

    #[inline]
    pub(super) const fn is_sentinel(self) -> bool {
        matches!(self, Self::Sentinel)
    }
}

/// Which child slot of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(super) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The slot a subtree hangs from.
///
/// `Head` is the permanent wrapper above the real root, which lets rotations
/// and splices at the root rewrite a slot like anywhere else.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Anchor {
    Head,
    Node(NodeId),
}

impl Anchor {
    /// The anchor of the node at the end of `ancestors`: its parent, or the
    /// head when the chain has a single entry.
    #[inline]
    pub(super) fn above_last(ancestors: &[NodeId]) -> Self {
        match ancestors.len() {
            0 | 1 => Self::Head,
            length => Self::Node(ancestors[length - 2]),
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node record.
#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) left: Link,
    pub(super) right: Link,
    pub(super) color: Color,
}

impl<T> Node<T> {
    /// Creates a red leaf: both children point at the Sentinel.
    pub(super) const fn new_red(value: T) -> Self {
        Self {
            value,
            left: SENTINEL,
            right: SENTINEL,
            color: Color::Red,
        }
    }

    /// Creates a black leaf, used for the first node of an empty tree.
    pub(super) const fn new_black(value: T) -> Self {
        Self {
            value,
            left: SENTINEL,
            right: SENTINEL,
            color: Color::Black,
        }
    }

    #[inline]
    pub(super) const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(super) const fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// =============================================================================
// Read-only Node View
// =============================================================================

/// A read-only view of one node of a [`RedBlackTree`].
///
/// Obtained through [`RedBlackTree::root`]; children are reached with
/// [`NodeRef::left`] and [`NodeRef::right`], which return `None` where the
/// tree holds the Sentinel.
///
/// # Examples
///
/// ```rust
/// use redblack::{Color, RedBlackTree};
///
/// let tree = RedBlackTree::from_values([10, 20, 30]);
/// let root = tree.root().unwrap();
/// assert_eq!(*root.value(), 20);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|node| *node.value()), Some(10));
/// assert_eq!(root.right().map(|node| node.color()), Some(Color::Red));
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a RedBlackTree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(super) const fn new(tree: &'a RedBlackTree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id]
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The color of this node.
    #[must_use]
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// The left child, or `None` for the Sentinel.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.node().left.node().map(|id| Self::new(self.tree, id))
    }

    /// The right child, or `None` for the Sentinel.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.node().right.node().map(|id| Self::new(self.tree, id))
    }

    /// Returns `true` if both children are the Sentinel.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_sentinel() && node.right.is_sentinel()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("value", self.value())
            .field("color", &self.color())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
