//! In-order iterators.
//!
//! Both iterators walk the tree without recursion: the stack holds the
//! ancestors whose value has not been yielded yet, so auxiliary space is
//! bounded by the tree height.

use std::iter::FusedIterator;

use generational_arena::Arena;

use super::node::{Link, Node};
use super::{Ancestors, RedBlackTree};

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over the values of a [`RedBlackTree`] in ascending order.
///
/// Created by [`RedBlackTree::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    stack: Ancestors,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a RedBlackTree<T>) -> Self {
        let mut iter = Self {
            nodes: &tree.nodes,
            stack: Ancestors::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.head);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link) {
        while let Link::Node(id) = link {
            self.stack.push(id);
            link = self.nodes[id].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the values of a [`RedBlackTree`] in ascending
/// order.
///
/// Each node is released from the arena as its value is yielded. Created by
/// the [`IntoIterator`] implementation of [`RedBlackTree`].
pub struct IntoIter<T> {
    nodes: Arena<Node<T>>,
    stack: Ancestors,
}

impl<T> IntoIter<T> {
    pub(super) fn new(tree: RedBlackTree<T>) -> Self {
        let mut iter = Self {
            nodes: tree.nodes,
            stack: Ancestors::new(),
        };
        iter.push_left_spine(tree.head);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link) {
        while let Link::Node(id) = link {
            self.stack.push(id);
            link = self.nodes[id].left;
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // The left subtree is already gone; the right one is still intact.
        let node = self.nodes.remove(id)?;
        self.push_left_spine(node.right);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

static_assertions::assert_impl_all!(Iter<'static, i32>: Send, Sync, ExactSizeIterator);
static_assertions::assert_impl_all!(IntoIter<String>: Send, Sync, ExactSizeIterator);

// =============================================================================
// Tests
// =============================================================================
