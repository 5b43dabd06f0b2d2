//! # redblack
//!
//! A self-balancing ordered container built on a red-black tree.
//!
//! ## Overview
//!
//! [`RedBlackTree`] stores comparable values and keeps them in ascending
//! order. Insertion and deletion restore the red-black invariants with O(1)
//! local rotations and recoloring, so the height stays O(log N).
//!
//! - O(log N) `add`
//! - O(log N) `delete`
//! - O(log N) `contains`, `min`, `max`
//! - O(N) `sort` and full iteration, with O(log N) auxiliary space
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! index, so the whole crate is free of `unsafe`.
//!
//! ## Duplicates
//!
//! The tree is a set by default: adding a value equal to one already stored
//! is rejected. [`DuplicatePolicy::Allow`] turns it into a multiset.
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let mut tree = RedBlackTree::from_values([50, 30, 70, 20, 40]);
//! assert!(tree.delete(&30));
//! assert!(!tree.delete(&999));
//! assert_eq!(tree.sort(), vec![20, 40, 50, 70]);
//! assert!(tree.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
///
/// let tree: RedBlackTree<i32> = RedBlackTree::new();
/// assert_eq!(tree.policy(), DuplicatePolicy::Reject);
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::{Color, DuplicatePolicy, IntoIter, InvariantViolation, Iter, NodeRef, RedBlackTree};
