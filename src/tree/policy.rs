//! Duplicate-handling configuration.

use std::fmt;

/// How a [`RedBlackTree`](super::RedBlackTree) treats a value that compares
/// equal to one already stored.
///
/// # Examples
///
/// ```rust
/// use redblack::{DuplicatePolicy, RedBlackTree};
///
/// let mut set = RedBlackTree::new();
/// assert!(set.add(1));
/// assert!(!set.add(1));
/// assert_eq!(set.len(), 1);
///
/// let mut multiset = RedBlackTree::with_policy(DuplicatePolicy::Allow);
/// assert!(multiset.add(1));
/// assert!(multiset.add(1));
/// assert_eq!(multiset.sort(), vec![1, 1]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum DuplicatePolicy {
    /// Set semantics. `add` of an equal value is refused and returns `false`.
    #[default]
    Reject,
    /// Multiset semantics. Equal values are kept; a newly added duplicate is
    /// ordered after every equal value already in the tree, and `delete`
    /// removes one occurrence at a time.
    Allow,
}

impl DuplicatePolicy {
    /// Returns `true` if equal values may be stored more than once.
    #[inline]
    #[must_use]
    pub const fn allows_duplicates(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(formatter, "reject duplicates"),
            Self::Allow => write!(formatter, "allow duplicates"),
        }
    }
}
