//! A Binary Search Tree (BST) that keeps itself balanced by rebuilding rather than rotating,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path from the root
//! `Node` to a leaf `Node`). When the height is `O(lg N)` the tree is said to be balanced.
//!
//! ## Median-split balancing
//!
//! Instead of rotating nodes on every mutation (like an AVL or red-black tree), this tree is
//! balanced on demand. A balanced tree is built from a sorted, deduplicated list of values by
//! always picking the middle element as the subtree root and recursing on both halves. Inserts
//! and deletes never rebalance, so callers that skew the tree call [`Tree::rebalance`] which
//! flattens the tree in order and builds it again.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new([5, 3, 8, 1, 4, 7, 9]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(5));
//!
//! for x in 10..20 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod demo;
pub mod error;
mod pretty;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{Node, Tree};
