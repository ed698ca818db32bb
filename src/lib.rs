//! An ordered dynamic set backed by a Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item greater than its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The [`Tree`] here does not rebalance itself on every mutation. Inserting
//! already-sorted input degrades it into a linked list with `O(n)` lookups.
//! Balance is instead restored on demand with [`Tree::rebalance`], which
//! rebuilds the tree at minimal height, and [`Tree::is_balanced`] reports
//! whether a rebuild is worth it.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree: Tree<i32> = (1..=7).collect();
//!
//! // Sorted insertion produces a degenerate chain.
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//!
//! // The contents are untouched.
//! let items: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(items, [1, 2, 3, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod iter;
mod node;
mod tree;

pub mod error;

#[cfg(test)]
mod test;

pub use error::{TreeError, TreeResult};
pub use iter::{Inorder, Preorder};
pub use tree::Tree;
