//! Error types for tree operations.
//!
//! Only [`Tree::remove`](crate::Tree::remove) can fail. Every other
//! operation signals absence with an `Option` or an empty result instead.

use thiserror::Error;

/// Errors returned by mutating tree operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The item handed to [`Tree::remove`](crate::Tree::remove) is not in
    /// the tree. The tree is left untouched.
    #[error("Item not found in tree")]
    ItemNotFound,
}

/// Convenience alias for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
