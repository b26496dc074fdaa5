//! Errors returned by tree operations that have a precondition.
//!
//! Most operations on a [`Tree`][crate::Tree] are total: looking up or deleting a missing value
//! is not an error. Only operations that need at least one node, and the demo configuration,
//! can fail.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All the ways a tree operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The named operation needs at least one node but the tree was empty.
    #[error("`{0}` called on an empty tree")]
    EmptyTree(&'static str),

    /// A caller supplied an argument outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
