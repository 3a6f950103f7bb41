//! Errors produced by the contact trees.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while mutating a tree.
///
/// None of these are transient: they signal either misuse of the node-level API or that the
/// entry asked for is legitimately absent. Lookups never produce one of these, absence is an
/// `Option` there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation that needs a present node was handed an absent one.
    #[error("cannot insert an entry into an absent node")]
    NilTarget,

    /// The key asked to be deleted is not in the tree.
    #[error("entry to be deleted does not exist in tree: {key}")]
    NotFound {
        /// The key that was searched for.
        key: String,
    },

    /// Delete was called on a tree with no root.
    #[error("cannot delete from an empty tree")]
    EmptyTree,

    /// A relink was attempted through a parent link that holds no node.
    #[error("cannot relink an absent node")]
    InvalidLink,
}

impl Error {
    /// Create a not found error for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::NotFound { key: key.into() }
    }
}
