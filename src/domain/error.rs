//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors raised while turning tree notation into a [`TreeArena`].
///
/// The generators themselves never fail.
///
/// [`TreeArena`]: crate::domain::TreeArena
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty tree notation")]
    EmptyTree,

    #[error("invalid tree notation near '{fragment}': {reason}")]
    InvalidNotation { fragment: String, reason: String },

    #[error("node {0} has more than one child list")]
    DuplicateEntry(u64),

    #[error("node {node} listed under parents {first} and {second}")]
    MultipleParents { node: u64, first: u64, second: u64 },

    #[error("multiple roots found: {0:?}")]
    MultipleRoots(Vec<u64>),

    #[error("cycle detected in tree at node: {0}")]
    CycleDetected(u64),
}

/// Result type for tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
