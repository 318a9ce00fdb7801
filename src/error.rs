//! Errors reported when a tree fails a structural self-check.

use std::result;
use thiserror::Error as ThisError;

/// A violated structural invariant of a splay tree.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("root node has a parent link")]
    RootHasParent,

    #[error("child node does not link back to its parent")]
    BrokenParentLink,

    #[error("keys are not in strictly ascending order")]
    OutOfOrder,

    #[error("{reachable} nodes are reachable from the root but the tree holds {len}")]
    LengthMismatch { reachable: usize, len: usize },
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::OutOfOrder.to_string(), "keys are not in strictly ascending order");
        assert_eq!(
            Error::LengthMismatch { reachable: 2, len: 3 }.to_string(),
            "2 nodes are reachable from the root but the tree holds 3",
        );
    }
}
