//! Structural validation errors.

/// A broken tree invariant found by [`crate::avl::AvlTree::assert_valid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("cached height of node {index} is {actual}, expected {expected}")]
    HeightMismatch {
        index: u32,
        expected: usize,
        actual: usize,
    },
    #[error("node {index} is unbalanced: left height {left}, right height {right}")]
    Unbalanced {
        index: u32,
        left: usize,
        right: usize,
    },
    #[error("node {index} is out of order with respect to its ancestors")]
    OrderViolated { index: u32 },
    #[error("node {index} is linked from more than one parent")]
    SharedNode { index: u32 },
    #[error("node {index} is outside the arena")]
    DanglingLink { index: u32 },
    #[error("tree holds {actual} reachable values but size is {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}
