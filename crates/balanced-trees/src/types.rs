//! Shared node and ordering definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena owned by the tree. Each child
//! "pointer" is an `Option<u32>` index into that arena, so moving a subtree
//! is a matter of rewriting one link.

/// Child links (`l`, `r`) of an arena node.
///
/// Trees built on this crate are owned strictly top-down: an index appears
/// in at most one parent's `l`/`r` slot, and no node stores a parent link.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    /// `true` when neither child link is set.
    fn is_leaf(&self) -> bool {
        self.l().is_none() && self.r().is_none()
    }
}

/// Value-carrying node.
pub trait ValueNode: Node {
    type Value;

    fn value(&self) -> &Self::Value;

    /// `true` when `candidate` orders strictly before this node's value,
    /// i.e. it belongs in the left subtree. Equal values go right.
    fn less_than(&self, candidate: &Self::Value) -> bool
    where
        Self::Value: PartialOrd,
    {
        *candidate < *self.value()
    }

    /// [`ValueNode::less_than`] under a custom comparator.
    fn less_than_by<C>(&self, candidate: &Self::Value, comparator: &C) -> bool
    where
        C: Fn(&Self::Value, &Self::Value) -> i32,
    {
        comparator(candidate, self.value()) < 0
    }
}

/// Default comparator derived from [`PartialOrd`].
///
/// Comparators return a negative number when `a < b`, zero when equal and a
/// positive number when `a > b`. They must describe a consistent total order;
/// trees do not detect a comparator that contradicts itself.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Which child of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
