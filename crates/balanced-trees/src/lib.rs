//! Arena-backed AVL tree.
//!
//! [`AvlTree`] keeps every subtree's height cached in its root node and
//! restores the AVL balance after each insertion with single or double
//! rotations. Nodes live in a `Vec` owned by the tree; child links are
//! `Option<u32>` indices into it, so rotations only rewrite links and
//! dropping the tree never recurses.
//!
//! Equal values are all kept, each new one to the right of the existing
//! ones, so the tree is an ordered multiset.
//!
//! ```
//! use balanced_trees::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for v in [50, 45, 15, 17, 23, 18] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.size(), 6);
//! let sorted: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(sorted, vec![15, 17, 18, 23, 45, 50]);
//! tree.assert_valid().unwrap();
//! ```
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ValueNode`] link traits, [`Side`], default comparator |
//! [`avl::types`] | [`AvlNode`] and [`AvlNodeLike`] |
//! [`avl::util`] | height bookkeeping, rotations, `insert`, validation, printers |
//! [`avl::events`] | rebalance events and [`RebalanceObserver`] |
//! [`avl::avl_tree`] | [`AvlTree`] |
//! [`error`] | [`InvariantError`] |

pub mod avl;
pub mod error;
pub mod types;

pub use avl::{
    AvlNode, AvlNodeLike, AvlTree, AvlTreeIterator, ImbalanceCase, RebalanceEvent,
    RebalanceObserver, RotationDirection,
};
pub use error::InvariantError;
pub use types::{default_comparator, Node, Side, ValueNode};
