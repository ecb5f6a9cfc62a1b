//! AVL tree with cached subtree heights.

#[path = "AvlTree.rs"]
pub mod avl_tree;
#[path = "AvlTreeIterator.rs"]
pub mod avl_tree_iterator;
pub mod events;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use avl_tree_iterator::AvlTreeIterator;
pub use events::{ImbalanceCase, RebalanceEvent, RebalanceObserver, RotationDirection};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, heavier_side, height, imbalance, insert, levels, print, update_height,
};
