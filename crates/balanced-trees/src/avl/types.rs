use std::fmt;

use crate::types::{Node, ValueNode};

/// AVL tree node with a cached subtree height.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub height: usize,
}

impl<T> AvlNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            l: None,
            r: None,
            v,
            height: 1,
        }
    }
}

impl<T> Node for AvlNode<T> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ValueNode for AvlNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.v
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: ValueNode {
    fn height(&self) -> usize;
    fn set_height(&mut self, height: usize);
}

impl<T> AvlNodeLike for AvlNode<T> {
    fn height(&self) -> usize {
        self.height
    }

    fn set_height(&mut self, height: usize) {
        self.height = height;
    }
}

impl<T: fmt::Display> fmt::Display for AvlNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\tHEIGHT : {}", self.v, self.height)
    }
}
