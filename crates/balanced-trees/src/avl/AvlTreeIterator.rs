use std::iter::FusedIterator;

use crate::types::{Node, ValueNode};

use super::types::AvlNode;

/// In-order (ascending) iterator over an [`AvlTree`](super::AvlTree).
///
/// Walks the arena with an explicit stack bounded by the tree height and
/// never mutates the tree, so a new iterator always starts from the smallest
/// value again.
#[derive(Clone, Debug)]
pub struct AvlTreeIterator<'a, T> {
    arena: &'a [AvlNode<T>],
    stack: Vec<u32>,
    remaining: usize,
}

impl<'a, T> AvlTreeIterator<'a, T> {
    pub(crate) fn new(arena: &'a [AvlNode<T>], root: Option<u32>, size: usize) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
            remaining: size,
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = self.arena[i as usize].l();
        }
    }
}

impl<'a, T> Iterator for AvlTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[i as usize];
        self.push_left(node.r());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for AvlTreeIterator<'_, T> {}

impl<T> FusedIterator for AvlTreeIterator<'_, T> {}
