use std::fmt;

use crate::error::InvariantError;
use crate::types::default_comparator;

use super::avl_tree_iterator::AvlTreeIterator;
use super::events::RebalanceObserver;
use super::types::AvlNode;
use super::util::{assert_avl_tree, first, height, insert, last, levels, print};

/// Height-balanced binary search tree.
///
/// Values live in an arena owned by the tree; children are linked by arena
/// index. Equal values are kept (the tree is a multiset) and sit to the
/// right of each other in insertion order.
///
/// The comparator must describe a consistent total order over `T`. A
/// comparator that contradicts itself leaves the tree's ordering undefined;
/// it is not detected at insertion time.
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    arena: Vec<AvlNode<T>>,
    observer: Option<Box<dyn RebalanceObserver<T>>>,
}

impl<T> AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for AvlTree<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            arena: Vec::new(),
            observer: None,
        }
    }

    /// Installs `observer`, to be notified of every imbalance and rotation.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: RebalanceObserver<T> + 'static,
    {
        self.set_observer(observer);
        self
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: RebalanceObserver<T> + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    fn push_node(&mut self, value: T) -> u32 {
        self.arena.push(AvlNode::new(value));
        (self.arena.len() - 1) as u32
    }

    /// Inserts `value`, rebalancing on the way back up.
    pub fn insert(&mut self, value: T) {
        let node = self.push_node(value);
        let observer = self
            .observer
            .as_mut()
            .map(|o| o.as_mut() as &mut dyn RebalanceObserver<T>);
        self.root = Some(insert(
            self.arena.as_mut_slice(),
            self.root,
            node,
            &self.comparator,
            observer,
        ));
        self.size += 1;
    }

    /// Values in ascending order, duplicates included.
    pub fn in_order_traverse(&self) -> AvlTreeIterator<'_, T> {
        AvlTreeIterator::new(&self.arena, self.root, self.size)
    }

    pub fn iter(&self) -> AvlTreeIterator<'_, T> {
        self.in_order_traverse()
    }

    pub fn for_each<G: FnMut(&T)>(&self, f: G) {
        self.iter().for_each(f);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Node stored at arena index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not an index handed out by this tree.
    pub fn node(&self, idx: u32) -> &AvlNode<T> {
        &self.arena[idx as usize]
    }

    pub fn value(&self, idx: u32) -> &T {
        &self.node(idx).v
    }

    /// Smallest value.
    pub fn first(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| self.value(i))
    }

    /// Largest value; the last inserted one among equals.
    pub fn last(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| self.value(i))
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        assert_avl_tree(&self.arena, self.root, self.size, &self.comparator)
    }

    /// Nested structural dump, one node per line.
    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        print(&self.arena, self.root, "")
    }

    /// Root line followed by one line per inner node listing its children.
    pub fn levels(&self) -> String
    where
        T: fmt::Display,
    {
        levels(&self.arena, self.root)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = AvlTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_traverse()
    }
}

/// Every node in order, formatted as `value\tHEIGHT : height`.
impl<T, C> fmt::Display for AvlTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(i) = curr {
                stack.push(i);
                curr = self.arena[i as usize].l;
            }
            let Some(i) = stack.pop() else {
                return Ok(());
            };
            let node = &self.arena[i as usize];
            writeln!(f, "{node}")?;
            curr = node.r;
        }
    }
}
