//! Rebalance notifications.
//!
//! Every imbalance and every single rotation performed by
//! [`insert`](super::util::insert) is emitted as a `tracing` event under the
//! `balanced_trees::avl` target. Callers that want the events in-process can
//! also install a [`RebalanceObserver`] on the tree.

use crate::types::Side;

/// The four AVL imbalance cases, named after the path from the unbalanced
/// node down to the taller grandchild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImbalanceCase {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl ImbalanceCase {
    pub fn new(side: Side, child_side: Side) -> Self {
        match (side, child_side) {
            (Side::Left, Side::Left) => ImbalanceCase::LeftLeft,
            (Side::Left, Side::Right) => ImbalanceCase::LeftRight,
            (Side::Right, Side::Right) => ImbalanceCase::RightRight,
            (Side::Right, Side::Left) => ImbalanceCase::RightLeft,
        }
    }

    /// The over-tall side of the unbalanced node.
    pub fn side(self) -> Side {
        match self {
            ImbalanceCase::LeftLeft | ImbalanceCase::LeftRight => Side::Left,
            ImbalanceCase::RightRight | ImbalanceCase::RightLeft => Side::Right,
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, ImbalanceCase::LeftRight | ImbalanceCase::RightLeft)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Left,
    Right,
}

/// A point of interest during rebalancing.
///
/// `pivot` borrows the value of the node the event is about: the unbalanced
/// node for [`RebalanceEvent::Imbalance`], and the node that moves down for
/// [`RebalanceEvent::Rotation`].
#[derive(Debug, PartialEq, Eq)]
pub enum RebalanceEvent<'a, T> {
    Imbalance { pivot: &'a T, case: ImbalanceCase },
    Rotation {
        direction: RotationDirection,
        pivot: &'a T,
    },
}

/// Hook invoked at rebalance points.
pub trait RebalanceObserver<T> {
    fn on_event(&mut self, event: &RebalanceEvent<'_, T>);
}

impl<T, F> RebalanceObserver<T> for F
where
    F: FnMut(&RebalanceEvent<'_, T>),
{
    fn on_event(&mut self, event: &RebalanceEvent<'_, T>) {
        self(event)
    }
}
