use std::fmt::{Debug, Display, Write};

use tracing::trace;

use crate::error::InvariantError;
use crate::types::{Node, Side, ValueNode};

use super::events::{ImbalanceCase, RebalanceEvent, RebalanceObserver, RotationDirection};
use super::types::AvlNodeLike;

/// Observer slot threaded through the insertion recursion.
pub type ObserverSlot<'a, V> = Option<&'a mut dyn RebalanceObserver<V>>;

#[inline]
fn l<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
fn r<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
fn set_l<N: AvlNodeLike>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<N: AvlNodeLike>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

#[inline]
fn child<N: AvlNodeLike>(arena: &[N], i: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => l(arena, i),
        Side::Right => r(arena, i),
    }
}

/// Cached height of an optional subtree, 0 when absent.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> usize {
    node.map_or(0, |i| arena[i as usize].height())
}

/// Recomputes the cached height of `i` from its children.
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let h = 1 + height(arena, l(arena, i)).max(height(arena, r(arena, i)));
    arena[i as usize].set_height(h);
}

/// Side whose subtree is more than one level taller than the other.
pub fn imbalance<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<Side> {
    let lh = height(arena, l(arena, i));
    let rh = height(arena, r(arena, i));
    if lh.abs_diff(rh) <= 1 {
        None
    } else if lh > rh {
        Some(Side::Left)
    } else {
        Some(Side::Right)
    }
}

/// Side whose subtree is strictly taller, `None` on a tie.
pub fn heavier_side<N: AvlNodeLike>(arena: &[N], i: u32) -> Option<Side> {
    let lh = height(arena, l(arena, i));
    let rh = height(arena, r(arena, i));
    match lh.cmp(&rh) {
        std::cmp::Ordering::Greater => Some(Side::Left),
        std::cmp::Ordering::Less => Some(Side::Right),
        std::cmp::Ordering::Equal => None,
    }
}

fn emit<V>(observer: &mut ObserverSlot<'_, V>, event: RebalanceEvent<'_, V>) {
    if let Some(o) = observer {
        o.on_event(&event);
    }
}

/// Right rotation at `n` around its left child `nl`. Returns the new
/// subtree root (`nl`); the caller re-links it into `n`'s old slot.
///
/// ```text
///        n            nl
///       / \          /  \
///      nl  c   ->   a    n
///     /  \              / \
///    a    b            b   c
/// ```
fn rotate_right<N: AvlNodeLike>(
    arena: &mut [N],
    n: u32,
    nl: u32,
    observer: &mut ObserverSlot<'_, N::Value>,
) -> u32 {
    trace!(target: "balanced_trees::avl", node = n, child = nl, "rotate right");
    emit(
        observer,
        RebalanceEvent::Rotation {
            direction: RotationDirection::Right,
            pivot: arena[n as usize].value(),
        },
    );

    let nlr = r(arena, nl);
    set_l(arena, n, nlr);
    set_r(arena, nl, Some(n));
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Mirror of [`rotate_right`]: `nr` takes `n`'s place and `n` becomes its
/// left child, adopting `nr`'s former left subtree.
fn rotate_left<N: AvlNodeLike>(
    arena: &mut [N],
    n: u32,
    nr: u32,
    observer: &mut ObserverSlot<'_, N::Value>,
) -> u32 {
    trace!(target: "balanced_trees::avl", node = n, child = nr, "rotate left");
    emit(
        observer,
        RebalanceEvent::Rotation {
            direction: RotationDirection::Left,
            pivot: arena[n as usize].value(),
        },
    );

    let nrl = l(arena, nr);
    set_r(arena, n, nrl);
    set_l(arena, nr, Some(n));
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Restores the balance of `n` after one of its subtrees grew. Expects the
/// cached height of `n` to be current. Returns the root of the subtree that
/// now occupies `n`'s slot.
fn rebalance<N: AvlNodeLike>(
    arena: &mut [N],
    n: u32,
    observer: &mut ObserverSlot<'_, N::Value>,
) -> u32 {
    let Some(side) = imbalance(arena, n) else {
        return n;
    };
    let Some(c) = child(arena, n, side) else {
        return n;
    };
    // A tie in the taller child cannot follow an insertion; treat it as the
    // outer case, which a single rotation fixes.
    let case = ImbalanceCase::new(side, heavier_side(arena, c).unwrap_or(side));

    trace!(
        target: "balanced_trees::avl",
        node = n,
        height = arena[n as usize].height(),
        ?case,
        "imbalance"
    );
    emit(
        observer,
        RebalanceEvent::Imbalance {
            pivot: arena[n as usize].value(),
            case,
        },
    );

    match case {
        ImbalanceCase::LeftLeft => rotate_right(arena, n, c, observer),
        ImbalanceCase::RightRight => rotate_left(arena, n, c, observer),
        ImbalanceCase::LeftRight => {
            let Some(g) = r(arena, c) else {
                return n;
            };
            let top = rotate_left(arena, c, g, observer);
            set_l(arena, n, Some(top));
            rotate_right(arena, n, top, observer)
        }
        ImbalanceCase::RightLeft => {
            let Some(g) = l(arena, c) else {
                return n;
            };
            let top = rotate_right(arena, c, g, observer);
            set_r(arena, n, Some(top));
            rotate_left(arena, n, top, observer)
        }
    }
}

fn insert_at<N, C>(
    arena: &mut [N],
    slot: Option<u32>,
    n: u32,
    comparator: &C,
    observer: &mut ObserverSlot<'_, N::Value>,
) -> u32
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    let Some(curr) = slot else {
        return n;
    };

    if arena[curr as usize].less_than_by(arena[n as usize].value(), comparator) {
        let sub = insert_at(arena, l(arena, curr), n, comparator, observer);
        set_l(arena, curr, Some(sub));
    } else {
        let sub = insert_at(arena, r(arena, curr), n, comparator, observer);
        set_r(arena, curr, Some(sub));
    }

    update_height(arena, curr);
    rebalance(arena, curr, observer)
}

/// Links the detached leaf `n` into the tree rooted at `root` and rebalances
/// every ancestor on the way back up. Returns the new root.
///
/// Values comparing equal to an existing value are placed in its right
/// subtree, so the tree behaves as a multiset.
pub fn insert<N, C>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    comparator: &C,
    mut observer: ObserverSlot<'_, N::Value>,
) -> u32
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    insert_at(arena, root, n, comparator, &mut observer)
}

/// Leftmost node of the subtree.
pub fn first<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(next) = l(arena, curr) {
        curr = next;
    }
    Some(curr)
}

/// Rightmost node of the subtree.
pub fn last<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(next) = r(arena, curr) {
        curr = next;
    }
    Some(curr)
}

struct Validator<'a, N: AvlNodeLike, C> {
    arena: &'a [N],
    comparator: &'a C,
    seen: Vec<bool>,
    count: usize,
}

impl<'a, N, C> Validator<'a, N, C>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    /// Checks the subtree at `i`, whose values must all lie within
    /// `lo..=hi`. Returns its real height.
    fn check(
        &mut self,
        i: u32,
        lo: Option<&'a N::Value>,
        hi: Option<&'a N::Value>,
    ) -> Result<usize, InvariantError> {
        let arena = self.arena;
        let Some(node) = arena.get(i as usize) else {
            return Err(InvariantError::DanglingLink { index: i });
        };
        if std::mem::replace(&mut self.seen[i as usize], true) {
            return Err(InvariantError::SharedNode { index: i });
        }
        self.count += 1;

        let v = node.value();
        let below_lo = lo.is_some_and(|lo| (self.comparator)(v, lo) < 0);
        let above_hi = hi.is_some_and(|hi| (self.comparator)(v, hi) > 0);
        if below_lo || above_hi {
            return Err(InvariantError::OrderViolated { index: i });
        }

        let left = match node.l() {
            Some(c) => self.check(c, lo, Some(v))?,
            None => 0,
        };
        let right = match node.r() {
            Some(c) => self.check(c, Some(v), hi)?,
            None => 0,
        };

        let expected = 1 + left.max(right);
        if node.height() != expected {
            return Err(InvariantError::HeightMismatch {
                index: i,
                expected,
                actual: node.height(),
            });
        }
        if left.abs_diff(right) > 1 {
            return Err(InvariantError::Unbalanced {
                index: i,
                left,
                right,
            });
        }
        Ok(expected)
    }
}

/// Verifies cached heights, AVL balance, ordering, single ownership of every
/// node and that `size` nodes are reachable.
///
/// Insertion sends equal values right, but a later rotation can lift one of
/// them above its equals, so ordering is checked as `left <= node <= right`.
pub fn assert_avl_tree<N, C>(
    arena: &[N],
    root: Option<u32>,
    size: usize,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> i32,
{
    let mut validator = Validator {
        arena,
        comparator,
        seen: vec![false; arena.len()],
        count: 0,
    };
    if let Some(root) = root {
        validator.check(root, None, None)?;
    }
    if validator.count != size {
        return Err(InvariantError::SizeMismatch {
            expected: size,
            actual: validator.count,
        });
    }
    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Value: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                n.value()
            )
        }
    }
}

fn write_node<N>(out: &mut String, n: &N)
where
    N: AvlNodeLike,
    N::Value: Display,
{
    let _ = write!(out, "{}\tHEIGHT : {}", n.value(), n.height());
}

fn write_levels<N>(arena: &[N], i: u32, level: usize, out: &mut String)
where
    N: AvlNodeLike,
    N::Value: Display,
{
    let n = &arena[i as usize];
    if n.is_leaf() {
        return;
    }

    let _ = write!(out, "LVL {level}{}", if level < 10 { "  : " } else { " : " });
    if let Some(c) = n.l() {
        write_node(out, &arena[c as usize]);
    }
    if let Some(c) = n.r() {
        if n.l().is_some() {
            out.push_str(", ");
        }
        write_node(out, &arena[c as usize]);
    }
    out.push('\n');

    if let Some(c) = n.l() {
        write_levels(arena, c, level + 1, out);
    }
    if let Some(c) = n.r() {
        write_levels(arena, c, level + 1, out);
    }
}

/// Level-by-level dump: the root, then each inner node's children in
/// pre-order, one line per inner node.
pub fn levels<N>(arena: &[N], root: Option<u32>) -> String
where
    N: AvlNodeLike,
    N::Value: Display,
{
    let mut out = String::new();
    let Some(root) = root else {
        return out;
    };
    out.push_str("ROOT   : ");
    write_node(&mut out, &arena[root as usize]);
    out.push('\n');
    write_levels(arena, root, 1, &mut out);
    out
}
