//! Recursive tree operations over the node arena.
//!
//! Every mutating operation descends from a subtree root, does its work at
//! the base case, and rebuilds cached heights and balance on the way back
//! up. Each recursive step returns the (possibly new) subtree root index and
//! the caller writes it into the correct parent slot; there is no separate
//! rebalance pass and no parent links.

use tracing::trace;

use crate::node::{balance_factor, recompute_height, AvlNode};

/// Allocate a node, reusing a recycled arena slot when one is available.
pub(crate) fn alloc<T>(arena: &mut Vec<AvlNode<T>>, free: &mut Vec<u32>, val: T) -> u32 {
    match free.pop() {
        Some(i) => {
            arena[i as usize] = AvlNode::new(val);
            i
        }
        None => {
            arena.push(AvlNode::new(val));
            (arena.len() - 1) as u32
        }
    }
}

/// Insert `val` into the subtree rooted at `node`, returning the new subtree
/// root. Inserting a value already present is a no-op: the recursion stops at
/// the matching node and nothing below it is touched.
pub fn insert_at<T, C>(
    arena: &mut Vec<AvlNode<T>>,
    free: &mut Vec<u32>,
    node: Option<u32>,
    val: T,
    cmp: &C,
) -> u32
where
    C: Fn(&T, &T) -> i32,
{
    let Some(i) = node else {
        return alloc(arena, free, val);
    };

    let c = cmp(&val, &arena[i as usize].val);
    if c == 0 {
        return i;
    }
    if c < 0 {
        let child = arena[i as usize].left;
        let l = insert_at(arena, free, child, val, cmp);
        arena[i as usize].left = Some(l);
    } else {
        let child = arena[i as usize].right;
        let r = insert_at(arena, free, child, val, cmp);
        arena[i as usize].right = Some(r);
    }

    recompute_height(arena, i);
    rebalance(arena, i)
}

/// Remove `val` from the subtree rooted at `node`, returning the new subtree
/// root. Absent values degenerate at an absent slot and unwind with the
/// structure unchanged.
pub fn remove_at<T, C>(
    arena: &mut Vec<AvlNode<T>>,
    free: &mut Vec<u32>,
    node: Option<u32>,
    val: &T,
    cmp: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let i = node?;

    let c = cmp(val, &arena[i as usize].val);
    if c < 0 {
        let child = arena[i as usize].left;
        let l = remove_at(arena, free, child, val, cmp);
        arena[i as usize].left = l;
    } else if c > 0 {
        let child = arena[i as usize].right;
        let r = remove_at(arena, free, child, val, cmp);
        arena[i as usize].right = r;
    } else {
        let (l, r) = (arena[i as usize].left, arena[i as usize].right);
        match (l, r) {
            (None, None) => {
                free.push(i);
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                free.push(i);
                return Some(child);
            }
            (Some(_), Some(right)) => {
                // Two children: structurally remove the in-order successor
                // (leftmost of the right subtree) and promote its value into
                // this node. The successor has no left child, so its removal
                // is the spliced one-child case, rebalanced on the unwind.
                let (new_right, succ) = take_leftmost(arena, right);
                arena[i as usize].right = new_right;
                swap_values(arena, i, succ);
                free.push(succ);
            }
        }
    }

    recompute_height(arena, i);
    Some(rebalance(arena, i))
}

/// Detach the leftmost node of the subtree rooted at `node`. Returns the new
/// subtree root and the detached index, whose value and links are left in
/// place for the caller to harvest. Heights and balance are restored on the
/// unwind exactly as a by-value removal of that node would.
fn take_leftmost<T>(arena: &mut [AvlNode<T>], node: u32) -> (Option<u32>, u32) {
    match arena[node as usize].left {
        None => (arena[node as usize].right, node),
        Some(l) => {
            let (new_l, taken) = take_leftmost(arena, l);
            arena[node as usize].left = new_l;
            recompute_height(arena, node);
            (Some(rebalance(arena, node)), taken)
        }
    }
}

/// Swap the payloads of two distinct arena slots without touching links.
fn swap_values<T>(arena: &mut [AvlNode<T>], a: u32, b: u32) {
    let (a, b) = (a as usize, b as usize);
    debug_assert_ne!(a, b);
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = arena.split_at_mut(hi);
    std::mem::swap(&mut head[lo].val, &mut tail[0].val);
}

/// Restore the AVL invariant at `i` after a child mutation, returning the
/// new subtree root. Exactly one of four cases applies; a balance factor
/// already in `-1..=1` returns the node unchanged.
pub fn rebalance<T>(arena: &mut [AvlNode<T>], i: u32) -> u32 {
    let bf = balance_factor(arena, Some(i));
    let left_bf = balance_factor(arena, arena[i as usize].left);
    let right_bf = balance_factor(arena, arena[i as usize].right);

    // left-left
    if bf < -1 && left_bf <= 0 {
        return rotate_right(arena, i);
    }
    // right-right
    if bf > 1 && right_bf >= 0 {
        return rotate_left(arena, i);
    }
    // left-right
    if bf < -1 && left_bf > 0 {
        return rotate_left_right(arena, i);
    }
    // right-left
    if bf > 1 && right_bf < 0 {
        return rotate_right_left(arena, i);
    }

    i
}

fn rotate_right<T>(arena: &mut [AvlNode<T>], root: u32) -> u32 {
    trace!(node = root, "rotate_right");
    let new_root = arena[root as usize]
        .left
        .expect("right rotation requires a left child");
    arena[root as usize].left = arena[new_root as usize].right;
    arena[new_root as usize].right = Some(root);
    recompute_height(arena, root);
    recompute_height(arena, new_root);
    new_root
}

fn rotate_left<T>(arena: &mut [AvlNode<T>], root: u32) -> u32 {
    trace!(node = root, "rotate_left");
    let new_root = arena[root as usize]
        .right
        .expect("left rotation requires a right child");
    arena[root as usize].right = arena[new_root as usize].left;
    arena[new_root as usize].left = Some(root);
    recompute_height(arena, root);
    recompute_height(arena, new_root);
    new_root
}

fn rotate_left_right<T>(arena: &mut [AvlNode<T>], root: u32) -> u32 {
    trace!(node = root, "rotate_left_right");
    let l = arena[root as usize]
        .left
        .expect("left-right rotation requires a left child");
    arena[root as usize].left = Some(rotate_left(arena, l));
    rotate_right(arena, root)
}

fn rotate_right_left<T>(arena: &mut [AvlNode<T>], root: u32) -> u32 {
    trace!(node = root, "rotate_right_left");
    let r = arena[root as usize]
        .right
        .expect("right-left rotation requires a right child");
    arena[root as usize].right = Some(rotate_right(arena, r));
    rotate_left(arena, root)
}

/// Read-only recursive lookup.
pub fn get_at<'a, T, C>(
    arena: &'a [AvlNode<T>],
    node: Option<u32>,
    val: &T,
    cmp: &C,
) -> Option<&'a T>
where
    C: Fn(&T, &T) -> i32,
{
    let i = node?;
    let n = &arena[i as usize];
    let c = cmp(val, &n.val);
    if c < 0 {
        get_at(arena, n.left, val, cmp)
    } else if c > 0 {
        get_at(arena, n.right, val, cmp)
    } else {
        Some(&n.val)
    }
}

/// In-order traversal (left, self, right).
pub fn for_each_at<T, F>(arena: &[AvlNode<T>], node: Option<u32>, f: &mut F)
where
    F: FnMut(&T),
{
    let Some(i) = node else {
        return;
    };
    for_each_at(arena, arena[i as usize].left, f);
    f(&arena[i as usize].val);
    for_each_at(arena, arena[i as usize].right, f);
}

/// Independent structural checker: recomputes every height from scratch,
/// verifies the cached value, the AVL bound, and strict in-order ordering
/// under `cmp`.
pub fn assert_avl<T, C>(arena: &[AvlNode<T>], root: Option<u32>, cmp: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    fn check_node<T>(arena: &[AvlNode<T>], node: Option<u32>) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(-1);
        };
        let n = &arena[i as usize];
        let lh = check_node(arena, n.left)?;
        let rh = check_node(arena, n.right)?;
        let expected = 1 + lh.max(rh);
        if n.height != expected {
            return Err(format!(
                "height mismatch at node {i}: cached {}, computed {expected}",
                n.height
            ));
        }
        let bf = rh - lh;
        if !(-1..=1).contains(&bf) {
            return Err(format!("balance factor {bf} out of range at node {i}"));
        }
        Ok(expected)
    }

    fn collect_in_order<T>(arena: &[AvlNode<T>], node: Option<u32>, out: &mut Vec<u32>) {
        let Some(i) = node else {
            return;
        };
        collect_in_order(arena, arena[i as usize].left, out);
        out.push(i);
        collect_in_order(arena, arena[i as usize].right, out);
    }

    check_node(arena, root)?;

    let mut order = Vec::new();
    collect_in_order(arena, root, &mut order);
    for w in order.windows(2) {
        let (a, b) = (w[0] as usize, w[1] as usize);
        if cmp(&arena[a].val, &arena[b].val) >= 0 {
            return Err(format!(
                "in-order values not strictly increasing between nodes {} and {}",
                w[0], w[1]
            ));
        }
    }

    Ok(())
}
