use std::fmt::Debug;

use crate::node::{height, AvlNode};
use crate::ops::{assert_avl, for_each_at, get_at, insert_at, remove_at};
use crate::print;

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Self-balancing AVL search tree over an arena of [`AvlNode`]s.
///
/// The comparator is fixed at construction: [`AvlTree::new`] installs the
/// natural order of `T: PartialOrd`, [`AvlTree::with_comparator`] accepts
/// any total order. Duplicate values are never stored.
pub struct AvlTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    arena: Vec<AvlNode<T>>,
    free: Vec<u32>,
    root: Option<u32>,
    comparator: C,
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
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Insert `val` if not already present; otherwise a no-op.
    pub fn insert(&mut self, val: T) {
        self.root = Some(insert_at(
            &mut self.arena,
            &mut self.free,
            self.root,
            val,
            &self.comparator,
        ));
    }

    /// Remove `val` if present; otherwise a no-op.
    pub fn delete(&mut self, val: &T) {
        self.root = remove_at(
            &mut self.arena,
            &mut self.free,
            self.root,
            val,
            &self.comparator,
        );
    }

    /// The stored value equal to `val` under the tree's comparator, or
    /// `None` if absent.
    pub fn get(&self, val: &T) -> Option<&T> {
        get_at(&self.arena, self.root, val, &self.comparator)
    }

    pub fn contains(&self, val: &T) -> bool {
        self.get(val).is_some()
    }

    /// Visit every value in order (left, self, right).
    pub fn for_each<F: FnMut(&T)>(&self, mut f: F) {
        for_each_at(&self.arena, self.root, &mut f);
    }

    pub fn size(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
    }

    /// Height of the whole tree; -1 when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[AvlNode<T>] {
        &self.arena
    }

    /// Check every structural invariant from scratch: cached heights, the
    /// AVL balance bound, and strict in-order ordering.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl(&self.arena, self.root, &self.comparator)
    }
}

impl<T, C> AvlTree<T, C>
where
    T: Debug,
    C: Fn(&T, &T) -> i32,
{
    /// In-order values as `"[a, b, c]"`.
    pub fn print_in_order(&self) -> String {
        print::print_in_order(&self.arena, self.root)
    }

    /// Tree rendering with each node's balance factor and cached height,
    /// children indented by depth.
    pub fn print(&self) -> String {
        print::print(&self.arena, self.root)
    }
}
