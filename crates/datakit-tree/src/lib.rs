//! Arena-backed self-balancing AVL search tree.
//!
//! Nodes live in a `Vec` arena and all "pointers" are `Option<u32>` indices,
//! so the structure needs no unsafe code and no reference counting. The tree
//! caches a height per node (`-1` for an absent node), keeps the balance
//! factor `height(right) - height(left)` within `-1..=1` everywhere via four
//! rotation cases, and rebalances bottom-up on the unwind of each recursive
//! insert/delete. There are no parent links; every recursive step returns
//! the (possibly new) subtree root for its caller to re-attach.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`AvlNode`] and the height / balance-factor accessors |
//! | [`ops`] | Recursive insert, delete, lookup, traversal, rotations, and the structural validator |
//! | [`tree`] | [`AvlTree`], the owning wrapper with a comparator fixed at construction |
//! | [`print`] | String renderings (in-order list and per-node bf/height dump) |
//!
//! Single-threaded by design: operations are synchronous, bounded by tree
//! height, and must be externally serialized for shared use.

pub mod node;
pub mod ops;
pub mod print;
pub mod tree;

pub use node::{balance_factor, height, AvlNode};
pub use ops::assert_avl;
pub use tree::AvlTree;
