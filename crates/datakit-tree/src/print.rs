//! String renderings of a tree, decoupled from any output sink.

use std::fmt::Debug;
use std::fmt::Write;

use crate::node::{balance_factor, AvlNode};
use crate::ops::for_each_at;

/// In-order values as `"[a, b, c]"`; `"[]"` for an empty tree.
pub fn print_in_order<T: Debug>(arena: &[AvlNode<T>], root: Option<u32>) -> String {
    let mut out = String::from("[");
    let mut first = true;
    for_each_at(arena, root, &mut |val| {
        if !first {
            out.push_str(", ");
        }
        let _ = write!(out, "{val:?}");
        first = false;
    });
    out.push(']');
    out
}

/// Debug rendering: one node per line as `value [bf=…, h=…]`, children
/// labelled and indented by depth.
pub fn print<T: Debug>(arena: &[AvlNode<T>], root: Option<u32>) -> String {
    print_node(arena, root, "")
}

fn print_node<T: Debug>(arena: &[AvlNode<T>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let child_tab = format!("{tab}  ");
            let left = print_node(arena, n.left, &child_tab);
            let right = print_node(arena, n.right, &child_tab);
            format!(
                "{:?} [bf={}, h={}]\n{tab}L={left}\n{tab}R={right}",
                n.val,
                balance_factor(arena, Some(i)),
                n.height,
            )
        }
    }
}
