use datakit_tree::AvlTree;

const SEQ: [i32; 12] = [8, 3, 10, 6, 1, 14, 4, 7, 11, 9, 15, 0];

fn in_order(tree: &AvlTree<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    tree.for_each(|v| out.push(*v));
    out
}

fn build_seq() -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for v in SEQ {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }
    tree
}

#[test]
fn insert_sequence_yields_sorted_in_order() {
    let tree = build_seq();
    assert_eq!(in_order(&tree), vec![0, 1, 3, 4, 6, 7, 8, 9, 10, 11, 14, 15]);
    assert_eq!(tree.size(), 12);
    // 12 nodes fit in an AVL tree of height at most 4.
    assert!(tree.height() >= 3 && tree.height() <= 4);
}

#[test]
fn delete_sequence_keeps_invariants() {
    let mut tree = build_seq();
    for v in 1..=9 {
        tree.delete(&v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(in_order(&tree), vec![0, 10, 11, 14, 15]);
    assert_eq!(tree.size(), 5);
}

#[test]
fn insert_then_lookup_round_trip() {
    let tree = build_seq();
    for v in SEQ {
        assert!(tree.contains(&v));
        assert_eq!(tree.get(&v), Some(&v));
    }
}

#[test]
fn duplicate_insert_is_a_structural_noop() {
    let mut tree = build_seq();
    let before = tree.print();
    let size = tree.size();

    tree.insert(6);
    tree.insert(8);

    assert_eq!(tree.size(), size);
    assert_eq!(tree.print(), before);
    tree.assert_valid().unwrap();
}

#[test]
fn get_missing_returns_none() {
    let empty = AvlTree::<i32>::new();
    assert_eq!(empty.get(&100), None);
    assert!(!empty.contains(&100));

    let tree = build_seq();
    assert_eq!(tree.get(&100), None);
    assert_eq!(tree.get(&-7), None);
    assert_eq!(tree.get(&5), None);
}

#[test]
fn delete_missing_is_a_structural_noop() {
    let mut tree = build_seq();
    let before = tree.print();

    tree.delete(&100);
    tree.delete(&-1);
    tree.delete(&5);

    assert_eq!(tree.print(), before);
    assert_eq!(tree.size(), 12);
    tree.assert_valid().unwrap();

    let mut empty = AvlTree::<i32>::new();
    empty.delete(&1);
    assert!(empty.is_empty());
}

#[test]
fn deletion_keeps_every_other_value_reachable() {
    for victim in SEQ {
        let mut tree = build_seq();
        tree.delete(&victim);
        tree.assert_valid().unwrap();
        assert!(!tree.contains(&victim));
        for v in SEQ {
            if v != victim {
                assert_eq!(tree.get(&v), Some(&v));
            }
        }
    }
}

#[test]
fn two_child_deletion_promotes_the_successor() {
    let mut tree = build_seq();
    // 8 sits at the top of the initial scenario tree with both subtrees
    // populated, so this exercises successor promotion.
    tree.delete(&8);
    tree.assert_valid().unwrap();
    assert_eq!(in_order(&tree), vec![0, 1, 3, 4, 6, 7, 9, 10, 11, 14, 15]);
}

#[test]
fn ladder_insert_then_sweep_delete() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);

    for i in (0..300).step_by(3) {
        tree.delete(&i);
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
    assert_eq!(tree.size(), 200);
}

#[test]
fn custom_comparator_reverses_the_order() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
    for v in SEQ {
        tree.insert(v);
        tree.assert_valid().unwrap();
    }

    let mut out = Vec::new();
    tree.for_each(|v| out.push(*v));
    assert_eq!(out, vec![15, 14, 11, 10, 9, 8, 7, 6, 4, 3, 1, 0]);
    assert!(tree.contains(&15));
    tree.delete(&15);
    assert!(!tree.contains(&15));
    tree.assert_valid().unwrap();
}

#[test]
fn clear_resets_the_tree() {
    let mut tree = build_seq();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.print_in_order(), "[]");

    tree.insert(1);
    assert_eq!(in_order(&tree), vec![1]);
}

#[test]
fn print_in_order_lists_the_values() {
    let mut tree = AvlTree::new();
    for v in [2, 1, 3] {
        tree.insert(v);
    }
    assert_eq!(tree.print_in_order(), "[1, 2, 3]");
}

#[test]
fn print_shows_balance_factor_and_height_per_node() {
    let mut tree = AvlTree::new();
    for v in [2, 1, 3] {
        tree.insert(v);
    }
    let out = tree.print();
    assert!(out.contains("2 [bf=0, h=1]"));
    assert!(out.contains("1 [bf=0, h=0]"));
    assert!(out.contains("3 [bf=0, h=0]"));

    assert_eq!(AvlTree::<i32>::new().print(), "∅");
}

#[test]
fn node_accessors_expose_heights_and_balance() {
    use datakit_tree::{balance_factor, height};

    let mut tree = AvlTree::new();
    for v in [2, 1, 3] {
        tree.insert(v);
    }

    let arena = tree.arena();
    let root = tree.root_index();
    assert_eq!(height(arena, root), 1);
    assert_eq!(balance_factor(arena, root), 0);
    assert_eq!(height(arena, None), -1);
    assert_eq!(balance_factor(arena, None), 0);

    let root = root.unwrap() as usize;
    assert!(!arena[root].is_leaf());
    let left = arena[root].left.unwrap() as usize;
    let right = arena[root].right.unwrap() as usize;
    assert!(arena[left].is_leaf());
    assert!(arena[right].is_leaf());
    assert_eq!(arena[left].height, 0);
}

#[test]
fn single_rotation_cases_produce_a_balanced_root() {
    // right-right: ascending run forces left rotations
    let mut rr = AvlTree::new();
    for v in [1, 2, 3] {
        rr.insert(v);
    }
    rr.assert_valid().unwrap();
    assert_eq!(rr.height(), 1);

    // left-left: descending run forces right rotations
    let mut ll = AvlTree::new();
    for v in [3, 2, 1] {
        ll.insert(v);
    }
    ll.assert_valid().unwrap();
    assert_eq!(ll.height(), 1);

    // left-right and right-left zig-zags
    let mut lr = AvlTree::new();
    for v in [3, 1, 2] {
        lr.insert(v);
    }
    lr.assert_valid().unwrap();
    assert_eq!(lr.height(), 1);

    let mut rl = AvlTree::new();
    for v in [1, 3, 2] {
        rl.insert(v);
    }
    rl.assert_valid().unwrap();
    assert_eq!(rl.height(), 1);
}
