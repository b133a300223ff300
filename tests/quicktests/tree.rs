use ordered::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::TreeOp;

/// Keys are generated as `i8` but stored as `i16` so the configured bounds are never hit.
fn new_tree() -> OrderedTree<i16> {
    OrderedTree::new(i16::MIN, i16::MAX)
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[TreeOp<i8>], tree: &mut OrderedTree<i16>, set: &mut BTreeSet<i16>) -> bool {
    for op in ops {
        match *op {
            TreeOp::Insert(k) => {
                tree.insert(k.into());
                set.insert(k.into());
            }
            TreeOp::Remove(k) => {
                let k = i16::from(k);
                if tree.remove(&k) != set.remove(&k) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<TreeOp<i8>>) -> bool {
    let mut tree = new_tree();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.iter().eq(set.iter())
        && tree.node_count() == set.len()
        && tree.is_binary_search_tree()
        && tree.min() == set.first()
        && tree.max() == set.last()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.into_iter().map(i16::from));
    let keys: Vec<_> = tree.iter().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.iter().copied().map(i16::from));

    xs.iter().all(|x| tree.contains(&(*x).into()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.iter().copied().map(i16::from));
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(&(*x).into()) && tree.successor(&(*x).into()).is_none())
}

#[quickcheck]
fn height_is_bounded_by_node_count(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.into_iter().map(i16::from));

    match tree.height() {
        None => tree.is_empty(),
        Some(height) => height >= 1 && height <= tree.node_count(),
    }
}

#[quickcheck]
fn next_greater_matches_btree_set(xs: Vec<i8>, probe: i8) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.iter().copied().map(i16::from));
    let set: BTreeSet<i16> = xs.into_iter().map(i16::from).collect();
    let probe = i16::from(probe);

    tree.next_greater(&probe)
        == set
            .range((Bound::Excluded(probe), Bound::Unbounded))
            .next()
}

#[quickcheck]
fn successor_with_right_subtree_is_next_greater(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::with_keys(i16::MIN, i16::MAX, xs.into_iter().map(i16::from));

    // Whenever the successor is larger it must be the next key; only the parent fallback of a
    // right child can hand back something smaller.
    tree.iter().all(|key| match tree.successor(key) {
        Some(successor) if successor > key => Some(successor) == tree.next_greater(key),
        Some(successor) => successor < key,
        None => tree.next_greater(key).is_none(),
    })
}
