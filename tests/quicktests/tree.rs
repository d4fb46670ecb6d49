use ordered_containers::error::TreeError;
use ordered_containers::tree::{BinarySearchTree, InsertionOrder};

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same multiset of values in both, and that the
/// tree's links stay well formed after every step.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x);
                let pos = model.partition_point(|&y| y <= x);
                model.insert(pos, x);
            }
            Op::Remove(x) => {
                let expected = match model.binary_search(&x) {
                    Ok(pos) => Ok(model.remove(pos)),
                    Err(_) => Err(TreeError::NotFound),
                };
                if tree.remove(&x) != expected {
                    return false;
                }
            }
            Op::Walk => {
                if tree.in_order_walk() != model {
                    return false;
                }
            }
        }
        if tree.len() != model.len() || !tree.is_valid() {
            return false;
        }
    }

    tree.minimum().ok() == model.first() && tree.maximum().ok() == model.last()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| tree.search(x) == Err(TreeError::NotFound) && !tree.contains(x))
}

#[quickcheck]
fn round_trip_either_order(xs: Vec<i8>, shuffled: bool) -> bool {
    let order = if shuffled {
        InsertionOrder::Shuffled
    } else {
        InsertionOrder::Given
    };
    let tree = BinarySearchTree::from_vec(xs.clone(), order);

    let mut sorted = xs;
    sorted.sort_unstable();
    tree.len() == sorted.len() && tree.iter().copied().eq(sorted.iter().copied())
        && tree.into_sorted_vec() == sorted
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for removal in &removals {
        let len = tree.len();
        match still_present.iter().position(|x| x == removal) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if tree.remove(removal) != Ok(*removal) || tree.len() != len - 1 {
                    return false;
                }
            }
            None => {
                if tree.remove(removal) != Err(TreeError::NotFound) || tree.len() != len {
                    return false;
                }
            }
        }
    }

    still_present.sort_unstable();
    tree.is_valid() && tree.in_order_walk() == still_present
}
