//! Index arithmetic for a complete binary tree laid out level by level in a
//! slice: the root lives at `0` and the `k`-th level occupies
//! `[2^k - 1, 2^(k+1) - 2]`.

/// Index of the parent of the node at `idx`, or `None` for the root.
pub(crate) fn parent(idx: usize) -> Option<usize> {
    idx.checked_sub(1).map(|i| i / 2)
}

pub(crate) fn left(idx: usize) -> usize {
    2 * idx + 1
}

pub(crate) fn right(idx: usize) -> usize {
    2 * idx + 2
}

/// A node is a leaf when its left child would fall outside the first `len` slots.
pub(crate) fn is_leaf(idx: usize, len: usize) -> bool {
    left(idx) >= len
}

/// Whether every node in `data` is at least as large as each of its children.
#[cfg(test)]
pub(crate) fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (0..data.len()).all(|i| {
        [left(i), right(i)]
            .iter()
            .filter_map(|&child| data.get(child))
            .all(|child| data[i] >= *child)
    })
}
