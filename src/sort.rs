//! Sorting routines built on the containers in this crate.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::sort::{heap_sort, tree_sort};
//!
//! assert_eq!(heap_sort(vec![3, 1, 2, 1]), vec![1, 1, 2, 3]);
//! assert_eq!(tree_sort(vec!["b", "c", "a"]), vec!["a", "b", "c"]);
//! ```

use crate::heap::BinaryHeap;
use crate::tree::{BinarySearchTree, InsertionOrder};

/// Sorts `values` in ascending order by heapifying them and repeatedly removing
/// the largest remaining value. Takes `O(N lg N)`.
pub fn heap_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    let mut heap = BinaryHeap::heapify(values);
    let mut sorted: Vec<Option<T>> = std::iter::repeat_with(|| None).take(heap.len()).collect();
    // Each removal is the largest left, so it lands in the last open slot.
    for slot in sorted.iter_mut().rev() {
        *slot = heap.remove().ok();
    }
    debug_assert!(heap.is_empty());
    sorted.into_iter().flatten().collect()
}

/// Sorts `values` in ascending order by inserting them into a
/// [`BinarySearchTree`] in random order and walking it. Takes `O(N lg N)` in
/// expectation.
pub fn tree_sort<T: Ord>(values: Vec<T>) -> Vec<T> {
    BinarySearchTree::from_vec(values, InsertionOrder::Shuffled).into_sorted_vec()
}
