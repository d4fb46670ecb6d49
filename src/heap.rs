//! An array-backed binary max-heap.
//!
//! The heap is a complete binary tree stored level by level in a `Vec`. Every
//! node is at least as large as its children, so the largest element is always
//! at index `0`. Note that this only makes the heap *partially* ordered: the
//! internal layout returned by [`BinaryHeap::as_slice`] is not sorted.
//!
//! * Adding pushes the element to the end and swaps it with its parent while it
//!   is larger than the parent.
//! * Removing takes the root, moves the last element into its place and swaps
//!   that element with its larger child while the child is larger.
//!
//! Both take `O(lg N)`. Building a heap from `N` elements with
//! [`BinaryHeap::heapify`] takes `O(N)` instead of the `O(N lg N)` of adding
//! them one by one.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::error::HeapError;
//! use ordered_containers::heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! assert_eq!(heap.peek(), Err(HeapError::Empty));
//!
//! heap.add(1);
//! heap.add(4);
//! heap.add(3);
//! assert_eq!(heap.peek(), Ok(&4));
//!
//! assert_eq!(heap.remove(), Ok(4));
//! assert_eq!(heap.remove(), Ok(3));
//! assert_eq!(heap.remove(), Ok(1));
//! assert_eq!(heap.remove(), Err(HeapError::Empty));
//! ```

use std::iter::FromIterator;

use crate::error::HeapError;
use crate::util;

/// A binary max-heap. See the [module documentation](self) for details.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryHeap<T> {
    /// Generates a new, empty `BinaryHeap`.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Generates a new, empty `BinaryHeap` able to hold `capacity` elements
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements in their internal order, which is the level order of the
    /// underlying tree and not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A snapshot of the elements in their internal order. Changing the
    /// returned `Vec` does not affect the heap.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the heap, returning its storage in internal order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the largest element without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::heap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::heapify(vec![2, 7, 5]);
    /// assert_eq!(heap.peek(), Ok(&7));
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Builds a heap out of `data` in linear time. The `Vec` becomes the heap's
    /// storage; nothing is copied.
    ///
    /// Starting from the last node with children and working back to the root,
    /// each node is sifted down so that the subtree under it is a heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::heapify(vec![0, 1, 2, 3, 4]);
    /// assert_eq!(heap.as_slice(), &[4, 3, 2, 0, 1]);
    /// assert_eq!(heap.remove(), Ok(4));
    /// ```
    pub fn heapify(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Adds `item` to the heap.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the largest element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::error::HeapError;
    /// use ordered_containers::heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.add("a");
    /// assert_eq!(heap.remove(), Ok("a"));
    /// assert_eq!(heap.remove(), Err(HeapError::Empty));
    /// ```
    pub fn remove(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        // `swap_remove` moves the last element into the root slot.
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Moves the element at `idx` towards the root until its parent is at least
    /// as large.
    fn sift_up(&mut self, mut idx: usize) {
        while let Some(parent) = util::parent(idx) {
            if self.data[idx] <= self.data[parent] {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }

        debug_assert!(util::parent(idx).map_or(true, |p| self.data[p] >= self.data[idx]));
    }

    /// Moves the element at `idx` towards the leaves until it is at least as
    /// large as both children.
    ///
    /// When both children exist and compare equal, the right one is chosen.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        while !util::is_leaf(idx, len) {
            let left = util::left(idx);
            let right = util::right(idx);
            let child = if right < len && self.data[right] >= self.data[left] {
                right
            } else {
                left
            };

            if self.data[idx] >= self.data[child] {
                break;
            }
            self.data.swap(idx, child);
            idx = child;
        }

        debug_assert!([util::left(idx), util::right(idx)]
            .iter()
            .filter_map(|&child| self.data.get(child))
            .all(|child| self.data[idx] >= *child));
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::heapify(data)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapify(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
