//! A priority queue built on [`BinaryHeap`].
//!
//! Removal always yields the item with the highest priority. Items with equal
//! priority come out in the order they were added: every insertion is tagged
//! with a sequence number from a counter that only ever decreases, and the heap
//! orders entries by `(priority, sequence)`. An earlier insertion therefore has
//! the larger sequence number and wins ties.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::error::QueueError;
//! use ordered_containers::priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.add("a", 1);
//! queue.add("b", 2);
//! queue.add("c", 1);
//!
//! assert_eq!(queue.remove(), Ok("b"));
//! assert_eq!(queue.remove(), Ok("a"));
//! assert_eq!(queue.remove(), Ok("c"));
//! assert_eq!(queue.remove(), Err(QueueError::Empty));
//! ```

use std::cmp::Ordering;

use crate::error::QueueError;
use crate::heap::BinaryHeap;

/// A priority queue holding items of type `T` with priorities of type `P`.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Entry<T, P>>,
    counter: i64,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// The number of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the item that [`PriorityQueue::remove`] would return next.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.front().map(|entry| &entry.item)
    }

    /// Returns the priority of the item at the front of the queue.
    pub fn peek_priority(&self) -> Result<&P, QueueError> {
        self.front().map(|entry| &entry.priority)
    }

    fn front(&self) -> Result<&Entry<T, P>, QueueError> {
        self.heap.peek().map_err(QueueError::from)
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Adds `item` to the queue with the given `priority`.
    pub fn add(&mut self, item: T, priority: P) {
        let entry = Entry {
            priority,
            sequence: self.counter,
            item,
        };
        self.counter -= 1;
        self.heap.add(entry);
    }

    /// Removes the item with the highest priority and returns it. Of several
    /// items sharing the highest priority, the one added first is removed.
    pub fn remove(&mut self) -> Result<T, QueueError> {
        let entry = self.heap.remove()?;
        Ok(entry.item)
    }
}

/// A heap entry. Entries compare by priority, then by sequence number; the
/// item never takes part.
#[derive(Clone, Debug)]
struct Entry<T, P> {
    priority: P,
    sequence: i64,
    item: T,
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}
