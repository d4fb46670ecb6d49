//! Errors returned by the containers in this crate.
//!
//! Every container has its own error type so a caller can tell, for example,
//! an empty [`PriorityQueue`][crate::priority_queue::PriorityQueue] apart from
//! the empty heap backing it. All failures are reported before the container is
//! mutated.

/// Errors triggered by [`BinaryHeap`][crate::heap::BinaryHeap] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HeapError {
    /// The operation needs at least one element but the heap has none.
    #[error("heap is empty")]
    Empty,
}

/// Errors triggered by [`BinarySearchTree`][crate::tree::BinarySearchTree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// `minimum` or `maximum` was called on a tree with no nodes.
    #[error("tree is empty")]
    Empty,
    /// No node holds a value equal to the requested item.
    #[error("item not found in tree")]
    NotFound,
}

/// Errors triggered by [`PriorityQueue`][crate::priority_queue::PriorityQueue] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum QueueError {
    /// The operation needs at least one element but the queue has none.
    #[error("priority queue is empty")]
    Empty,
}

impl From<HeapError> for QueueError {
    /// Maps each heap failure to the queue failure it surfaces as.
    fn from(err: HeapError) -> Self {
        match err {
            HeapError::Empty => QueueError::Empty,
        }
    }
}
