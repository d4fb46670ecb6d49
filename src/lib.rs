//! This crate exposes a few ordered containers and the sorting routines built
//! on them, mostly for educational purposes.
//!
//! ## Binary Heap
//!
//! A [binary max-heap](heap) is a complete binary tree stored level by level in
//! an array. Its one invariant is:
//!
//! 1. Every node is greater than or equal to each of its children.
//!
//! That's enough to keep the largest element at the root, so it can be read in
//! `O(1)` and removed in `O(lg N)`.
//!
//! ## Priority Queue
//!
//! A [priority queue](priority_queue) hands out its items highest priority
//! first. This one is a thin layer over the heap which also guarantees that
//! items of equal priority come out in the order they went in.
//!
//! ## Binary Search Tree
//!
//! A [Binary Search Tree](tree) (BST) is a data structure supporting operations
//! to insert, find, and delete stored records. The most important invariants of
//! a BST are:
//!
//! 1. For every node, all the nodes in its left subtree have a value less than
//!    or equal to its own value.
//! 2. For every node, all the nodes in its right subtree have a value greater
//!    than or equal to its own value.
//!
//! Searching takes `O(height)`. This tree doesn't rebalance itself, so its height
//! depends on the order values arrive in: random order gives an expected height
//! of `O(lg N)` while sorted order gives `N`. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod heap;
pub mod priority_queue;
pub mod sort;
pub mod tree;
mod util;
