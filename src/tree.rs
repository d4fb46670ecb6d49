//! An unbalanced Binary Search Tree whose nodes know their parents.
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! indices instead of pointers, so parent and child links can point
//! at each other without shared ownership. Removing a node frees its slot for
//! reuse by a later insertion.
//!
//! Duplicates are allowed: an item equal to a node's value is placed in that
//! node's right subtree.
//!
//! The tree does not rebalance itself. Inserting values in sorted order builds a
//! tree that is effectively a linked list. [`BinarySearchTree::from_vec`]
//! shuffles its input by default so that the expected height is `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::error::TreeError;
//! use ordered_containers::tree::{BinarySearchTree, InsertionOrder};
//!
//! let mut tree = BinarySearchTree::from_vec(vec![12, 5, 18, 2, 9], InsertionOrder::Given);
//!
//! assert_eq!(tree.search(&9), Ok(&9));
//! assert_eq!(tree.search(&10), Err(TreeError::NotFound));
//! assert_eq!(tree.minimum(), Ok(&2));
//! assert_eq!(tree.maximum(), Ok(&18));
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert_eq!(tree.remove(&12), Ok(12));
//! assert_eq!(tree.in_order_walk(), vec![2, 5, 9, 18]);
//! assert_eq!(tree.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TreeError;

/// The order in which [`BinarySearchTree::from_vec`] inserts its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionOrder {
    /// Insert in a uniformly random permutation of the input. The expected
    /// height of the resulting tree is `O(lg N)`.
    Shuffled,
    /// Insert in the order given. Sorted input produces a tree of height `N`.
    Given,
}

impl Default for InsertionOrder {
    fn default() -> Self {
        Self::Shuffled
    }
}

/// A Binary Search Tree. This can be used for adding, searching for, and
/// removing comparable items, and for walking them in ascending order.
#[derive(Clone)]
pub struct BinarySearchTree<T> {
    root: Option<NodeId>,
    len: usize,
    arena: Arena<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            arena: Arena::new(),
        }
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty
    /// tree has height `0`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns the smallest item in the tree.
    pub fn minimum(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.arena[self.leftmost(root)].value)
            .ok_or(TreeError::Empty)
    }

    /// Returns the largest item in the tree.
    pub fn maximum(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.arena[self.rightmost(root)].value)
            .ok_or(TreeError::Empty)
    }

    /// Returns an iterator over the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            walk: Walk::new(&self.arena, self.root),
            remaining: self.len,
        }
    }

    /// Returns the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = vec![3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(tree.in_order_walk(), vec![1, 1, 2, 3]);
    /// ```
    pub fn in_order_walk(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the tree, returning its items in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let ids: Vec<NodeId> = {
            let mut walk = Walk::new(&self.arena, self.root);
            std::iter::from_fn(|| walk.next_id()).collect()
        };
        let mut slots = self.arena.slots;
        ids.into_iter()
            .filter_map(|id| slots[id.0].take())
            .map(|node| node.value)
            .collect()
    }

    /// Follows left children from `id` to the smallest node in its subtree.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena[id].left {
            id = left;
        }
        id
    }

    /// Follows right children from `id` to the largest node in its subtree.
    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena[id].right {
            id = right;
        }
        id
    }

    /// Returns whether `id`, its parent and its children all point at each other.
    fn links_agree(&self, id: NodeId) -> bool {
        let node = &self.arena[id];
        let parent_agrees = match node.parent {
            None => self.root == Some(id),
            Some(parent) => {
                let parent = &self.arena[parent];
                parent.left == Some(id) || parent.right == Some(id)
            }
        };
        parent_agrees
            && [node.left, node.right]
                .iter()
                .flatten()
                .all(|&child| self.arena[child].parent == Some(id))
    }

    /// Replaces `old` with `new` as a child of `parent`, making `new` the root
    /// when `parent` is `None`. `new`'s parent link is updated to match.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Builds a tree containing every item in `values`.
    ///
    /// With [`InsertionOrder::Shuffled`] the items are inserted in a random order
    /// drawn from [`rand::thread_rng`]. Use [`BinarySearchTree::from_vec_with_rng`]
    /// to control the randomness.
    pub fn from_vec(values: Vec<T>, order: InsertionOrder) -> Self {
        match order {
            InsertionOrder::Shuffled => Self::from_vec_with_rng(values, &mut rand::thread_rng()),
            InsertionOrder::Given => values.into_iter().collect(),
        }
    }

    /// Builds a tree containing every item in `values`, inserted in an order
    /// shuffled by `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use ordered_containers::tree::BinarySearchTree;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let tree = BinarySearchTree::from_vec_with_rng((0..1024).collect(), &mut rng);
    ///
    /// assert_eq!(tree.len(), 1024);
    /// assert!(tree.height() < 1024);
    /// ```
    pub fn from_vec_with_rng<R>(mut values: Vec<T>, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        values.shuffle(rng);
        values.into_iter().collect()
    }

    /// Adds `item` to the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.in_order_walk(), vec![1, 1]);
    /// ```
    pub fn add(&mut self, item: T) {
        // Walk down until falling off the tree. The last node visited becomes
        // the new node's parent.
        let mut parent = None;
        let mut go_left = false;
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            parent = Some(id);
            go_left = item < node.value;
            current = if go_left { node.left } else { node.right };
        }

        let id = self.arena.insert(Node::new(item, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) if go_left => self.arena[parent].left = Some(id),
            Some(parent) => self.arena[parent].right = Some(id),
        }
        self.len += 1;

        if cfg!(debug_assertions) {
            assert!(self.links_agree(id));
            if let Some(parent) = parent {
                assert!(self.links_agree(parent));
            }
        }
    }

    /// Returns whether an item equal to `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Searches for an item equal to `item` and returns the stored one.
    pub fn search(&self, item: &T) -> Result<&T, TreeError> {
        self.find(item)
            .map(|id| &self.arena[id].value)
            .ok_or(TreeError::NotFound)
    }

    /// Removes an item equal to `item` from the tree and returns it. If the tree
    /// holds several equal items, the one closest to the root is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::error::TreeError;
    /// use ordered_containers::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(2);
    ///
    /// assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, TreeError> {
        let id = self.find(item).ok_or(TreeError::NotFound)?;
        let Node {
            left,
            right,
            parent,
            ..
        } = self.arena[id];

        let replacement = match (left, right) {
            (None, _) => right,
            (_, None) => left,
            (Some(left), Some(right)) => {
                // The successor is the smallest node on the right, so it has no
                // left child of its own.
                let successor = self.leftmost(right);
                if successor != right {
                    // Lift the successor out, leaving its right subtree behind as
                    // its parent's left subtree.
                    let Node {
                        right: successor_right,
                        parent: successor_parent,
                        ..
                    } = self.arena[successor];
                    self.replace_child(successor_parent, successor, successor_right);

                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                Some(successor)
            }
        };
        self.replace_child(parent, id, replacement);
        self.len -= 1;

        if cfg!(debug_assertions) {
            if let Some(replacement) = replacement {
                assert!(self.links_agree(replacement));
            }
            if let Some(parent) = parent {
                assert!(self.links_agree(parent));
            }
        }
        Ok(self.arena.remove(id).value)
    }

    fn find(&self, item: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match item.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Returns whether the tree is well formed: every item is in order, every
    /// child links back to its parent and [`BinarySearchTree::len`] counts the
    /// reachable nodes. Takes `O(N)`.
    ///
    /// Mutations only check the links around the nodes they touch (and only in
    /// debug builds), so this is the way to check a whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// tree.remove(&2).unwrap();
    /// assert!(tree.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        if let Some(root) = self.root {
            if self.arena[root].parent.is_some() {
                return false;
            }
        }

        let mut reachable = 0;
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            reachable += 1;
            let node = &self.arena[id];
            for child in [node.left, node.right].iter().flatten() {
                if self.arena[*child].parent != Some(id) {
                    return false;
                }
                stack.push(*child);
            }
        }

        reachable == self.len && self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Inserts the items in the order they are yielded.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the items of a [`BinarySearchTree`] in ascending order.
///
/// Created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    walk: Walk<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena: &'a Arena<T> = self.walk.arena;
        let id = self.walk.next_id()?;
        self.remaining -= 1;
        Some(&arena[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// In-order traversal with an explicit stack, so a tree that has degraded into
/// a long chain can't overflow the call stack.
struct Walk<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,
    current: Option<NodeId>,
}

impl<'a, T> Walk<'a, T> {
    fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            current: root,
        }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.arena[id].left;
        }
        let id = self.stack.pop()?;
        self.current = self.arena[id].right;
        Some(id)
    }
}

/// Position of a [`Node`] in its tree's [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

/// Slot storage for the nodes of one tree. Vacated slots are kept on a free
/// list and handed out again by `insert`.
#[derive(Clone, Debug)]
struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    fn insert(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn remove(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().expect("Removing a vacant node slot");
        self.free.push(id);
        node
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0].as_ref().expect("Node id refers to a vacant slot")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0].as_mut().expect("Node id refers to a vacant slot")
    }
}
