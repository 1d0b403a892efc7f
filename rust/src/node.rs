//! Node-local operations for TwoThreeTree.
//!
//! These methods only ever look at a single node. Anything that follows child
//! or parent links goes through the tree, which owns the arena.

use std::cmp::Ordering;

use crate::types::{Node, NodeId, MAX_KEYS, NULL_NODE};

/// Where a descent goes next from an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The key is stored in this node.
    Here,
    /// Descend into the child at this index.
    Child(usize),
}

impl<K> Node<K> {
    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent == NULL_NODE
    }

    /// Returns true if this node holds more keys than a stable node may.
    pub fn is_overfull(&self) -> bool {
        self.keys.len() > MAX_KEYS
    }

    /// Sorted keys of this node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child ids, left to right.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        if self.is_root() {
            None
        } else {
            Some(self.parent)
        }
    }

    /// Smallest key in this node.
    pub fn min_key(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Position of `child` in this node's child list.
    pub(crate) fn child_position(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&id| id == child)
    }
}

impl<K: Ord> Node<K> {
    /// Returns true if `key` is stored in this node.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.binary_search(key).is_ok()
    }

    /// Decide where a search for `key` continues from this node.
    ///
    /// Keys are scanned in ascending order: an equal key stops here, the
    /// first larger key sends the search to the child on its left, and a key
    /// larger than everything stored goes to the rightmost child. Leaves
    /// always answer `Here`.
    pub(crate) fn step(&self, key: &K) -> Step {
        if self.is_leaf() {
            return Step::Here;
        }

        for (index, stored) in self.keys.iter().enumerate() {
            match key.cmp(stored) {
                Ordering::Equal => return Step::Here,
                Ordering::Less => return Step::Child(index),
                Ordering::Greater => {}
            }
        }
        Step::Child(self.children.len() - 1)
    }

    /// Insert `key` keeping the keys sorted.
    ///
    /// Returns false without changing anything if the key is already here.
    /// The node may be left overfull; the caller decides whether to split.
    pub(crate) fn insert_key(&mut self, key: K) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(index) => {
                self.keys.insert(index, key);
                true
            }
        }
    }
}
