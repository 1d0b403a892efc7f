//! Construction and initialization logic for TwoThreeTree and nodes.
//!
//! The tree always starts with a single empty root leaf at `ROOT_NODE`.
//! Every other node is created by a split.

use crate::compact_arena::CompactArena;
use crate::error::{InitResult, TreeResultExt};
use crate::types::{Node, NodeId, TwoThreeTree, NULL_NODE};

impl<K> TwoThreeTree<K> {
    /// Create an empty 2-3 tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let tree = TwoThreeTree::<i64>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root_keys().is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            arena: CompactArena::with_first(Node::new()),
        }
    }
}

impl<K: Ord> TwoThreeTree<K> {
    /// Build a tree from a key sequence, validating the structure afterwards.
    ///
    /// Duplicate keys in the input are skipped, as with `insert`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let tree = TwoThreeTree::try_from_keys([5, 1, 9, 1]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn try_from_keys<I>(keys: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert_key(key).with_operation("build")?;
        }
        tree.check_invariants_detailed().with_operation("build")?;
        Ok(tree)
    }
}

impl<K> Node<K> {
    /// Creates an empty node. Only the root of an empty tree looks like this.
    pub fn new() -> Self {
        Self {
            keys: Vec::with_capacity(crate::types::MAX_KEYS + 1),
            children: Vec::new(),
            parent: NULL_NODE,
        }
    }

    /// Creates a detached node owning a single key and the given children.
    ///
    /// Used for the two halves of a split.
    pub(crate) fn with_key(key: K, children: Vec<NodeId>) -> Self {
        let mut keys = Vec::with_capacity(crate::types::MAX_KEYS + 1);
        keys.push(key);
        Self {
            keys,
            children,
            parent: NULL_NODE,
        }
    }
}

// Default implementations
impl<K> Default for TwoThreeTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for TwoThreeTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for TwoThreeTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
