//! GET operations for TwoThreeTree.
//!
//! This module contains the read operations for the 2-3 tree: locating the
//! node that owns (or would own) a key, node-content search, membership, and
//! the arena accessors the other modules build on.

use crate::error::{TreeError, TreeResult};
use crate::node::Step;
use crate::types::{Node, NodeId, TwoThreeTree, ROOT_NODE};

impl<K: Ord> TwoThreeTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Return the keys of the node where `key` is stored or would be stored.
    ///
    /// This is not a membership test. When `key` is absent the result is the
    /// contents of the leaf it would be inserted into, so callers compare the
    /// returned keys against their query. The slice is empty only when the
    /// whole tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let mut tree = TwoThreeTree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.search(&2), &[2]);
    /// assert_eq!(tree.search(&3), &[3]);
    /// assert_eq!(tree.search(&5), &[3]);
    /// assert_eq!(tree.search(&0), &[1]);
    /// ```
    pub fn search(&self, key: &K) -> &[K] {
        self.locate(key)
            .and_then(|id| self.node(id))
            .map(Node::keys)
            .unwrap_or(&[])
    }

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let mut tree = TwoThreeTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).binary_search(key).is_ok()
    }

    /// Find the node that holds `key`, or the leaf where it belongs.
    ///
    /// The descent starts at the root and follows `Node::step` until a node
    /// answers `Here`. Its depth is the tree height when the key is absent.
    /// Returns `None` only if a child link points at a freed arena slot.
    pub fn locate(&self, key: &K) -> Option<NodeId> {
        let mut current = ROOT_NODE;

        loop {
            let node = self.node(current)?;
            match node.step(key) {
                Step::Here => return Some(current),
                Step::Child(index) => current = *node.children.get(index)?,
            }
        }
    }

    /// `locate` with the miss reported as an arena error.
    pub(crate) fn locate_checked(&self, key: &K) -> TreeResult<NodeId> {
        self.locate(key)
            .ok_or_else(|| TreeError::arena_error("locate", "descent reached an unallocated node"))
    }
}

impl<K> TwoThreeTree<K> {
    // ============================================================================
    // NODE ACCESS
    // ============================================================================

    /// Get a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id)
    }

    /// Keys held by the root node.
    pub fn root_keys(&self) -> &[K] {
        self.node(ROOT_NODE).map(Node::keys).unwrap_or(&[])
    }

    /// Get a node that must exist.
    #[inline]
    pub(crate) fn node_checked(&self, id: NodeId) -> TreeResult<&Node<K>> {
        self.arena.get(id).ok_or_else(|| TreeError::missing_node(id))
    }

    /// Get a mutable node that must exist.
    #[inline]
    pub(crate) fn node_checked_mut(&mut self, id: NodeId) -> TreeResult<&mut Node<K>> {
        self.arena.get_mut(id).ok_or_else(|| TreeError::missing_node(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_empty_tree() {
        let tree = TwoThreeTree::<i64>::new();
        assert!(tree.search(&42).is_empty());
        assert_eq!(tree.locate(&42), Some(ROOT_NODE));
        assert!(!tree.contains(&42));
    }

    #[test]
    fn test_locate_stops_at_internal_match() {
        let mut tree = TwoThreeTree::new();
        for key in [1, 2, 3] {
            tree.insert(key);
        }

        assert_eq!(tree.locate(&2), Some(ROOT_NODE));

        let leaf = tree.locate(&1).unwrap();
        assert_ne!(leaf, ROOT_NODE);
        assert!(tree.node(leaf).unwrap().is_leaf());
        assert_eq!(tree.node(leaf).unwrap().parent(), Some(ROOT_NODE));
    }

    #[test]
    fn test_search_returns_node_contents_for_absent_keys() {
        let mut tree = TwoThreeTree::new();
        for key in [10, 20, 30, 40] {
            tree.insert(key);
        }
        // root [20], leaves [10] and [30, 40]
        assert_eq!(tree.root_keys(), &[20]);
        assert_eq!(tree.search(&35), &[30, 40]);
        assert_eq!(tree.search(&15), &[10]);
        assert!(!tree.contains(&35));
        assert!(tree.contains(&40));
    }

    #[test]
    fn test_node_checked_reports_missing() {
        let tree = TwoThreeTree::<i64>::new();
        assert!(tree.node_checked(ROOT_NODE).is_ok());
        assert!(tree.node_checked(99).unwrap_err().is_arena_error());
    }
}
