//! INSERT operations for TwoThreeTree.
//!
//! This module contains key insertion, node splitting, and the upward
//! propagation of promoted keys that grows the tree at the root.

use tracing::{debug, trace, warn};

use crate::error::{ModifyResult, TreeError, TreeResult, TreeResultExt};
use crate::types::{Node, NodeId, TwoThreeTree, NULL_NODE, SPLIT_KEYS};

impl<K: Ord> TwoThreeTree<K> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Insert a key.
    ///
    /// Returns `true` if the key was added and `false` if it was already in
    /// the tree, in which case nothing changes. A successful insert may split
    /// nodes all the way up to the root.
    ///
    /// # Panics
    ///
    /// Panics if the tree's internal structure is found to be broken, which
    /// cannot happen through the public API.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let mut tree = TwoThreeTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        match self.insert_key(key) {
            Ok(inserted) => inserted,
            Err(e) => panic!("2-3 tree structure broken during insert: {}", e),
        }
    }

    /// Insert with invariant validation before and after the change.
    ///
    /// Structural problems are returned as errors instead of panicking.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<bool> {
        if let Err(e) = self.check_invariants_detailed() {
            warn!(error = %e, "tree invariants violated before insert");
            return Err(TreeError::data_integrity("before insert", &e.to_string()));
        }

        let inserted = self.insert_key(key).with_operation("insert")?;

        if let Err(e) = self.check_invariants_detailed() {
            warn!(error = %e, "tree invariants violated after insert");
            return Err(TreeError::data_integrity("after insert", &e.to_string()));
        }

        Ok(inserted)
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Locate the target node for `key` and add it there unless present.
    pub(crate) fn insert_key(&mut self, key: K) -> TreeResult<bool> {
        let target = self.locate_checked(&key)?;
        if self.node_checked(target)?.contains(&key) {
            return Ok(false);
        }
        self.add_key(target, key)?;
        Ok(true)
    }

    /// Add `key` to node `id` in sorted position, splitting on overflow.
    ///
    /// Each split hands back the parent and the promoted middle key, which
    /// is added to the parent in the next round. The loop stops at the first
    /// node that still fits, at the latest at the root.
    pub(crate) fn add_key(&mut self, id: NodeId, key: K) -> TreeResult<()> {
        let mut current = id;
        let mut key = key;

        loop {
            let node = self.node_checked_mut(current)?;
            if !node.insert_key(key) {
                return Err(TreeError::node_error(current, "key is already present"));
            }
            if !node.is_overfull() {
                return Ok(());
            }

            let (parent, promoted) = self.split(current)?;
            current = parent;
            key = promoted;
        }
    }

    /// Split an overfull node holding exactly three keys.
    ///
    /// The outer keys move into two new single-key nodes, taking two
    /// children each when the node is internal. A root is emptied and becomes
    /// the parent of the new pair; any other node is freed and the pair takes
    /// its place in the parent's child list. Returns the node that must
    /// receive the middle key, which the caller adds with `add_key`.
    fn split(&mut self, id: NodeId) -> TreeResult<(NodeId, K)> {
        let node = self.node_checked_mut(id)?;
        if node.keys.len() != SPLIT_KEYS {
            return Err(TreeError::invalid_state(
                "split",
                &format!("node {} holds {} keys", id, node.keys.len()),
            ));
        }
        if !node.is_leaf() && node.children.len() != SPLIT_KEYS + 1 {
            return Err(TreeError::invalid_state(
                "split",
                &format!("node {} has {} children", id, node.children.len()),
            ));
        }

        let parent = node.parent;
        let mut keys = std::mem::take(&mut node.keys);
        let mut left_children = std::mem::take(&mut node.children);
        let right_children = left_children.split_off(left_children.len() / 2);

        let (left_key, middle, right_key) = match (keys.pop(), keys.pop(), keys.pop()) {
            (Some(right_key), Some(middle), Some(left_key)) => (left_key, middle, right_key),
            _ => return Err(TreeError::invalid_state("split", "keys vanished mid-split")),
        };

        let left = self.arena.allocate(Node::with_key(left_key, left_children))?;
        let right = self.arena.allocate(Node::with_key(right_key, right_children))?;
        self.adopt_children(left)?;
        self.adopt_children(right)?;

        let target = if parent == NULL_NODE {
            // The root keeps its id; it was emptied above and now sits one level higher.
            let root = self.node_checked_mut(id)?;
            root.children.push(left);
            root.children.push(right);
            id
        } else {
            let parent_node = self.node_checked_mut(parent)?;
            let position = parent_node.child_position(id).ok_or_else(|| {
                TreeError::corrupted_tree(
                    "Parent link",
                    &format!("node {} is not listed under its parent {}", id, parent),
                )
            })?;
            parent_node.children.splice(position..=position, [left, right]);
            self.arena
                .deallocate(id)
                .ok_or_else(|| TreeError::missing_node(id))?;
            parent
        };

        self.node_checked_mut(left)?.parent = target;
        self.node_checked_mut(right)?.parent = target;

        trace!(node = id, left, right, parent = target, "split overfull node");
        if target == id {
            debug!(height = self.height(), "root split, tree grew by one level");
        }

        Ok((target, middle))
    }

    /// Point every child of `id` back at `id`.
    fn adopt_children(&mut self, id: NodeId) -> TreeResult<()> {
        let children = self.node_checked(id)?.children.clone();
        for child in children {
            self.node_checked_mut(child)?.parent = id;
        }
        Ok(())
    }
}
