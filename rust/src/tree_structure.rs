//! Tree structure management operations for TwoThreeTree.
//!
//! This module contains the tree-level operations that look at the overall
//! shape: size queries, height, node counting, clearing and arena statistics.

use crate::compact_arena::{CompactArena, CompactArenaStats};
use crate::types::{Node, NodeId, TwoThreeTree, ROOT_NODE};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> TwoThreeTree<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len_recursive(ROOT_NODE)
    }

    fn len_recursive(&self, id: NodeId) -> usize {
        self.node(id)
            .map(|node| {
                node.keys.len()
                    + node
                        .children
                        .iter()
                        .map(|&child| self.len_recursive(child))
                        .sum::<usize>()
            })
            .unwrap_or(0)
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root_keys().is_empty()
    }

    /// Number of levels in the tree; a lone root leaf counts as 1.
    ///
    /// All leaves share one depth, so following the leftmost spine is enough.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.node(ROOT_NODE);

        while let Some(node) = current {
            height += 1;
            current = node.children.first().and_then(|&child| self.node(child));
        }
        height
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes_in_tree().0
    }

    /// Count the leaf and internal nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.count_nodes_recursive(ROOT_NODE)
    }

    fn count_nodes_recursive(&self, id: NodeId) -> (usize, usize) {
        match self.node(id) {
            Some(node) if node.is_leaf() => (1, 0),
            Some(node) => node
                .children
                .iter()
                .map(|&child| self.count_nodes_recursive(child))
                .fold((0, 1), |(leaves, internals), (l, i)| (leaves + l, internals + i)),
            // Invalid reference
            None => (0, 0),
        }
    }

    /// Remove every key, leaving a single empty root.
    pub fn clear(&mut self) {
        self.arena = CompactArena::with_first(Node::new());
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_shape() {
        let tree = TwoThreeTree::<i64>::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.count_nodes_in_tree(), (1, 0));
    }

    #[test]
    fn test_height_grows_only_on_root_split() {
        let mut tree = TwoThreeTree::new();
        let mut height = tree.height();

        for key in 0..500 {
            let root_len_before = tree.root_keys().len();
            tree.insert(key);
            let new_height = tree.height();

            if new_height != height {
                assert_eq!(new_height, height + 1);
                // Only a full root can overflow into a new level.
                assert_eq!(root_len_before, 2);
                assert_eq!(tree.root_keys().len(), 1);
            }
            height = new_height;
        }
        assert_eq!(tree.len(), 500);
    }

    #[test]
    fn test_clear_resets_tree() {
        let mut tree: TwoThreeTree<i32> = (0..64).collect();
        assert!(tree.height() > 1);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.arena_stats().allocated_count, 1);

        assert!(tree.insert(7));
        assert_eq!(tree.search(&7), &[7]);
    }
}
