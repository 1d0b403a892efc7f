//! Validation and debugging utilities for TwoThreeTree.
//!
//! This module walks the whole tree and checks the structural invariants:
//! key ordering and bracketing, node arity, equal leaf depth, parent links,
//! and agreement between the tree shape and the arena.

use crate::error::{BTreeResult, TreeError, TreeResult};
use crate::types::{NodeId, TwoThreeTree, MAX_KEYS, NULL_NODE, ROOT_NODE};

/// Running state of one validation pass.
struct Walk {
    /// Depth of the first leaf seen; every other leaf must match it.
    leaf_depth: Option<usize>,
    /// Number of nodes reached from the root.
    visited: usize,
}

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> TwoThreeTree<K> {
    /// Check if the tree maintains 2-3 tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let mut walk = Walk {
            leaf_depth: None,
            visited: 0,
        };
        self.check_node(ROOT_NODE, NULL_NODE, None, None, 1, &mut walk)?;

        let allocated = self.arena.len();
        if walk.visited != allocated {
            return Err(TreeError::arena_error(
                "Consistency check",
                &format!("{} nodes in tree vs {} in arena", walk.visited, allocated),
            ));
        }
        Ok(())
    }

    /// Recursively check one node and its subtree.
    ///
    /// Every key in the subtree must lie strictly between `lower` and `upper`.
    fn check_node(
        &self,
        id: NodeId,
        expected_parent: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        walk: &mut Walk,
    ) -> TreeResult<()> {
        let node = self.node_checked(id)?;
        walk.visited += 1;

        if node.parent != expected_parent {
            return Err(TreeError::corrupted_tree(
                "Parent link",
                &format!(
                    "node {} points at {} but is a child of {}",
                    id, node.parent, expected_parent
                ),
            ));
        }

        let is_root = id == ROOT_NODE;
        if node.keys.len() > MAX_KEYS {
            return Err(TreeError::node_error(
                id,
                &format!("holds {} keys (max {})", node.keys.len(), MAX_KEYS),
            ));
        }
        if node.keys.is_empty() && !(is_root && node.is_leaf()) {
            return Err(TreeError::node_error(id, "holds no keys"));
        }

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(TreeError::node_error(id, "keys are not strictly increasing"));
        }

        if let (Some(min), Some(first)) = (lower, node.keys.first()) {
            if first <= min {
                return Err(TreeError::corrupted_tree(
                    "Ordering",
                    &format!("node {} has a key not above its lower bracket", id),
                ));
            }
        }
        if let (Some(max), Some(last)) = (upper, node.keys.last()) {
            if last >= max {
                return Err(TreeError::corrupted_tree(
                    "Ordering",
                    &format!("node {} has a key not below its upper bracket", id),
                ));
            }
        }

        if node.is_leaf() {
            return match walk.leaf_depth {
                None => {
                    walk.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(TreeError::corrupted_tree(
                    "Balance",
                    &format!("leaf {} at depth {}, expected {}", id, depth, expected),
                )),
            };
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(TreeError::node_error(
                id,
                &format!(
                    "has {} keys but {} children",
                    node.keys.len(),
                    node.children.len()
                ),
            ));
        }

        for (index, &child) in node.children.iter().enumerate() {
            let child_lower = if index == 0 {
                lower
            } else {
                node.keys.get(index - 1)
            };
            let child_upper = node.keys.get(index).or(upper);
            self.check_node(child, id, child_lower, child_upper, depth + 1, walk)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TwoThreeTree<i32> {
        (1..=7).map(|k| k * 10).collect()
    }

    #[test]
    fn test_valid_trees_pass() {
        assert!(TwoThreeTree::<i32>::new().check_invariants());
        assert!(sample_tree().check_invariants_detailed().is_ok());
    }

    #[test]
    fn test_detects_overfull_node() {
        let mut tree = sample_tree();
        let leaf = tree.locate(&10).unwrap();
        tree.arena.get_mut(leaf).unwrap().keys = vec![-3, -2, 10];

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(matches!(err, TreeError::NodeError(_)));
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut tree = sample_tree();
        // leaf [50] sits between 40 and 60
        let leaf = tree.locate(&50).unwrap();
        tree.arena.get_mut(leaf).unwrap().keys = vec![90];

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Ordering"));
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_unbalanced_leaves() {
        let mut tree = sample_tree();
        // Hang two leaves off leaf [70], pushing them one level deeper.
        let leaf = tree.locate(&70).unwrap();
        let extra_left = tree.arena.allocate(crate::types::Node::with_key(65, Vec::new())).unwrap();
        let extra_right = tree.arena.allocate(crate::types::Node::with_key(75, Vec::new())).unwrap();
        tree.arena.get_mut(extra_left).unwrap().parent = leaf;
        tree.arena.get_mut(extra_right).unwrap().parent = leaf;
        tree.arena.get_mut(leaf).unwrap().children = vec![extra_left, extra_right];

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("Balance"));
    }

    #[test]
    fn test_detects_orphaned_arena_node() {
        let mut tree = sample_tree();
        tree.arena.allocate(crate::types::Node::with_key(100, Vec::new())).unwrap();

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.is_arena_error());
    }
}
