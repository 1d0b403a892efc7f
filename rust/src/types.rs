//! Core types and data structures for TwoThreeTree.
//!
//! This module contains the tree and node structures, the arena handle type,
//! and the structural constants used throughout the 2-3 tree implementation.

use crate::compact_arena::CompactArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum number of keys a stable node may hold.
pub const MAX_KEYS: usize = 2;

/// Key count of a node that must be split (one past `MAX_KEYS`).
pub(crate) const SPLIT_KEYS: usize = MAX_KEYS + 1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub use crate::compact_arena::NodeId;

/// Special node ID constants
pub use crate::compact_arena::NULL_NODE;
pub const ROOT_NODE: NodeId = 0;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A 2-3 tree of unique, totally ordered keys.
///
/// Every node holds one or two keys and, when internal, one more child than
/// it has keys. All leaves sit at the same depth. Inserting into a full node
/// splits it and promotes the middle key into the parent; when the root
/// splits the tree grows by one level.
///
/// # Examples
///
/// ```
/// use twothree::TwoThreeTree;
///
/// let mut tree = TwoThreeTree::new();
/// assert!(tree.insert(1));
/// assert!(tree.insert(2));
/// assert!(tree.insert(3));
/// assert!(!tree.insert(3));
///
/// assert_eq!(tree.root_keys(), &[2]);
/// assert_eq!(tree.search(&1), &[1]);
/// // 5 is absent; the search lands in the leaf it would belong to.
/// assert_eq!(tree.search(&5), &[3]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Search**: O(log n)
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct TwoThreeTree<K = i64> {
    /// Storage for every node. The root always lives at `ROOT_NODE`.
    pub(crate) arena: CompactArena<Node<K>>,
}

/// A single 2-3 tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Sorted list of keys.
    pub(crate) keys: Vec<K>,
    /// Child node ids; empty for a leaf.
    pub(crate) children: Vec<NodeId>,
    /// Back-reference used to walk upward during splits. `NULL_NODE` for the root.
    pub(crate) parent: NodeId,
}

impl<K> Default for Node<K> {
    fn default() -> Self {
        Self::new()
    }
}
