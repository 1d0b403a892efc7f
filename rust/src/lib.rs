//! 2-3 tree implementation in Rust.
//!
//! This crate provides an in-memory 2-3 tree over totally ordered keys. It
//! supports unique-key insertion and a node-content search that returns the
//! keys of the node where a query key lives or would live.
//!
//! Nodes are stored in an arena and addressed by [`NodeId`]. Each node keeps
//! a non-owning parent id so splits can walk upward; the root always lives at
//! [`ROOT_NODE`] and is reused in place when it splits.
//!
//! ```
//! use twothree::TwoThreeTree;
//!
//! let mut tree = TwoThreeTree::new();
//! for key in [1, 2, 3] {
//!     assert!(tree.insert(key));
//! }
//!
//! assert_eq!(tree.root_keys(), &[2]);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.search(&3).contains(&3));
//! assert!(!tree.search(&5).contains(&5));
//! ```

mod compact_arena;
mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use error::{BTreeResult, InitResult, ModifyResult, TreeError, TreeResultExt};
pub use iteration::KeyIterator;
pub use types::{Node, NodeId, TwoThreeTree, MAX_KEYS, NULL_NODE, ROOT_NODE};
