//! Iterator implementations for TwoThreeTree.
//!
//! Keys live in internal nodes as well as leaves, so in-order iteration walks
//! the tree with an explicit stack instead of a leaf chain.

use crate::types::{Node, NodeId, TwoThreeTree, ROOT_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the keys of a 2-3 tree in ascending order.
pub struct KeyIterator<'a, K> {
    tree: &'a TwoThreeTree<K>,
    /// Nodes on the path to the next key, each with the index of its next key.
    stack: Vec<(&'a Node<K>, usize)>,
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K> TwoThreeTree<K> {
    /// Returns an iterator over all keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use twothree::TwoThreeTree;
    ///
    /// let tree: TwoThreeTree<i32> = [9, 3, 7, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![1, 3, 7, 9]);
    /// ```
    pub fn keys(&self) -> KeyIterator<'_, K> {
        KeyIterator::new(self)
    }

    /// Returns the smallest key.
    pub fn first(&self) -> Option<&K> {
        let mut node = self.node(ROOT_NODE)?;
        while let Some(&child) = node.children.first() {
            node = self.node(child)?;
        }
        node.keys.first()
    }

    /// Returns the largest key.
    pub fn last(&self) -> Option<&K> {
        let mut node = self.node(ROOT_NODE)?;
        while let Some(&child) = node.children.last() {
            node = self.node(child)?;
        }
        node.keys.last()
    }
}

impl<'a, K> IntoIterator for &'a TwoThreeTree<K> {
    type Item = &'a K;
    type IntoIter = KeyIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K> KeyIterator<'a, K> {
    fn new(tree: &'a TwoThreeTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.descend_leftmost(ROOT_NODE);
        iter
    }

    /// Push `id` and its leftmost descendants down to a leaf.
    fn descend_leftmost(&mut self, id: NodeId) {
        let tree = self.tree;
        let mut current = tree.node(id);
        while let Some(node) = current {
            self.stack.push((node, 0));
            current = node.children.first().and_then(|&child| tree.node(child));
        }
    }
}

impl<'a, K> Iterator for KeyIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let node: &'a Node<K> = top.0;
            let index = top.1;

            if index < node.keys.len() {
                top.1 += 1;
                // The subtree right of this key comes before the next key.
                if let Some(&child) = node.children.get(index + 1) {
                    self.descend_leftmost(child);
                }
                return Some(&node.keys[index]);
            }

            self.stack.pop();
        }
    }
}
