//! Error handling and result types for TwoThreeTree operations.
//!
//! Duplicate insertion is not an error; these types cover broken structural
//! contracts and arena failures, which a correct tree never produces.

/// Error type for 2-3 tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// A node was asked to do something its current shape does not allow.
    InvalidState(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
    /// Node operation failed.
    NodeError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl TreeError {
    /// Create an InvalidState error with context
    pub fn invalid_state(operation: &str, state: &str) -> Self {
        Self::InvalidState(format!("Cannot {} in state: {}", operation, state))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a NodeError with context
    pub fn node_error(node_id: u32, details: &str) -> Self {
        Self::NodeError(format!("node {}: {}", node_id, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// A node id that should be live is missing from the arena.
    pub(crate) fn missing_node(node_id: u32) -> Self {
        Self::arena_error("lookup", &format!("node {} is not allocated", node_id))
    }

    /// Check if this error is an invalid-state error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this error is an arena error
    pub fn is_arena_error(&self) -> bool {
        matches!(self, Self::ArenaError(_))
    }
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            TreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            TreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
            TreeError::NodeError(msg) => write!(f, "Node error: {}", msg),
            TreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, TreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, TreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, TreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, TreeError>;

/// Result extension trait for attaching context to tree errors
pub trait TreeResultExt<T> {
    /// Convert to a BTreeResult with additional context
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Convert to a BTreeResult with operation context
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, TreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            TreeError::InvalidState(msg) => {
                TreeError::InvalidState(format!("{}: {}", context, msg))
            }
            TreeError::DataIntegrityError(msg) => TreeError::data_integrity(context, &msg),
            TreeError::ArenaError(msg) => TreeError::arena_error(context, &msg),
            TreeError::NodeError(msg) => TreeError::NodeError(format!("{}: {}", context, msg)),
            TreeError::CorruptedTree(msg) => TreeError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TreeError::invalid_state("split", "node holds 2 keys");
        assert_eq!(
            err.to_string(),
            "Invalid state: Cannot split in state: node holds 2 keys"
        );
        assert!(err.is_invalid_state());

        let err = TreeError::missing_node(7);
        assert_eq!(err.to_string(), "Arena error: lookup failed: node 7 is not allocated");
        assert!(err.is_arena_error());
    }

    #[test]
    fn test_with_operation_keeps_variant() {
        let result: TreeResult<()> = Err(TreeError::corrupted_tree("Balance", "leaf depths 2 and 3"));
        let err = result.with_operation("insert").unwrap_err();

        assert_eq!(
            err,
            TreeError::CorruptedTree(
                "Operation 'insert' corruption: Balance corruption: leaf depths 2 and 3".to_string()
            )
        );
    }
}
