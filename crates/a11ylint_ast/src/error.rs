//! Document construction errors.

use thiserror::Error;

/// Errors raised while building or loading a document tree.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// `close_element` was called with no element open.
    #[error("close_element called with no open element")]
    UnbalancedClose,

    /// The serialized tree is not valid JSON or does not match the tree shape.
    #[error("Invalid document tree: {0}")]
    InvalidTree(#[from] serde_json::Error),
}
