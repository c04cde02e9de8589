//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No task with the given ID.
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
