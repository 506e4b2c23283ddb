//! Filter tree error types
//!
//! Only the serialized form of a tree can fail; evaluation itself is
//! total and never errors.

use thiserror::Error;

/// Tree module result type
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors produced while reading or writing a serialized filter tree
#[derive(Debug, Error)]
pub enum TreeError {
    /// The JSON text does not describe a valid filter tree
    #[error("malformed filter tree: {0}")]
    Malformed(#[from] serde_json::Error),
}
