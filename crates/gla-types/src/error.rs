use thiserror::Error;

use crate::field::AssetField;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown asset field: {0}")]
    UnknownField(String),

    #[error("malformed {field} operation: exactly one of `id` and `content` must be null")]
    MalformedOperation { field: AssetField },
}
