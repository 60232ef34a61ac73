//! Error types for the diff crate.

use gla_types::{AssetField, AssetId};

/// Errors that can occur while applying operations to an asset group.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// A deletion referenced an asset that the group does not hold.
    #[error("no {field} asset with id {id} in the group")]
    UnknownAsset { field: AssetField, id: AssetId },

    /// Every asset id above the group's highest one is taken.
    #[error("no asset id left to create a {field} asset")]
    IdExhausted { field: AssetField },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
