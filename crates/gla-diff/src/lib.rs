//! Diff engine for Google Ads asset groups.
//!
//! Turns a persisted [`AssetGroup`] and the [`FormValues`] edited by a
//! merchant into the flat list of create/delete operations the asset group
//! endpoint expects, and back.
//!
//! # Key Types
//!
//! - [`AssetDiff`] -- Operations produced by [`diff_assets`]
//! - [`AssetGroupUpdateBody`] -- Request body produced by [`build_update_body`]
//! - [`apply_operations`] -- Replays operations onto a persisted group
//!
//! [`AssetGroup`]: gla_types::AssetGroup
//! [`FormValues`]: gla_types::FormValues

pub mod apply;
pub mod body;
pub mod differ;
pub mod error;

pub use apply::apply_operations;
pub use body::{build_update_body, AssetGroupUpdateBody};
pub use differ::{diff_assets, diff_field, AssetDiff};
pub use error::{DiffError, DiffResult};
