//! Data model for Google Ads asset groups.
//!
//! This crate provides the types shared by the diff engine, the display-width
//! counter checks, and the command-line tool. Every other `gla-*` crate
//! depends on `gla-types`.
//!
//! # Key Types
//!
//! - [`AssetField`] — Creative slot (headline, logo, business name, ...)
//! - [`AssetFieldSpec`] — Cardinality and display-width limits of a slot
//! - [`AssetEntity`] / [`AssetGroup`] — Persisted state of a campaign's assets
//! - [`FieldValue`] / [`FormValues`] — Desired state as edited in a form
//! - [`AssetOperation`] — Create or delete instruction sent to the backend

pub mod asset;
pub mod error;
pub mod field;
pub mod operation;
pub mod values;

pub use asset::{AssetEntity, AssetGroup, AssetId, AssetSlot};
pub use error::TypeError;
pub use field::{AssetField, AssetFieldSpec, AssetKind};
pub use operation::{AssetOperation, OperationKind};
pub use values::{FieldValue, FormValues};
