use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset::{AssetEntity, AssetId};
use crate::error::TypeError;
use crate::field::AssetField;

/// Whether an [`AssetOperation`] creates or deletes an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Delete,
}

/// A single create or delete instruction for the asset group endpoint.
///
/// Serialized as `{ "id", "content", "field_type" }` where exactly one of `id`
/// and `content` is `null`: `id: null` creates an asset with `content`,
/// `content: null` deletes the asset `id`. Updates in place are never
/// expressed; a changed value is a deletion followed by a creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAssetOperation")]
pub struct AssetOperation {
    id: Option<AssetId>,
    content: Option<String>,
    field_type: AssetField,
}

#[derive(Deserialize)]
struct RawAssetOperation {
    #[serde(default)]
    id: Option<AssetId>,
    #[serde(default)]
    content: Option<String>,
    field_type: AssetField,
}

impl TryFrom<RawAssetOperation> for AssetOperation {
    type Error = TypeError;

    fn try_from(raw: RawAssetOperation) -> Result<Self, Self::Error> {
        if raw.id.is_some() == raw.content.is_some() {
            return Err(TypeError::MalformedOperation {
                field: raw.field_type,
            });
        }
        Ok(Self {
            id: raw.id,
            content: raw.content,
            field_type: raw.field_type,
        })
    }
}

impl AssetOperation {
    /// Create a new asset holding `content`.
    pub fn create(field: AssetField, content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: Some(content.into()),
            field_type: field,
        }
    }

    /// Delete the persisted `entity`.
    pub fn delete(field: AssetField, entity: &AssetEntity) -> Self {
        Self {
            id: Some(entity.id),
            content: None,
            field_type: field,
        }
    }

    pub fn kind(&self) -> OperationKind {
        if self.id.is_some() {
            OperationKind::Delete
        } else {
            OperationKind::Create
        }
    }

    /// The asset to delete, for deletions.
    pub fn id(&self) -> Option<AssetId> {
        self.id
    }

    /// The content to create, for creations.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn field_type(&self) -> AssetField {
        self.field_type
    }
}

impl fmt::Display for AssetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.id, &self.content) {
            (Some(id), _) => write!(f, "- {} {}", self.field_type, id),
            (None, Some(content)) => write!(f, "+ {} {:?}", self.field_type, content),
            (None, None) => write!(f, "? {}", self.field_type),
        }
    }
}
