use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::AssetField;

/// Backend identifier of a persisted asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A persisted asset record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntity {
    pub id: AssetId,
    pub content: String,
}

impl AssetEntity {
    pub fn new(id: impl Into<AssetId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// The persisted content of one field: a single entity for singular fields,
/// an ordered list for repeatable ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetSlot {
    Single(AssetEntity),
    Multiple(Vec<AssetEntity>),
}

impl AssetSlot {
    /// View the slot as an ordered list.
    pub fn as_slice(&self) -> &[AssetEntity] {
        match self {
            Self::Single(entity) => std::slice::from_ref(entity),
            Self::Multiple(entities) => entities,
        }
    }
}

/// The persisted creative set of one campaign.
///
/// Absent fields and `null` slots are both treated as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub final_url: String,
    /// The two optional path segments shown after the display domain.
    #[serde(default)]
    pub display_url_path: [String; 2],
    #[serde(default)]
    pub assets: BTreeMap<AssetField, Option<AssetSlot>>,
}

impl AssetGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted entities of `field` as an ordered list.
    pub fn entities(&self, field: AssetField) -> &[AssetEntity] {
        self.assets
            .get(&field)
            .and_then(Option::as_ref)
            .map(AssetSlot::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the entities of `field`.
    ///
    /// Singular fields store a lone entity as [`AssetSlot::Single`]; an empty
    /// list removes the field.
    pub fn set_entities(&mut self, field: AssetField, mut entities: Vec<AssetEntity>) {
        let slot = match entities.len() {
            0 => None,
            1 if !field.is_repeatable() => entities.pop().map(AssetSlot::Single),
            _ => Some(AssetSlot::Multiple(entities)),
        };
        match slot {
            Some(slot) => {
                self.assets.insert(field, Some(slot));
            }
            None => {
                self.assets.remove(&field);
            }
        }
    }

    /// Highest asset id present in the group.
    pub fn max_asset_id(&self) -> Option<AssetId> {
        AssetField::ALL
            .into_iter()
            .flat_map(|field| self.entities(field))
            .map(|entity| entity.id)
            .max()
    }

    /// Total number of persisted entities across all fields.
    pub fn asset_count(&self) -> usize {
        AssetField::ALL
            .into_iter()
            .map(|field| self.entities(field).len())
            .sum()
    }
}
