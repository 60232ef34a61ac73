//! Replay asset operations onto a persisted group.

use std::collections::BTreeMap;

use gla_types::{AssetEntity, AssetField, AssetGroup, AssetId, AssetOperation};
use tracing::debug;

use crate::error::{DiffError, DiffResult};

/// Apply `operations` to `group` the way the backend would.
///
/// Deletions remove the entity with the given id from its field; creations
/// append a new entity whose id is allocated above every id in `group`.
/// Operations are applied in order.
pub fn apply_operations(
    group: &AssetGroup,
    operations: &[AssetOperation],
) -> DiffResult<AssetGroup> {
    let mut fields: BTreeMap<AssetField, Vec<AssetEntity>> = AssetField::ALL
        .into_iter()
        .map(|field| (field, group.entities(field).to_vec()))
        .collect();
    // `None` once the id space is used up; only a creation needs a fresh id.
    let mut next_id = group.max_asset_id().map_or(Some(1), |id| id.0.checked_add(1));

    for op in operations {
        let field = op.field_type();
        let entities = fields.entry(field).or_default();

        if let Some(id) = op.id() {
            let position = entities
                .iter()
                .position(|entity| entity.id == id)
                .ok_or(DiffError::UnknownAsset { field, id })?;
            entities.remove(position);
            debug!(field = %field, %id, "deleted asset");
        } else {
            let id = next_id.ok_or(DiffError::IdExhausted { field })?;
            let content = op.content().unwrap_or_default();
            entities.push(AssetEntity::new(AssetId(id), content));
            debug!(field = %field, id, "created asset");
            next_id = id.checked_add(1);
        }
    }

    let mut result = group.clone();
    for (field, entities) in fields {
        result.set_entities(field, entities);
    }
    Ok(result)
}
