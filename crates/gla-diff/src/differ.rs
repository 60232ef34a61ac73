//! Field-level diff: compare persisted entities with desired form contents.
//!
//! Each field is walked independently with a single forward cursor into the
//! persisted entities. Entities that do not match the next desired value are
//! deleted until one matches; an unmatched desired value becomes a creation
//! once the cursor runs out. Unchanged entities keep their ids as long as
//! their relative order is preserved.
//!
//! The walk is not a minimum edit script: moving an item ahead of others
//! deletes and recreates the items it jumped over. Applying the operations
//! still reproduces the desired contents exactly.

use gla_types::{AssetEntity, AssetField, AssetGroup, AssetOperation, FormValues, OperationKind};
use tracing::debug;

/// The operations needed to turn a persisted group into the desired values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetDiff {
    /// Operations in field declaration order, then scan order within a field.
    pub operations: Vec<AssetOperation>,
}

impl AssetDiff {
    /// Returns `true` if the group already matches the values.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Number of creations.
    pub fn creations(&self) -> usize {
        self.count(OperationKind::Create)
    }

    /// Number of deletions.
    pub fn deletions(&self) -> usize {
        self.count(OperationKind::Delete)
    }

    /// Operations touching `field`.
    pub fn for_field(&self, field: AssetField) -> impl Iterator<Item = &AssetOperation> {
        self.operations
            .iter()
            .filter(move |op| op.field_type() == field)
    }

    pub fn into_operations(self) -> Vec<AssetOperation> {
        self.operations
    }

    fn count(&self, kind: OperationKind) -> usize {
        self.operations.iter().filter(|op| op.kind() == kind).count()
    }
}

/// Compute the operations that turn `group` into `values`.
///
/// Fields absent from either side are treated as empty. The function never
/// fails and never emits an update in place.
pub fn diff_assets(group: &AssetGroup, values: &FormValues) -> AssetDiff {
    let mut operations = Vec::new();

    for field in AssetField::ALL {
        let field_ops = diff_field(field, group.entities(field), &values.contents(field));
        if !field_ops.is_empty() {
            debug!(
                field = %field,
                operations = field_ops.len(),
                "asset field changed"
            );
        }
        operations.extend(field_ops);
    }

    AssetDiff { operations }
}

/// Compute the operations for a single field.
///
/// `entities` is the persisted list and `desired` the non-empty contents the
/// field should hold, both in order.
pub fn diff_field(
    field: AssetField,
    entities: &[AssetEntity],
    desired: &[&str],
) -> Vec<AssetOperation> {
    let mut operations = Vec::new();
    let mut cursor = 0;

    for &content in desired {
        while let Some(entity) = entities.get(cursor) {
            if entity.content == content {
                break;
            }
            operations.push(AssetOperation::delete(field, entity));
            cursor += 1;
        }

        if cursor < entities.len() {
            // Unchanged: keep the entity.
            cursor += 1;
        } else {
            operations.push(AssetOperation::create(field, content));
        }
    }

    operations.extend(
        entities[cursor..]
            .iter()
            .map(|entity| AssetOperation::delete(field, entity)),
    );

    operations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(contents: &[&str]) -> Vec<AssetEntity> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| AssetEntity::new(i as u64 + 1, *content))
            .collect()
    }

    fn delete(field: AssetField, id: u64) -> AssetOperation {
        AssetOperation::delete(field, &AssetEntity::new(id, ""))
    }

    #[test]
    fn identical_field_no_ops() {
        let persisted = entities(&["a", "b", "c"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["a", "b", "c"]);
        assert!(ops.is_empty());
    }

    #[test]
    fn append_creates_only() {
        let persisted = entities(&["headline 1"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["headline 1", "headline 2"]);
        assert_eq!(
            ops,
            vec![AssetOperation::create(AssetField::Headline, "headline 2")]
        );
    }

    #[test]
    fn remove_middle_deletes_only() {
        let persisted = entities(&["a", "b", "c"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["a", "c"]);
        assert_eq!(ops, vec![delete(AssetField::Headline, 2)]);
    }

    #[test]
    fn remove_tail_deletes_rest() {
        let persisted = entities(&["a", "b", "c"]);
        let ops = diff_field(AssetField::Description, &persisted, &["a"]);
        assert_eq!(
            ops,
            vec![
                delete(AssetField::Description, 2),
                delete(AssetField::Description, 3),
            ]
        );
    }

    #[test]
    fn edit_middle_recreates_following_items() {
        let persisted = entities(&["a", "b", "c"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["a", "x", "c"]);
        assert_eq!(
            ops,
            vec![
                delete(AssetField::Headline, 2),
                delete(AssetField::Headline, 3),
                AssetOperation::create(AssetField::Headline, "x"),
                AssetOperation::create(AssetField::Headline, "c"),
            ]
        );
    }

    #[test]
    fn swap_keeps_second_item() {
        let persisted = entities(&["a", "b"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["b", "a"]);
        assert_eq!(
            ops,
            vec![
                delete(AssetField::Headline, 1),
                AssetOperation::create(AssetField::Headline, "a"),
            ]
        );
    }

    #[test]
    fn insert_at_front_recreates_everything() {
        let persisted = entities(&["a", "b"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["x", "a", "b"]);
        assert_eq!(ops.len(), 5);
        assert_eq!(
            ops.iter().filter(|op| op.kind() == OperationKind::Delete).count(),
            2
        );
        assert_eq!(ops[2], AssetOperation::create(AssetField::Headline, "x"));
    }

    #[test]
    fn empty_sides() {
        assert!(diff_field(AssetField::Logo, &[], &[]).is_empty());
        assert_eq!(
            diff_field(AssetField::Logo, &[], &["logo.png"]),
            vec![AssetOperation::create(AssetField::Logo, "logo.png")]
        );
        assert_eq!(
            diff_field(AssetField::Logo, &entities(&["logo.png"]), &[]),
            vec![delete(AssetField::Logo, 1)]
        );
    }

    #[test]
    fn duplicate_contents_match_in_order() {
        let persisted = entities(&["same", "same"]);
        let ops = diff_field(AssetField::Headline, &persisted, &["same"]);
        assert_eq!(ops, vec![delete(AssetField::Headline, 2)]);
    }

    #[test]
    fn diff_assets_walks_every_field() {
        let mut group = AssetGroup::new();
        group.set_entities(AssetField::BusinessName, entities(&["Acme"]));
        group.set_entities(AssetField::Logo, vec![AssetEntity::new(9, "logo.png")]);

        let mut values = FormValues::new();
        values
            .set(AssetField::BusinessName, "Acme Inc")
            .set(AssetField::Logo, vec!["logo.png"])
            .set(AssetField::Headline, vec!["new headline"]);

        let diff = diff_assets(&group, &values);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.creations(), 2);
        assert_eq!(diff.deletions(), 1);
        assert_eq!(diff.for_field(AssetField::Logo).count(), 0);
        // Business name comes first in declaration order.
        assert_eq!(diff.operations[0], delete(AssetField::BusinessName, 1));
        assert_eq!(
            diff.operations[1],
            AssetOperation::create(AssetField::BusinessName, "Acme Inc")
        );
    }

    #[test]
    fn cleared_business_name_is_deleted() {
        let mut group = AssetGroup::new();
        group.set_entities(AssetField::BusinessName, vec![AssetEntity::new(5, "Acme")]);

        let mut values = FormValues::from_group(&group);
        values.set(AssetField::BusinessName, "");

        let diff = diff_assets(&group, &values);
        assert_eq!(diff.into_operations(), vec![delete(AssetField::BusinessName, 5)]);
    }
}
