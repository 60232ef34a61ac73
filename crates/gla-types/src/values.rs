use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::asset::AssetGroup;
use crate::field::AssetField;

/// The desired content of one field: a single value or an ordered list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// The non-empty values in order. A single value becomes a one-element
    /// list; empty strings are dropped.
    pub fn contents(&self) -> Vec<&str> {
        let values: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values
            .iter()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .collect()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// The desired state of an asset group as edited in a form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub final_url: String,
    #[serde(default)]
    pub display_url_path: [String; 2],
    #[serde(default)]
    pub assets: BTreeMap<AssetField, Option<FieldValue>>,
}

impl FormValues {
    /// Create empty form values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form values describing `group`.
    ///
    /// Entities with empty content are carried over, but `contents` drops
    /// empty values, so diffing `group` against the result deletes those
    /// entities. Every other entity is matched as-is.
    pub fn from_group(group: &AssetGroup) -> Self {
        let mut values = Self {
            final_url: group.final_url.clone(),
            display_url_path: group.display_url_path.clone(),
            assets: BTreeMap::new(),
        };
        for field in AssetField::ALL {
            let entities = group.entities(field);
            let value = match entities {
                [] => continue,
                [entity] if !field.is_repeatable() => FieldValue::Single(entity.content.clone()),
                _ => FieldValue::Multiple(entities.iter().map(|e| e.content.clone()).collect()),
            };
            values.assets.insert(field, Some(value));
        }
        values
    }

    /// Set the desired value of `field`.
    pub fn set(&mut self, field: AssetField, value: impl Into<FieldValue>) -> &mut Self {
        self.assets.insert(field, Some(value.into()));
        self
    }

    /// The desired non-empty contents of `field` in order.
    pub fn contents(&self, field: AssetField) -> Vec<&str> {
        self.assets
            .get(&field)
            .and_then(Option::as_ref)
            .map(FieldValue::contents)
            .unwrap_or_default()
    }
}
