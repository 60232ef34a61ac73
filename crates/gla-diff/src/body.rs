//! Request body for the asset group update endpoint.

use gla_types::{AssetGroup, AssetOperation, FormValues};
use serde::{Deserialize, Serialize};

use crate::differ::diff_assets;

/// The JSON body sent to update an asset group.
///
/// Field names are fixed by the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetGroupUpdateBody {
    pub final_url: String,
    pub path1: String,
    pub path2: String,
    pub assets: Vec<AssetOperation>,
}

/// Build the update body for turning `group` into `values`.
///
/// The final URL and display path segments are taken from `values` as is.
pub fn build_update_body(group: &AssetGroup, values: &FormValues) -> AssetGroupUpdateBody {
    let [path1, path2] = values.display_url_path.clone();
    AssetGroupUpdateBody {
        final_url: values.final_url.clone(),
        path1,
        path2,
        assets: diff_assets(group, values).into_operations(),
    }
}
