use gla_text::CounterKind;
use serde::{Deserialize, Serialize};

/// Configuration for the form check pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Counting convention used for display-width limits.
    pub counter_kind: CounterKind,
    /// Whether fields holding fewer values than required are reported.
    /// Drafts saved mid-edit usually turn this off.
    pub enforce_minimums: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            counter_kind: CounterKind::GoogleAds,
            enforce_minimums: true,
        }
    }
}

impl CheckConfig {
    /// A configuration for incomplete drafts: only upper limits are checked.
    pub fn draft() -> Self {
        Self {
            enforce_minimums: false,
            ..Default::default()
        }
    }
}
