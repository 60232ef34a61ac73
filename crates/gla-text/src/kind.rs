use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CounterError;
use crate::google_ads::google_ads_count;

/// A character counting function.
pub type Counter = fn(&str) -> usize;

/// Supported counting conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterKind {
    #[default]
    GoogleAds,
}

impl CounterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoogleAds => "google-ads",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CounterKind {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google-ads" => Ok(Self::GoogleAds),
            other => Err(CounterError::UnknownKind(other.to_string())),
        }
    }
}

/// The counter implementing `kind`.
pub fn character_counter(kind: CounterKind) -> Counter {
    match kind {
        CounterKind::GoogleAds => google_ads_count,
    }
}

/// Resolve a counter from its kind name.
///
/// Fails for any name other than a supported [`CounterKind`]; there is no
/// fallback counter.
pub fn counter_for(kind: &str) -> Result<Counter, CounterError> {
    let kind = kind.parse::<CounterKind>().inspect_err(|err| {
        warn!(error = %err, "rejected character counter");
    })?;
    Ok(character_counter(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_ads_counter_resolves() {
        let count = counter_for("google-ads").unwrap();
        assert_eq!(count("Hello"), 5);
        assert_eq!(count("👍"), 4);
    }

    #[test]
    fn unknown_kind_fails() {
        let err = counter_for("unknown").unwrap_err();
        assert_eq!(err, CounterError::UnknownKind("unknown".into()));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn kind_names_are_exact() {
        assert!(counter_for("Google-Ads").is_err());
        assert!(counter_for("").is_err());
    }

    #[test]
    fn kind_display_and_serde_agree() {
        let kind = CounterKind::default();
        assert_eq!(kind.to_string(), "google-ads");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"google-ads\"");
        let parsed: CounterKind = serde_json::from_str("\"google-ads\"").unwrap();
        assert_eq!(parsed, CounterKind::GoogleAds);
    }
}
