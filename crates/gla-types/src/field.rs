use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A creative slot of an asset group.
///
/// The serialized name is the wire identifier used both as the key of the
/// `assets` maps and as the `field_type` of an [`AssetOperation`].
///
/// [`AssetOperation`]: crate::AssetOperation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetField {
    BusinessName,
    Headline,
    LongHeadline,
    Description,
    MarketingImage,
    SquareMarketingImage,
    PortraitMarketingImage,
    Logo,
    CallToActionSelection,
}

/// What kind of content a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Free text, subject to display-width limits.
    Text,
    /// An image URL.
    Image,
    /// One of the predefined call-to-action identifiers.
    CallToAction,
}

impl AssetField {
    /// Every field, in declaration order.
    pub const ALL: [AssetField; 9] = [
        AssetField::BusinessName,
        AssetField::Headline,
        AssetField::LongHeadline,
        AssetField::Description,
        AssetField::MarketingImage,
        AssetField::SquareMarketingImage,
        AssetField::PortraitMarketingImage,
        AssetField::Logo,
        AssetField::CallToActionSelection,
    ];

    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessName => "business_name",
            Self::Headline => "headline",
            Self::LongHeadline => "long_headline",
            Self::Description => "description",
            Self::MarketingImage => "marketing_image",
            Self::SquareMarketingImage => "square_marketing_image",
            Self::PortraitMarketingImage => "portrait_marketing_image",
            Self::Logo => "logo",
            Self::CallToActionSelection => "call_to_action_selection",
        }
    }

    /// Returns `true` if the field holds an ordered list of values rather
    /// than at most one.
    pub fn is_repeatable(&self) -> bool {
        !matches!(self, Self::BusinessName | Self::CallToActionSelection)
    }

    /// The kind of content the field holds.
    pub fn kind(&self) -> AssetKind {
        match self {
            Self::BusinessName | Self::Headline | Self::LongHeadline | Self::Description => {
                AssetKind::Text
            }
            Self::MarketingImage
            | Self::SquareMarketingImage
            | Self::PortraitMarketingImage
            | Self::Logo => AssetKind::Image,
            Self::CallToActionSelection => AssetKind::CallToAction,
        }
    }

    /// Cardinality and width limits Google Ads enforces for this field.
    pub fn spec(&self) -> AssetFieldSpec {
        match self {
            Self::BusinessName => AssetFieldSpec::new(1, 1, &[25]),
            Self::Headline => AssetFieldSpec::new(3, 5, &[30]),
            Self::LongHeadline => AssetFieldSpec::new(1, 5, &[90]),
            Self::Description => AssetFieldSpec::new(2, 5, &[60, 90]),
            Self::MarketingImage | Self::SquareMarketingImage => AssetFieldSpec::new(1, 20, &[]),
            Self::PortraitMarketingImage => AssetFieldSpec::new(0, 20, &[]),
            Self::Logo => AssetFieldSpec::new(1, 20, &[]),
            Self::CallToActionSelection => AssetFieldSpec::new(0, 1, &[]),
        }
    }
}

impl fmt::Display for AssetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetField {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeError::UnknownField(s.to_string()))
    }
}

/// Limits attached to an [`AssetField`].
///
/// `max_widths` lists the maximum display width per value position; positions
/// past the end of the list reuse its last entry. An empty list means the
/// field has no width limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetFieldSpec {
    /// Minimum number of values required.
    pub min: usize,
    /// Maximum number of values accepted.
    pub max: usize,
    max_widths: &'static [usize],
}

impl AssetFieldSpec {
    const fn new(min: usize, max: usize, max_widths: &'static [usize]) -> Self {
        Self {
            min,
            max,
            max_widths,
        }
    }

    /// The maximum display width of the value at `index`, if limited.
    pub fn max_width(&self, index: usize) -> Option<usize> {
        self.max_widths
            .get(index)
            .or_else(|| self.max_widths.last())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_unique() {
        let mut sorted = AssetField::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, AssetField::ALL.to_vec());
    }

    #[test]
    fn singular_fields() {
        let singular: Vec<_> = AssetField::ALL
            .into_iter()
            .filter(|f| !f.is_repeatable())
            .collect();
        assert_eq!(
            singular,
            vec![AssetField::BusinessName, AssetField::CallToActionSelection]
        );
    }

    #[test]
    fn wire_name_matches_serde() {
        for field in AssetField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn from_str_roundtrip() {
        for field in AssetField::ALL {
            assert_eq!(field.to_string().parse::<AssetField>().unwrap(), field);
        }
    }

    #[test]
    fn from_str_unknown() {
        let err = "sitelink".parse::<AssetField>().unwrap_err();
        assert_eq!(err, TypeError::UnknownField("sitelink".into()));
    }

    #[test]
    fn description_width_per_position() {
        let spec = AssetField::Description.spec();
        assert_eq!(spec.max_width(0), Some(60));
        assert_eq!(spec.max_width(1), Some(90));
        assert_eq!(spec.max_width(4), Some(90));
    }

    #[test]
    fn images_have_no_width_limit() {
        assert_eq!(AssetField::Logo.spec().max_width(0), None);
        assert_eq!(AssetField::Logo.kind(), AssetKind::Image);
    }

    #[test]
    fn singular_fields_allow_at_most_one() {
        for field in AssetField::ALL.into_iter().filter(|f| !f.is_repeatable()) {
            assert_eq!(field.spec().max, 1);
        }
    }
}
