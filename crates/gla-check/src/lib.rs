//! Form checks for Google Ads asset groups.
//!
//! Before an asset group is saved, the edited [`FormValues`] run through a
//! pipeline of stages (value counts, display widths) that report every
//! violation they find.
//!
//! # Quick Start
//!
//! ```rust
//! use gla_check::{CheckConfig, FormCheck};
//! use gla_types::{AssetField, FormValues};
//!
//! let check = FormCheck::with_default_stages(CheckConfig::draft());
//! let mut values = FormValues::new();
//! values.set(AssetField::Headline, vec!["Fresh coffee, roasted daily"]);
//! assert!(check.run(&values).is_ok());
//! ```
//!
//! [`FormValues`]: gla_types::FormValues

pub mod check;
pub mod config;
pub mod stage;
pub mod stages;

// Re-exports for convenience.
pub use check::{check_form_values, CheckReport, FormCheck};
pub use config::CheckConfig;
pub use stage::{CheckContext, CheckStage, Violation};
pub use stages::{CardinalityStage, WidthStage};

#[cfg(test)]
mod tests {
    use super::*;
    use gla_text::google_ads_count;
    use gla_types::{AssetField, FormValues};

    /// Helper: form values that satisfy every field spec.
    fn complete_values() -> FormValues {
        let mut values = FormValues::new();
        values
            .set(AssetField::BusinessName, "Acme Coffee")
            .set(AssetField::Headline, vec!["Fresh beans", "Roasted daily", "Free shipping"])
            .set(AssetField::LongHeadline, vec!["Single origin coffee delivered to your door"])
            .set(AssetField::Description, vec!["Order today.", "Beans roasted the day they ship."])
            .set(AssetField::MarketingImage, vec!["https://example.com/m.png"])
            .set(AssetField::SquareMarketingImage, vec!["https://example.com/s.png"])
            .set(AssetField::Logo, vec!["https://example.com/logo.png"]);
        values
    }

    #[test]
    fn complete_values_pass() {
        let check = FormCheck::with_default_stages(CheckConfig::default());
        assert_eq!(check.stage_count(), 2);
        assert!(check.run(&complete_values()).is_ok());
    }

    #[test]
    fn all_stages_report() {
        let check = FormCheck::with_default_stages(CheckConfig::default());
        let mut values = complete_values();
        values
            .set(AssetField::Headline, vec!["x".repeat(31)])
            .set(AssetField::BusinessName, "");

        let report = check.run(&values);
        assert!(!report.is_ok());
        // Headline: too few and too long. Business name: too few.
        assert_eq!(report.violations.len(), 3);
        assert_eq!(report.for_field(AssetField::Headline).count(), 2);
        assert_eq!(report.for_field(AssetField::BusinessName).count(), 1);
    }

    #[test]
    fn empty_pipeline_reports_nothing() {
        let check = FormCheck::new(CheckConfig::default());
        assert!(check.run(&FormValues::new()).is_ok());
    }

    #[test]
    fn custom_stage_integration() {
        struct NoUrlStage;
        impl CheckStage for NoUrlStage {
            fn name(&self) -> &str {
                "no-url"
            }
            fn evaluate(&self, values: &FormValues, _context: &CheckContext) -> Vec<Violation> {
                if values.final_url.is_empty() {
                    vec![Violation::TooFew {
                        field: AssetField::BusinessName,
                        min: 1,
                        actual: 0,
                    }]
                } else {
                    Vec::new()
                }
            }
        }

        let mut check = FormCheck::new(CheckConfig::draft());
        check.add_stage(Box::new(NoUrlStage));
        assert_eq!(check.run(&FormValues::new()).violations.len(), 1);
    }

    #[test]
    fn check_form_values_uses_given_counter() {
        fn always_wide(_: &str) -> usize {
            1000
        }
        let report = check_form_values(&complete_values(), always_wide);
        // Every text value (1 + 3 + 1 + 2) is too long.
        assert_eq!(report.violations.len(), 7);

        assert!(check_form_values(&complete_values(), google_ads_count).is_ok());
    }
}
