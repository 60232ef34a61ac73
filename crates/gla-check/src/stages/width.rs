use gla_types::{AssetField, AssetKind, FormValues};

use crate::stage::{CheckContext, CheckStage, Violation};

/// Display-width stage.
///
/// Measures every text value with the context's counter and reports the ones
/// longer than the limit for their position.
pub struct WidthStage;

impl CheckStage for WidthStage {
    fn name(&self) -> &str {
        "width"
    }

    fn evaluate(&self, values: &FormValues, context: &CheckContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for field in AssetField::ALL {
            if field.kind() != AssetKind::Text {
                continue;
            }
            let spec = field.spec();
            for (index, content) in values.contents(field).into_iter().enumerate() {
                let Some(max_width) = spec.max_width(index) else {
                    continue;
                };
                let width = (context.counter)(content);
                if width > max_width {
                    violations.push(Violation::TooLong {
                        field,
                        index,
                        max_width,
                        width,
                    });
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gla_text::google_ads_count;

    fn context() -> CheckContext {
        CheckContext {
            counter: google_ads_count,
            enforce_minimums: true,
        }
    }

    #[test]
    fn headline_at_limit_passes() {
        let mut values = FormValues::new();
        values.set(AssetField::Headline, vec!["x".repeat(30)]);
        assert!(WidthStage.evaluate(&values, &context()).is_empty());
    }

    #[test]
    fn wide_characters_count_double() {
        // 16 Hangul syllables are 32 wide.
        let mut values = FormValues::new();
        values.set(AssetField::Headline, vec!["가".repeat(16)]);
        assert_eq!(
            WidthStage.evaluate(&values, &context()),
            vec![Violation::TooLong {
                field: AssetField::Headline,
                index: 0,
                max_width: 30,
                width: 32,
            }]
        );
    }

    #[test]
    fn first_description_has_tighter_limit() {
        let mut values = FormValues::new();
        values.set(AssetField::Description, vec!["d".repeat(61), "d".repeat(61)]);
        let violations = WidthStage.evaluate(&values, &context());
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            Violation::TooLong { index: 0, max_width: 60, .. }
        ));
    }

    #[test]
    fn images_are_not_measured() {
        let mut values = FormValues::new();
        values.set(AssetField::Logo, vec!["https://example.com/".repeat(20)]);
        assert!(WidthStage.evaluate(&values, &context()).is_empty());
    }
}
