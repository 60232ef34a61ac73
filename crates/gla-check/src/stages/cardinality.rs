use gla_types::{AssetField, FormValues};

use crate::stage::{CheckContext, CheckStage, Violation};

/// Value count stage.
///
/// Checks every field's number of non-empty values against the minimum and
/// maximum of its [`AssetFieldSpec`](gla_types::AssetFieldSpec).
pub struct CardinalityStage;

impl CheckStage for CardinalityStage {
    fn name(&self) -> &str {
        "cardinality"
    }

    fn evaluate(&self, values: &FormValues, context: &CheckContext) -> Vec<Violation> {
        let mut violations = Vec::new();

        for field in AssetField::ALL {
            let spec = field.spec();
            let actual = values.contents(field).len();

            if actual > spec.max {
                violations.push(Violation::TooMany {
                    field,
                    max: spec.max,
                    actual,
                });
            } else if context.enforce_minimums && actual < spec.min {
                violations.push(Violation::TooFew {
                    field,
                    min: spec.min,
                    actual,
                });
            }
        }

        violations
    }
}
