use std::fmt;

use gla_text::Counter;
use gla_types::{AssetField, FormValues};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Violation
// ---------------------------------------------------------------------------

/// A single problem found in form values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The field holds fewer values than required.
    TooFew {
        field: AssetField,
        min: usize,
        actual: usize,
    },
    /// The field holds more values than accepted.
    TooMany {
        field: AssetField,
        max: usize,
        actual: usize,
    },
    /// A text value exceeds its display-width limit.
    TooLong {
        field: AssetField,
        index: usize,
        max_width: usize,
        width: usize,
    },
}

impl Violation {
    pub fn field(&self) -> AssetField {
        match self {
            Self::TooFew { field, .. } | Self::TooMany { field, .. } | Self::TooLong { field, .. } => {
                *field
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFew { field, min, actual } => {
                write!(f, "{field}: at least {min} required, {actual} given")
            }
            Self::TooMany { field, max, actual } => {
                write!(f, "{field}: at most {max} accepted, {actual} given")
            }
            Self::TooLong {
                field,
                index,
                max_width,
                width,
            } => write!(
                f,
                "{field}[{index}]: {width} characters, limit is {max_width}"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckContext
// ---------------------------------------------------------------------------

/// Shared inputs available to every check stage.
#[derive(Clone, Copy)]
pub struct CheckContext {
    /// Counter used for display-width limits.
    pub counter: Counter,
    /// Whether minimum value counts are enforced.
    pub enforce_minimums: bool,
}

impl fmt::Debug for CheckContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckContext")
            .field("enforce_minimums", &self.enforce_minimums)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// CheckStage trait
// ---------------------------------------------------------------------------

/// A single stage of the form check pipeline.
///
/// Stages run in order and each reports every violation it finds; a failing
/// stage does not stop the ones after it.
pub trait CheckStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "cardinality", "width").
    fn name(&self) -> &str;

    /// Inspect `values` and return the violations found.
    fn evaluate(&self, values: &FormValues, context: &CheckContext) -> Vec<Violation>;
}
