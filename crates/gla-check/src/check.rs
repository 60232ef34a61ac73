use gla_text::{character_counter, Counter};
use gla_types::{AssetField, FormValues};
use serde::Serialize;
use tracing::debug;

use crate::config::CheckConfig;
use crate::stage::{CheckContext, CheckStage, Violation};
use crate::stages::{CardinalityStage, WidthStage};

// ---------------------------------------------------------------------------
// CheckReport
// ---------------------------------------------------------------------------

/// The outcome of running form values through the check pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Violations in stage order, then field order.
    pub violations: Vec<Violation>,
}

impl CheckReport {
    /// Returns `true` if no stage found a problem.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations concerning `field`.
    pub fn for_field(&self, field: AssetField) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.field() == field)
    }
}

// ---------------------------------------------------------------------------
// FormCheck
// ---------------------------------------------------------------------------

/// A pipeline of check stages run over form values before they are saved.
pub struct FormCheck {
    stages: Vec<Box<dyn CheckStage>>,
    config: CheckConfig,
}

impl FormCheck {
    /// Create a check with an empty pipeline.
    pub fn new(config: CheckConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Create a check with the default pipeline:
    /// Cardinality -> Width
    pub fn with_default_stages(config: CheckConfig) -> Self {
        let mut check = Self::new(config);
        check.add_stage(Box::new(CardinalityStage));
        check.add_stage(Box::new(WidthStage));
        check
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn CheckStage>) {
        self.stages.push(stage);
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Run every stage over `values`.
    pub fn run(&self, values: &FormValues) -> CheckReport {
        let context = CheckContext {
            counter: character_counter(self.config.counter_kind),
            enforce_minimums: self.config.enforce_minimums,
        };
        self.run_with_context(values, &context)
    }

    /// Run every stage with an explicit context.
    pub fn run_with_context(&self, values: &FormValues, context: &CheckContext) -> CheckReport {
        let mut violations = Vec::new();
        for stage in &self.stages {
            let found = stage.evaluate(values, context);
            debug!(stage = stage.name(), violations = found.len(), "check stage finished");
            violations.extend(found);
        }
        CheckReport { violations }
    }
}

/// Check `values` with the default pipeline, measuring text with `counter`.
pub fn check_form_values(values: &FormValues, counter: Counter) -> CheckReport {
    let context = CheckContext {
        counter,
        enforce_minimums: true,
    };
    FormCheck::with_default_stages(CheckConfig::default()).run_with_context(values, &context)
}
