//! Policy rules applied to inference outcomes.
//!
//! Rules run after dispatch and before response assembly. Every rule is a
//! pure, total function over the outcome and the context that produced the
//! decision: rules may annotate the outcome, never reject it.

use crate::types::{InferenceOutcome, OperationalContext};
use std::fmt::Debug;
use std::sync::Arc;

/// A single post-processing rule.
pub trait PolicyRule: Send + Sync + Debug + 'static {
    /// Rule name, used for logging
    fn name(&self) -> &str;

    /// Apply this rule to an outcome
    fn apply(&self, outcome: InferenceOutcome, ctx: &OperationalContext) -> InferenceOutcome;
}

/// Applies registered policy rules in sequence.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    rules: Vec<Arc<dyn PolicyRule>>,
}

impl PolicyEngine {
    /// Create a new policy engine
    pub fn new(rules: Vec<Arc<dyn PolicyRule>>) -> Self {
        Self { rules }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Arc<dyn PolicyRule>] {
        &self.rules
    }

    /// Run every rule over the outcome, in registration order
    pub fn apply(
        &self,
        outcome: InferenceOutcome,
        ctx: &OperationalContext,
    ) -> InferenceOutcome {
        self.rules.iter().fold(outcome, |outcome, rule| {
            tracing::trace!(rule = rule.name(), "applying policy rule");
            rule.apply(outcome, ctx)
        })
    }
}
