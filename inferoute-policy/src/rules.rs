//! Built-in policy rules.
//!
//! Both rules are independent: either, both, or neither may annotate a
//! given outcome.

use inferoute_core::policy::PolicyRule;
use inferoute_core::types::{InferenceOutcome, OperationalContext, Priority};

/// Marks outcomes built from sensitive data as validated and pins their
/// processing location label.
#[derive(Debug, Clone, Default)]
pub struct SecureProcessingRule;

impl SecureProcessingRule {
    /// Create a new secure processing rule
    pub fn new() -> Self {
        Self
    }
}

impl PolicyRule for SecureProcessingRule {
    fn name(&self) -> &str {
        "secure_processing"
    }

    fn apply(
        &self,
        mut outcome: InferenceOutcome,
        ctx: &OperationalContext,
    ) -> InferenceOutcome {
        if ctx.sensitive_data {
            outcome.security_validated = Some(true);
            outcome.processing_location = Some("secure_environment".to_string());
        }
        outcome
    }
}

/// Threshold below which a high-priority prediction needs a human in the loop.
const REVIEW_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Flags low-confidence results of high-priority tasks for human review.
#[derive(Debug, Clone, Default)]
pub struct HumanReviewRule;

impl HumanReviewRule {
    /// Create a new human review rule
    pub fn new() -> Self {
        Self
    }
}

impl PolicyRule for HumanReviewRule {
    fn name(&self) -> &str {
        "human_review"
    }

    fn apply(
        &self,
        mut outcome: InferenceOutcome,
        ctx: &OperationalContext,
    ) -> InferenceOutcome {
        if ctx.priority == Priority::High && outcome.confidence < REVIEW_CONFIDENCE_THRESHOLD {
            outcome.requires_human_review = Some(true);
        }
        outcome
    }
}
