//! # inferoute policies
//!
//! Built-in policy rules for inferoute.

pub mod rules;

// Re-exports
pub use rules::{HumanReviewRule, SecureProcessingRule};
