//! Routing configuration.
//!
//! Read-only per router instance. Keyword lists live here rather than as
//! embedded constants so deployments can localize or tune them without a
//! code change.

use crate::types::Location;
use serde::{Deserialize, Serialize};

/// Names of the models each venue may run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    /// Model run on the edge venue
    pub edge: String,
    /// Default cloud model
    pub basic: String,
    /// Cloud model used for high-priority tasks
    pub advanced: String,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            edge: "edge_model".to_string(),
            basic: "basic_model".to_string(),
            advanced: "advanced_model".to_string(),
        }
    }
}

/// Configuration for context derivation and the decision engine thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Latency requirement below which the edge venue scores for low latency
    pub latency_threshold_ms: f64,
    /// System load above which the cloud venue is considered loaded
    pub load_threshold: f64,
    /// Location assumed when the payload carries no location signal
    pub default_location: Location,
    /// Model catalog
    pub models: ModelCatalog,
    /// Cues mapping a payload to high priority, checked before medium
    pub high_priority_cues: Vec<String>,
    /// Cues mapping a payload to medium priority
    pub medium_priority_cues: Vec<String>,
    /// Cues marking a payload as carrying sensitive data
    pub sensitive_cues: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            latency_threshold_ms: 100.0,
            load_threshold: 0.8,
            default_location: Location::Remote,
            models: ModelCatalog::default(),
            high_priority_cues: vec!["urgent".to_string(), "critical".to_string()],
            medium_priority_cues: vec!["important".to_string()],
            sensitive_cues: vec![
                "personal".to_string(),
                "private".to_string(),
                "confidential".to_string(),
                "secret".to_string(),
                "dni".to_string(),
                "passport".to_string(),
            ],
        }
    }
}
