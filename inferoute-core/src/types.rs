//! Core types for routing operations.

use serde::{Deserialize, Serialize};

/// Execution venue for an inference task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Edge,
    Cloud,
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Venue::Edge => write!(f, "edge"),
            Venue::Cloud => write!(f, "cloud"),
        }
    }
}

/// Task priority derived from the payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Where the task data is allowed or expected to be processed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Local,
    Remote,
}

/// Point-in-time snapshot of operational conditions for one request.
///
/// Built once per request by the [`ContextProvider`](crate::context::ContextProvider)
/// and treated as immutable from then on: the decision engine and policy rules
/// only ever borrow it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationalContext {
    pub required_latency_ms: f64,
    pub edge_available: bool,
    pub system_load: f64,
    pub priority: Priority,
    pub location: Location,
    pub sensitive_data: bool,
}

/// Outcome of the decision engine for one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingDecision {
    /// Chosen execution venue
    pub venue: Venue,
    /// Model the chosen venue should run
    pub recommended_model: String,
    /// Human-readable justification, never empty
    pub reason: String,
    /// How decisively the winning venue outscored the other, in (0, 1]
    pub confidence: f64,
}

/// Inbound inference task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceTask {
    /// Free-text input to classify
    pub input: String,
    /// Optional free-text context, carried through for collaborators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl InferenceTask {
    /// Create a new task with input text
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            context: None,
        }
    }

    /// Attach free-text context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Result of executing an inference task on a venue.
///
/// The optional fields are absent until a policy rule sets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceOutcome {
    pub prediction: String,
    pub model_used: String,
    pub inference_time_ms: f64,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    pub source: Venue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_validated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_human_review: Option<bool>,
}

impl InferenceOutcome {
    /// Create an outcome with the mandatory fields set
    pub fn new(
        prediction: impl Into<String>,
        model_used: impl Into<String>,
        inference_time_ms: f64,
        confidence: f64,
        source: Venue,
    ) -> Self {
        Self {
            prediction: prediction.into(),
            model_used: model_used.into(),
            inference_time_ms,
            confidence,
            source,
            security_validated: None,
            processing_location: None,
            requires_human_review: None,
        }
    }
}

/// Audit metadata attached to every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub request_id: String,
    pub venue_used: Venue,
    pub model_used: String,
    pub total_time_ms: f64,
    pub evaluated_context: OperationalContext,
    pub decision_info: RoutingDecision,
}

/// Response envelope returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub result: InferenceOutcome,
    pub metadata: ResponseMetadata,
    pub message: String,
}

/// Executor information
#[derive(Debug, Clone)]
pub struct ExecutorInfo {
    pub id: String,
    pub name: String,
}
