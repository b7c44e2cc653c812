//! Edge venue executor.
//!
//! Runs a small keyword classifier in-process: no network, low latency,
//! and in this reference implementation no failure modes. The trait still
//! returns `Result` so a production edge venue can surface real failures
//! without changing the pipeline.

use async_trait::async_trait;
use inferoute_core::error::RouteError;
use inferoute_core::executor::VenueExecutor;
use inferoute_core::types::*;
use std::sync::Arc;
use std::time::Instant;

/// Confidence reported for every edge prediction.
const EDGE_CONFIDENCE: f64 = 0.85;

/// Local, synchronous executor for the edge venue.
#[derive(Debug, Clone)]
pub struct EdgeExecutor {
    info: Arc<ExecutorInfo>,
}

impl EdgeExecutor {
    /// Create a new edge executor
    pub fn new() -> Self {
        Self {
            info: Arc::new(ExecutorInfo {
                id: "edge".to_string(),
                name: "Edge".to_string(),
            }),
        }
    }

    /// Priority classification optimized for the edge: simple and fast.
    fn classify(input: &str) -> &'static str {
        let input = input.to_lowercase();
        if input.contains("urgent") || input.contains("critical") {
            "high"
        } else if input.contains("important") {
            "medium"
        } else {
            "low"
        }
    }
}

impl Default for EdgeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VenueExecutor for EdgeExecutor {
    fn info(&self) -> Arc<ExecutorInfo> {
        self.info.clone()
    }

    async fn execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError> {
        let started = Instant::now();
        let prediction = Self::classify(&task.input);
        let inference_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(model, prediction, inference_time_ms, "edge inference complete");

        Ok(InferenceOutcome::new(
            prediction,
            model,
            inference_time_ms,
            EDGE_CONFIDENCE,
            Venue::Edge,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_urgent_input_classifies_high() {
        let executor = EdgeExecutor::new();
        let outcome = executor
            .execute(&InferenceTask::new("URGENT: line down"), "edge_model")
            .await
            .unwrap();
        assert_eq!(outcome.prediction, "high");
        assert_eq!(outcome.model_used, "edge_model");
        assert_eq!(outcome.source, Venue::Edge);
    }

    #[tokio::test]
    async fn test_important_input_classifies_medium() {
        let executor = EdgeExecutor::new();
        let outcome = executor
            .execute(&InferenceTask::new("important maintenance window"), "edge_model")
            .await
            .unwrap();
        assert_eq!(outcome.prediction, "medium");
    }

    #[tokio::test]
    async fn test_plain_input_classifies_low() {
        let executor = EdgeExecutor::new();
        let outcome = executor
            .execute(&InferenceTask::new("routine check"), "edge_model")
            .await
            .unwrap();
        assert_eq!(outcome.prediction, "low");
        assert_eq!(outcome.confidence, EDGE_CONFIDENCE);
    }
}
