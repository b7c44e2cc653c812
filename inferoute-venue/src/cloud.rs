//! Cloud venue executor.
//!
//! Delegates inference to a remote collaborator over HTTP. The endpoint is
//! mandatory configuration, checked when a call is made; a missing endpoint
//! is a configuration error, never a silent fallback to edge. Transport
//! failures are logged and re-raised as a generic inference error with no
//! retry.

use async_trait::async_trait;
use inferoute_core::error::RouteError;
use inferoute_core::executor::VenueExecutor;
use inferoute_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Executor for the cloud venue, backed by a remote inference service.
#[derive(Clone)]
pub struct CloudExecutor {
    client: reqwest::Client,
    endpoint: Option<String>,
    info: Arc<ExecutorInfo>,
}

impl std::fmt::Debug for CloudExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudExecutor")
            .field("endpoint", &self.endpoint)
            .field("info", &self.info)
            .finish()
    }
}

/// Wire request for the remote inference service.
#[derive(Debug, Serialize)]
struct CloudRequest<'a> {
    input: &'a str,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

/// Wire response from the remote inference service.
///
/// `model_used` and `inference_time_ms` are optional so simpler
/// collaborators that only return a prediction still parse.
#[derive(Debug, Deserialize)]
struct CloudResponse {
    prediction: String,
    confidence: f64,
    model_used: Option<String>,
    inference_time_ms: Option<f64>,
}

impl CloudExecutor {
    /// Create an executor with no endpoint configured.
    ///
    /// Calls will fail with a configuration error until an endpoint is set
    /// through the builder.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: None,
            info: Arc::new(ExecutorInfo {
                id: "cloud".to_string(),
                name: "Cloud".to_string(),
            }),
        }
    }

    /// Create a builder for configuration options
    pub fn builder() -> CloudBuilder {
        CloudBuilder::default()
    }
}

impl Default for CloudExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VenueExecutor for CloudExecutor {
    fn info(&self) -> Arc<ExecutorInfo> {
        self.info.clone()
    }

    async fn execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            RouteError::configuration("cloud inference endpoint is not configured")
        })?;

        let body = CloudRequest {
            input: &task.input,
            model,
            context: task.context.as_deref(),
        };

        let started = Instant::now();

        let response = self
            .client
            .post(endpoint)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!(endpoint, error = %e, "cloud inference call failed");
                RouteError::inference("cloud inference failed")
            })?;

        let payload: CloudResponse = response.json().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "cloud inference response unreadable");
            RouteError::inference("cloud inference failed")
        })?;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            endpoint,
            model,
            prediction = %payload.prediction,
            elapsed_ms,
            "cloud inference complete"
        );

        Ok(InferenceOutcome::new(
            payload.prediction,
            payload.model_used.unwrap_or_else(|| model.to_string()),
            payload.inference_time_ms.unwrap_or(elapsed_ms),
            payload.confidence,
            Venue::Cloud,
        ))
    }
}

/// Builder for the cloud executor.
#[derive(Default)]
pub struct CloudBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl CloudBuilder {
    /// Set the inference endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    ///
    /// The routing core enforces no timeout of its own, so this is where a
    /// deployment bounds the one suspension point in the pipeline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the executor
    pub fn build(self) -> Result<CloudExecutor, RouteError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| RouteError::configuration(format!("http client: {e}")))?;

        Ok(CloudExecutor {
            client,
            endpoint: self.endpoint,
            info: Arc::new(ExecutorInfo {
                id: "cloud".to_string(),
                name: "Cloud".to_string(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_endpoint_is_configuration_error() {
        let executor = CloudExecutor::new();
        let err = executor
            .execute(&InferenceTask::new("hello"), "basic_model")
            .await
            .unwrap_err();
        assert!(matches!(err, RouteError::Configuration(_)));
    }

    #[test]
    fn test_builder_carries_endpoint() {
        let executor = CloudExecutor::builder()
            .endpoint("http://cloud.invalid/predict")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(
            executor.endpoint.as_deref(),
            Some("http://cloud.invalid/predict")
        );
    }

    #[test]
    fn test_response_parses_without_optional_fields() {
        let payload: CloudResponse =
            serde_json::from_str(r#"{"prediction": "high", "confidence": 0.9}"#).unwrap();
        assert_eq!(payload.prediction, "high");
        assert_eq!(payload.confidence, 0.9);
        assert!(payload.model_used.is_none());
        assert!(payload.inference_time_ms.is_none());
    }

    #[test]
    fn test_request_serializes_expected_shape() {
        let body = CloudRequest {
            input: "check this",
            model: "basic_model",
            context: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["input"], "check this");
        assert_eq!(json["model"], "basic_model");
        assert!(json.get("context").is_none());
    }
}
