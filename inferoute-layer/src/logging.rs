//! Logging layer for executor operations.

use async_trait::async_trait;
use inferoute_core::error::RouteError;
use inferoute_core::executor::VenueExecutor;
use inferoute_core::layer::{Layer, LayeredExecutor};
use inferoute_core::types::*;
use std::fmt::Debug;
use std::sync::Arc;

/// Logging layer that logs executor operations.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self {
            prefix: "[inferoute]".to_string(),
        }
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: VenueExecutor> Layer<E> for LoggingLayer {
    type LayeredExecutor = LoggingExecutor<E>;

    fn layer(&self, inner: E) -> Self::LayeredExecutor {
        LoggingExecutor {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Executor wrapped with logging
#[derive(Debug)]
pub struct LoggingExecutor<E> {
    inner: E,
    prefix: String,
}

#[async_trait]
impl<E: VenueExecutor> LayeredExecutor for LoggingExecutor<E> {
    type Inner = E;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError> {
        let venue = self.inner.info().id.clone();
        tracing::debug!(
            "{} execute request: venue={}, model={}, input_len={}",
            self.prefix,
            venue,
            model,
            task.input.len()
        );

        let start = std::time::Instant::now();
        let result = self.inner.execute(task, model).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(outcome) => {
                tracing::debug!(
                    "{} execute success: venue={}, prediction={}, confidence={}, elapsed={:?}",
                    self.prefix,
                    venue,
                    outcome.prediction,
                    outcome.confidence,
                    elapsed
                );
            }
            Err(e) => {
                tracing::error!(
                    "{} execute error: venue={}, error={:?}, elapsed={:?}",
                    self.prefix,
                    venue,
                    e,
                    elapsed
                );
            }
        }

        result
    }
}

#[async_trait]
impl<E: VenueExecutor> VenueExecutor for LoggingExecutor<E> {
    fn info(&self) -> Arc<ExecutorInfo> {
        LayeredExecutor::layered_info(self)
    }

    async fn execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError> {
        LayeredExecutor::layered_execute(self, task, model).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct EchoExecutor;

    #[async_trait]
    impl VenueExecutor for EchoExecutor {
        fn info(&self) -> Arc<ExecutorInfo> {
            Arc::new(ExecutorInfo {
                id: "echo".to_string(),
                name: "Echo".to_string(),
            })
        }

        async fn execute(
            &self,
            task: &InferenceTask,
            model: &str,
        ) -> Result<InferenceOutcome, RouteError> {
            Ok(InferenceOutcome::new(
                task.input.clone(),
                model,
                0.1,
                0.9,
                Venue::Edge,
            ))
        }
    }

    #[tokio::test]
    async fn test_layer_forwards_to_inner() {
        let layered = LoggingLayer::new().layer(EchoExecutor);
        let outcome = layered
            .execute(&InferenceTask::new("ping"), "edge_model")
            .await
            .unwrap();
        assert_eq!(outcome.prediction, "ping");
        assert_eq!(outcome.model_used, "edge_model");
        assert_eq!(layered.info().id, "echo");
    }
}
