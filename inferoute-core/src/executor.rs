//! Venue executor trait and core abstractions.

use crate::error::RouteError;
use crate::types::*;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core executor trait for inference venues.
///
/// This trait defines the single capability every venue must implement:
/// run a task against a model and report the outcome. The surrounding
/// concerns (context acquisition, decision, policy, response assembly)
/// live in the [`Router`](crate::runtime::Router).
#[async_trait]
pub trait VenueExecutor: Send + Sync + Debug + 'static {
    /// Get executor information
    fn info(&self) -> Arc<ExecutorInfo>;

    /// Execute an inference task with the given model.
    ///
    /// Implementations must not retry or fall back on their own: a failure
    /// here is fatal to the request and surfaced to the caller.
    async fn execute(
        &self,
        task: &InferenceTask,
        model: &str,
    ) -> Result<InferenceOutcome, RouteError>;
}
